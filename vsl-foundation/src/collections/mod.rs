// VSL - vsl-foundation
// Module: Bounded collections with inline storage
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded collections with compile-time capacity and inline storage.
//!
//! Neither collection allocates, and neither depends on the other.

pub mod bounded_array;
pub mod bounded_string;

pub use bounded_array::BoundedArray;
pub use bounded_string::BoundedString;
