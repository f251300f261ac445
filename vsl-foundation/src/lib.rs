// VSL - vsl-foundation
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity, non-allocating containers for microcontroller-class
//! targets.
//!
//! This crate provides two independent containers whose capacity is a
//! compile-time parameter and whose storage lives inline in the instance:
//!
//! - [`BoundedArray<T, N>`]: up to `N` `Copy` elements with a logical length
//! - [`BoundedString<N>`]: up to `N` bytes plus a guaranteed NUL terminator
//!
//! All runtime failures are returned as [`vsl_error::Result`]; nothing
//! allocates, blocks or performs I/O.
//!
//! # Feature Flags
//!
//! - `embedded-small` / `embedded-medium`: platform profile selecting
//!   [`limits::MAX_STRING_LENGTH`]
//! - `checked-access`: keep [`BoundedArray::at`] checked in release builds
//! - `tracing`: structured events on failure paths
//! - `std`: link the standard library
//! - Default: pure `no_std` hosted profile

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

// Re-export error related types for convenience
pub use vsl_error::{codes, Error, ErrorCategory};

/// Integer type used for every size, capacity and index.
pub type Length = usize;

/// Bounded collections with inline storage
pub mod collections;
/// Integer to decimal text conversion
pub mod conversion;
/// Platform-specific capacity limits
pub mod limits;
/// Structured tracing helpers
pub mod tracing;

pub use collections::{BoundedArray, BoundedString};
pub use conversion::ReversedDecimal;
