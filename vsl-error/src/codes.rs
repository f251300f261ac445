// VSL - vsl-error
// Module: VSL Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for VSL
//!
//! Codes are grouped per [`crate::ErrorCategory`] in blocks of 100.

// Capacity error codes (1000-1099)
/// Operation would grow a bounded container past its capacity
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// Source data was longer than the destination capacity and was rejected
pub const TRUNCATED: u16 = 1001;

// Parameter error codes (1100-1199)
/// Null reference passed where a C string was expected
pub const NULL_REFERENCE: u16 = 1100;

// Bounds error codes (1200-1299)
/// Index or length outside the physical storage of a container
pub const OUT_OF_BOUNDS: u16 = 1200;

// Conversion error codes (1300-1399)
/// Byte content is not valid UTF-8
pub const INVALID_UTF8: u16 = 1300;
