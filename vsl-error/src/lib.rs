// VSL - vsl-error
// Module: VSL Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! VSL Error handling library
//!
//! Every runtime-detectable failure in the bounded containers is reported to
//! the immediate caller as a [`Result`]. Nothing is thrown, allocated or
//! escalated: an [`Error`] is a `Copy` value with a category, a numeric code
//! and a static message.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1099)
//! - Container full
//! - Reported truncation
//!
//! ## Parameter Errors (1100-1199)
//! - Null C-string input
//!
//! ## Bounds Errors (1200-1299)
//! - Length outside physical storage
//!
//! ## Conversion Errors (1300-1399)
//! - Invalid UTF-8 content
//!
//! # Usage
//!
//! ```
//! use vsl_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Capacity,
//!     codes::CAPACITY_EXCEEDED,
//!     "BoundedArray capacity exceeded",
//! );
//! assert!(error.is_capacity_error());
//! assert_eq!(error, Error::capacity_exceeded("any message"));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for vsl
pub mod codes;
/// Error and error handling types
pub mod errors;

// Re-export key types
pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for VSL operations.
pub type Result<T> = core::result::Result<T, Error>;
