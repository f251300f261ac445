// VSL - vsl-error
// Module: VSL Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error type shared by all bounded containers.
//!
//! Errors are plain `Copy` values carrying a static message, so reporting a
//! failure never allocates and never unwinds.

use core::fmt;

use crate::codes;

/// `Error` categories for VSL operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Capacity errors (container full, source too long)
    Capacity   = 1,
    /// Parameter errors (null input)
    Parameter  = 2,
    /// Bounds errors (index or length outside storage)
    Bounds     = 3,
    /// Conversion errors (byte content to text)
    Conversion = 4,
}

/// VSL `Error` type
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create a reported truncation error
    #[must_use]
    pub const fn truncated(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::TRUNCATED, message)
    }

    /// Create a null reference error
    #[must_use]
    pub const fn null_reference(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parameter, codes::NULL_REFERENCE, message)
    }

    /// Create an out of bounds error
    #[must_use]
    pub const fn out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::OUT_OF_BOUNDS, message)
    }

    /// Create an invalid UTF-8 error
    #[must_use]
    pub const fn invalid_utf8(message: &'static str) -> Self {
        Self::new(ErrorCategory::Conversion, codes::INVALID_UTF8, message)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a parameter error
    #[must_use]
    pub fn is_parameter_error(&self) -> bool {
        self.category == ErrorCategory::Parameter
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a conversion error
    #[must_use]
    pub fn is_conversion_error(&self) -> bool {
        self.category == ErrorCategory::Conversion
    }
}

// Two errors are the same failure when category and code agree; the message
// is diagnostic only.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.code == other.code
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

// A bounded `fmt::Write` sink only fails when it runs out of room.
impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::capacity_exceeded("Formatted output exceeds capacity")
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Self {
        Self::invalid_utf8("Content is not valid UTF-8")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
