//! Tracing support for the bounded containers
//!
//! Wraps the `tracing` crate (default features off, so it works without
//! `std`). Only failure and truncation paths emit events; successful
//! operations stay silent.

#![cfg(feature = "tracing")]

pub use ::tracing::{debug, trace, Level, Span};
pub use ::tracing::{debug_span, trace_span};

/// Spans for bulk container operations
#[derive(Debug, Clone)]
pub struct ContainerTrace;

impl ContainerTrace {
    /// Create a span for a bulk array assignment
    #[inline]
    pub fn array_assign(source_len: usize, capacity: usize) -> Span {
        trace_span!("array_assign", source_len = %source_len, capacity = %capacity)
    }

    /// Create a span for a string assignment
    #[inline]
    pub fn string_assign(source_len: usize, capacity: usize) -> Span {
        trace_span!("string_assign", source_len = %source_len, capacity = %capacity)
    }

    /// Create a span for integer formatting into a string
    #[inline]
    pub fn string_format(value: i64, capacity: usize) -> Span {
        trace_span!("string_format", value = %value, capacity = %capacity)
    }
}
