// VSL - vsl-foundation
// Module: Internal logging macros
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Logging macros that compile to nothing without the `tracing` feature.

/// Emit a tracing event at `debug` or `trace` level.
///
/// Without the `tracing` feature the arguments are never evaluated.
macro_rules! trace_event {
    (debug, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::debug!($($arg)*);
        }
    };
    (trace, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::trace!($($arg)*);
        }
    };
}

/// Enter a `ContainerTrace` span until the end of the enclosing scope.
macro_rules! trace_scope {
    ($kind:ident, $($arg:expr),* $(,)?) => {
        #[cfg(feature = "tracing")]
        let _span_guard = $crate::tracing::ContainerTrace::$kind($($arg),*).entered();
    };
}
