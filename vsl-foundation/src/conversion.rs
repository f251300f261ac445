// VSL - vsl-foundation
// Module: Integer to decimal text conversion
// SW-REQ-ID: REQ_018
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Base-10 rendering of integers into a fixed scratch buffer.
//!
//! Digits are produced least-significant first by repeated division by 10.
//! Consumers copy them out in reverse to get the display order, which keeps
//! the hot loop free of any shifting.

use crate::limits::INT_SCRATCH_LEN;

/// Decimal digits of an integer, stored least-significant first.
///
/// The sign, if any, is the last byte of the reversed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReversedDecimal {
    scratch: [u8; INT_SCRATCH_LEN],
    len:     usize,
}

impl ReversedDecimal {
    /// Renders a signed value.
    ///
    /// The magnitude is taken in the unsigned type, so `i32::MIN` is rendered
    /// without ever negating it in `i32`.
    #[must_use]
    pub fn from_i32(value: i32) -> Self {
        Self::render(value.unsigned_abs(), value < 0)
    }

    /// Renders an unsigned value.
    #[must_use]
    pub fn from_u32(value: u32) -> Self {
        Self::render(value, false)
    }

    fn render(mut magnitude: u32, negative: bool) -> Self {
        let mut scratch = [0u8; INT_SCRATCH_LEN];
        let mut len = 0;

        // u32::MAX has 10 digits; with the sign that is at most 11 bytes.
        loop {
            scratch[len] = b'0' + (magnitude % 10) as u8;
            len += 1;
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }

        if negative {
            scratch[len] = b'-';
            len += 1;
        }

        Self { scratch, len }
    }

    /// Number of bytes in the rendering, sign included.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: zero renders as `"0"`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The rendering, least-significant digit first.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> &[u8] {
        &self.scratch[..self.len]
    }

    /// The rendering in display order.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.reversed().iter().rev().copied()
    }
}
