// VSL - vsl-foundation
// Module: BoundedString - Inline-storage null-terminated byte string
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for the contiguous `N + 1` byte view of the storage
#![allow(unsafe_code)]

//! Fixed-capacity, null-terminated byte string with inline storage.
//!
//! `BoundedString<N>` holds up to `N` bytes of content followed by a
//! terminator, in one contiguous block of `N + 1` bytes, so the buffer can be
//! handed to C-style APIs as is. Characters are bytes; there is no Unicode
//! awareness.
//!
//! # Characteristics
//!
//! - **Zero allocation**: all memory is inline
//! - **Always terminated**: `buffer[len] == 0` after every public operation
//! - **Platform bound**: `N < limits::MAX_STRING_LENGTH`, checked at build time
//! - **Silent truncation**: [`BoundedString::assign`] keeps the first `N`
//!   bytes; [`BoundedString::try_assign`] reports the overflow instead

use core::{
    cmp::Ordering,
    ffi::CStr,
    fmt::{self, Write as _},
    hash::{Hash, Hasher},
    ops::Index,
    slice,
};

use vsl_error::{Error, Result};

use crate::{conversion::ReversedDecimal, limits::MAX_STRING_LENGTH, Length};

/// Content bytes followed directly by the terminator byte.
///
/// `repr(C)` with only `u8` fields: size `N + 1`, alignment 1, no padding.
#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)] // fields are read through the byte view
struct Terminated<const N: usize> {
    bytes: [u8; N],
    nul:   u8,
}

impl<const N: usize> Terminated<N> {
    const LAYOUT_CHECK: () = assert!(
        core::mem::size_of::<Self>() == N + 1,
        "Terminated buffer must be exactly N + 1 contiguous bytes"
    );

    const fn new() -> Self {
        let () = Self::LAYOUT_CHECK;
        Self {
            bytes: [0; N],
            nul:   0,
        }
    }

    #[inline]
    fn as_slice(&self) -> &[u8] {
        // SAFETY: `Self` is `repr(C)` with `u8` fields only, so it is `N + 1`
        // initialized bytes with no padding (checked by LAYOUT_CHECK).
        unsafe { slice::from_raw_parts((self as *const Self).cast::<u8>(), N + 1) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: see `as_slice`; the exclusive borrow of `self` covers all
        // `N + 1` bytes and any `u8` value is valid for every field.
        unsafe { slice::from_raw_parts_mut((self as *mut Self).cast::<u8>(), N + 1) }
    }
}

/// A byte string with compile-time capacity `N` and a guaranteed terminator.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. `buffer[len] == 0` after every public operation
/// 3. `N < limits::MAX_STRING_LENGTH` (build failure otherwise)
///
/// # Examples
///
/// ```
/// use vsl_foundation::BoundedString;
///
/// let mut label = BoundedString::<8>::from("temp");
/// label.push_back(b':')?;
/// assert_eq!(label, "temp:");
/// assert_eq!(label.c_str(), b"temp:\0");
///
/// label.from_int(-40)?;
/// assert_eq!(label, "-40");
///
/// // Silent truncation keeps the first 8 bytes
/// label.assign(b"overlong text");
/// assert_eq!(label, "overlong");
/// # Ok::<(), vsl_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct BoundedString<const N: usize> {
    /// Inline `N + 1` byte buffer
    buf: Terminated<N>,

    /// Number of content bytes, excluding the terminator
    /// Invariant: len <= N
    len: Length,
}

impl<const N: usize> BoundedString<N> {
    /// Compile-time capacity, excluding the terminator.
    pub const CAPACITY: Length = N;

    const CAPACITY_CHECK: () = assert!(
        N < MAX_STRING_LENGTH,
        "BoundedString capacity exceeds the platform maximum string length"
    );

    /// Creates an empty string.
    ///
    /// A capacity at or above [`MAX_STRING_LENGTH`] is rejected at build time:
    ///
    /// ```compile_fail,E0080
    /// use vsl_foundation::{limits::MAX_STRING_LENGTH, BoundedString};
    ///
    /// let _ = BoundedString::<{ MAX_STRING_LENGTH }>::new();
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            buf: Terminated::new(),
            len: 0,
        }
    }

    /// Creates a string from the bytes of `source` up to its first NUL,
    /// silently keeping at most `N` of them.
    #[must_use]
    pub fn from_bytes(source: &[u8]) -> Self {
        let mut string = Self::new();
        string.assign(source);
        string
    }

    /// Creates a string from a nullable C string.
    ///
    /// # Errors
    ///
    /// Returns a null reference error if `source` is `None`.
    pub fn from_c_str(source: Option<&CStr>) -> Result<Self> {
        let mut string = Self::new();
        string.assign_c_str(source)?;
        Ok(string)
    }

    /// Returns the content followed by the terminator (`len + 1` bytes).
    #[inline]
    #[must_use]
    pub fn c_str(&self) -> &[u8] {
        &self.buf.as_slice()[..=self.len]
    }

    /// Returns the content as C sees it: up to the first NUL byte.
    ///
    /// Differs from [`Self::as_bytes`] only if a NUL was pushed explicitly.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.c_str()).unwrap_or_default()
    }

    /// Returns the content bytes, excluding the terminator.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_slice()[..self.len]
    }

    /// Returns the content as text.
    ///
    /// # Errors
    ///
    /// Returns a conversion error if the content is not valid UTF-8.
    pub fn as_str(&self) -> Result<&str> {
        Ok(core::str::from_utf8(self.as_bytes())?)
    }

    /// Returns the whole `N + 1` byte buffer for external writers.
    ///
    /// Writes through this buffer do not update the length; call
    /// [`Self::reconcile_len`] afterwards.
    #[inline]
    pub fn data(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }

    /// Re-derives the length from the first NUL in the content area after
    /// external writes through [`Self::data`], and restores the terminator.
    ///
    /// Returns the new length.
    pub fn reconcile_len(&mut self) -> Length {
        let buf = self.buf.as_mut_slice();
        let len = buf[..N].iter().position(|&b| b == 0).unwrap_or(N);
        buf[len] = 0;
        self.len = len;
        len
    }

    /// Returns the number of content bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> Length {
        self.len
    }

    /// Returns the compile-time capacity, excluding the terminator.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> Length {
        N
    }

    /// Returns `true` if the string has no content.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further byte fits.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns how many more bytes fit.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> Length {
        N - self.len
    }

    /// Empties the string.
    #[inline]
    pub fn clear(&mut self) {
        self.set_len(0);
    }

    /// Length of `source` as a C string: up to its first NUL or its end.
    fn c_len(source: &[u8]) -> Length {
        source.iter().position(|&b| b == 0).unwrap_or(source.len())
    }

    #[inline]
    fn set_len(&mut self, len: Length) {
        self.len = len;
        self.buf.as_mut_slice()[len] = 0;
    }

    fn copy_in(&mut self, source: &[u8]) {
        self.buf.as_mut_slice()[..source.len()].copy_from_slice(source);
        self.set_len(source.len());
    }

    /// Replaces the content with `source` up to its first NUL, keeping at
    /// most `N` bytes. Truncation is silent.
    ///
    /// Returns the number of bytes copied; a result smaller than the source
    /// length means the source was cut.
    pub fn assign(&mut self, source: &[u8]) -> Length {
        trace_scope!(string_assign, source.len(), N);

        let wanted = Self::c_len(source);
        let copied = wanted.min(N);
        if copied < wanted {
            trace_event!(
                trace,
                source_len = wanted,
                capacity = N,
                "BoundedString::assign truncated"
            );
        }

        self.copy_in(&source[..copied]);
        copied
    }

    /// Text counterpart of [`Self::assign`].
    #[inline]
    pub fn assign_str(&mut self, source: &str) -> Length {
        self.assign(source.as_bytes())
    }

    /// Replaces the content with `source` up to its first NUL, refusing to
    /// truncate.
    ///
    /// # Errors
    ///
    /// Returns a truncation error if more than `N` bytes would be needed;
    /// the string is left untouched.
    pub fn try_assign(&mut self, source: &[u8]) -> Result<()> {
        let wanted = Self::c_len(source);
        if wanted > N {
            trace_event!(
                debug,
                source_len = wanted,
                capacity = N,
                "BoundedString::try_assign rejected"
            );
            return Err(Error::truncated("BoundedString source longer than capacity"));
        }

        self.copy_in(&source[..wanted]);
        Ok(())
    }

    /// Replaces the content with a nullable C string, silently keeping at
    /// most `N` bytes.
    ///
    /// # Errors
    ///
    /// Returns a null reference error if `source` is `None`; the string is
    /// left untouched.
    pub fn assign_c_str(&mut self, source: Option<&CStr>) -> Result<()> {
        let Some(source) = source else {
            trace_event!(debug, "BoundedString::assign_c_str from null");
            return Err(Error::null_reference("BoundedString assigned from null C string"));
        };
        self.assign(source.to_bytes());
        Ok(())
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the string is full; the string is left
    /// untouched.
    pub fn push_back(&mut self, byte: u8) -> Result<()> {
        if self.len >= N {
            trace_event!(debug, capacity = N, "BoundedString::push_back on full string");
            return Err(Error::capacity_exceeded("BoundedString capacity exceeded"));
        }

        self.buf.as_mut_slice()[self.len] = byte;
        self.set_len(self.len + 1);
        Ok(())
    }

    /// Appends all of `text` or nothing.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if `text` does not fit; the string is left
    /// untouched.
    pub fn push_str(&mut self, text: &str) -> Result<()> {
        let bytes = text.as_bytes();
        if bytes.len() > self.remaining_capacity() {
            trace_event!(
                debug,
                text_len = bytes.len(),
                remaining = self.remaining_capacity(),
                "BoundedString::push_str does not fit"
            );
            return Err(Error::capacity_exceeded("BoundedString capacity exceeded"));
        }

        let start = self.len;
        self.buf.as_mut_slice()[start..start + bytes.len()].copy_from_slice(bytes);
        self.set_len(start + bytes.len());
        Ok(())
    }

    /// Replaces the content with the base-10 rendering of `value`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the rendering (sign included) is longer
    /// than `N`. The string is cleared either way.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_int(&mut self, value: i32) -> Result<()> {
        trace_scope!(string_format, i64::from(value), N);
        self.write_decimal(&ReversedDecimal::from_i32(value))
    }

    /// Unsigned counterpart of [`Self::from_int`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::from_int`].
    #[allow(clippy::wrong_self_convention)]
    pub fn from_uint(&mut self, value: u32) -> Result<()> {
        trace_scope!(string_format, i64::from(value), N);
        self.write_decimal(&ReversedDecimal::from_u32(value))
    }

    fn write_decimal(&mut self, decimal: &ReversedDecimal) -> Result<()> {
        self.clear();

        if decimal.len() > N {
            trace_event!(
                debug,
                rendered_len = decimal.len(),
                capacity = N,
                "BoundedString::from_int does not fit"
            );
            return Err(Error::capacity_exceeded("Formatted integer exceeds BoundedString capacity"));
        }

        let buf = self.buf.as_mut_slice();
        for (slot, digit) in buf.iter_mut().zip(decimal.digits()) {
            *slot = digit;
        }
        self.set_len(decimal.len());
        Ok(())
    }

    /// Returns the byte at `index`, or `0` if `index >= len`.
    #[inline]
    #[must_use]
    pub fn at(&self, index: Length) -> u8 {
        if index < self.len {
            self.buf.as_slice()[index]
        } else {
            0
        }
    }

    /// Compares against a nullable C string with C semantics.
    ///
    /// `None` never compares equal. Otherwise both sides are compared up to
    /// their first NUL.
    #[must_use]
    pub fn eq_c_str(&self, other: Option<&CStr>) -> bool {
        other.is_some_and(|other| self.as_c_str() == other)
    }
}

impl<const N: usize> Default for BoundedString<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<&str> for BoundedString<N> {
    fn from(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }
}

// Unchecked against the length: any byte of the `N + 1` byte buffer.
impl<const N: usize> Index<Length> for BoundedString<N> {
    type Output = u8;

    #[inline]
    fn index(&self, index: Length) -> &u8 {
        &self.buf.as_slice()[index]
    }
}

impl<const N: usize, const M: usize> PartialEq<BoundedString<M>> for BoundedString<N> {
    fn eq(&self, other: &BoundedString<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for BoundedString<N> {}

impl<const N: usize> PartialEq<[u8]> for BoundedString<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<CStr> for BoundedString<N> {
    fn eq(&self, other: &CStr) -> bool {
        self.as_c_str() == other
    }
}

impl<const N: usize> PartialOrd for BoundedString<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for BoundedString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const N: usize> Hash for BoundedString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

// Each `write_str` is all or nothing; earlier writes are kept on overflow.
impl<const N: usize> fmt::Write for BoundedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s).map_err(|_| fmt::Error)
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_push_back_keeps_terminator() {
        let mut string: BoundedString<3> = BoundedString::new();
        let pushes: usize = kani::any();
        kani::assume(pushes <= 4);

        for _ in 0..pushes {
            let byte: u8 = kani::any();
            let _ = string.push_back(byte);
            assert!(string.len() <= 3);
            assert!(string[string.len()] == 0);
        }
    }

    #[kani::proof]
    #[kani::unwind(13)]
    fn verify_from_int_bounded() {
        let value: i32 = kani::any();
        let mut string: BoundedString<4> = BoundedString::new();

        if string.from_int(value).is_err() {
            assert!(string.is_empty());
        }
        assert!(string[string.len()] == 0);
    }
}

// ============================================================================
// Tests
// ============================================================================
