// VSL - vsl-foundation
// Module: BoundedArray - Inline-storage array with a logical length
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity array with inline storage and a logical length.
//!
//! `BoundedArray<T, N>` owns exactly `N` elements of storage and tracks how
//! many of them, counted from the front, are valid. It never allocates and
//! never reallocates.
//!
//! # Access tiers
//!
//! | method            | checks                         | on bad index             |
//! |-------------------|--------------------------------|--------------------------|
//! | `arr[i]`          | physical capacity only         | stale element or panic   |
//! | [`BoundedArray::at`] | logical length, when enabled | fatal                    |
//! | [`BoundedArray::at_or`], [`BoundedArray::get`] | logical length | default / `None` |
//!
//! `at` is checked when `debug_assertions` is on or the `checked-access`
//! feature is enabled; see [`BoundedArray::CHECKED_ACCESS`].
//!
//! # Element types
//!
//! Elements must be `Copy`: bulk assignment is a plain memory copy and the
//! storage is never dropped element by element.

use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice,
};

use vsl_error::{Error, Result};

use crate::Length;

/// An array with compile-time capacity, inline storage and a logical length.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Elements in `[0, len)` are the logical content
/// 3. Elements in `[len, N)` are initialized but unspecified
///
/// # Examples
///
/// ```
/// use vsl_foundation::BoundedArray;
///
/// let mut samples = BoundedArray::<u16, 4>::new();
/// samples.assign(&[10, 20, 30])?;
///
/// assert_eq!(samples.len(), 3);
/// assert_eq!(samples.at_or(1, 0), 20);
/// assert_eq!(samples.at_or(3, 0), 0);
/// assert!(samples.assign(&[1, 2, 3, 4, 5]).is_err());
/// assert_eq!(samples.as_slice(), &[10, 20, 30]);
/// # Ok::<(), vsl_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct BoundedArray<T: Copy, const N: usize> {
    /// Inline storage, always fully initialized
    data: [T; N],

    /// Number of logically valid elements
    /// Invariant: len <= N
    len: Length,
}

impl<T: Copy + Default, const N: usize> BoundedArray<T, N> {
    /// Creates an empty array with default-filled storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_fill(T::default())
    }
}

impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Compile-time capacity.
    pub const CAPACITY: Length = N;

    /// Whether [`Self::at`] verifies the index against the logical length.
    pub const CHECKED_ACCESS: bool = cfg!(any(debug_assertions, feature = "checked-access"));

    /// Creates an empty array whose storage is filled with `fill`.
    ///
    /// Usable in `const` and `static` initializers.
    #[inline]
    #[must_use]
    pub const fn from_fill(fill: T) -> Self {
        Self {
            data: [fill; N],
            len:  0,
        }
    }

    /// Returns the number of logically valid elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> Length {
        self.len
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> Length {
        N
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the array holds `N` elements.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns how many more elements fit.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> Length {
        N - self.len
    }

    /// Returns the whole capacity-sized storage.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &[T; N] {
        &self.data
    }

    /// Returns the whole capacity-sized storage for external writers.
    ///
    /// Writes past [`Self::len`] are not part of the logical content until
    /// [`Self::set_len`] is called.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// Sets the logical length after the storage was filled through
    /// [`Self::data_mut`].
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error if `len > N`; the length is unchanged.
    pub fn set_len(&mut self, len: Length) -> Result<()> {
        if len > N {
            trace_event!(debug, len, capacity = N, "BoundedArray::set_len past capacity");
            return Err(Error::out_of_bounds("BoundedArray length exceeds capacity"));
        }
        self.len = len;
        Ok(())
    }

    /// Debug-checked element access.
    ///
    /// # Panics
    ///
    /// When [`Self::CHECKED_ACCESS`] is `true`, panics if `index >= len`
    /// (an abort under the workspace `panic = "abort"` profiles). Otherwise
    /// only the physical capacity is checked, exactly like `arr[index]`.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn at(&self, index: Length) -> &T {
        if Self::CHECKED_ACCESS {
            assert!(
                index < self.len,
                "BoundedArray::at index {index} out of bounds (len {})",
                self.len
            );
        }
        &self.data[index]
    }

    /// Mutable counterpart of [`Self::at`].
    ///
    /// # Panics
    ///
    /// Same conditions as [`Self::at`].
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: Length) -> &mut T {
        if Self::CHECKED_ACCESS {
            assert!(
                index < self.len,
                "BoundedArray::at_mut index {index} out of bounds (len {})",
                self.len
            );
        }
        &mut self.data[index]
    }

    /// Returns the element at `index`, or `default_value` if `index >= len`.
    #[inline]
    #[must_use]
    pub fn at_or(&self, index: Length, default_value: T) -> T {
        if index < self.len {
            self.data[index]
        } else {
            default_value
        }
    }

    /// Returns the element at `index` if it is part of the logical content.
    #[inline]
    #[must_use]
    pub fn get(&self, index: Length) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable counterpart of [`Self::get`].
    #[inline]
    pub fn get_mut(&mut self, index: Length) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Replaces the logical content with a copy of `source`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if `source.len() > N`; the array is left
    /// untouched.
    pub fn assign(&mut self, source: &[T]) -> Result<()> {
        trace_scope!(array_assign, source.len(), N);

        if source.len() > N {
            trace_event!(
                debug,
                source_len = source.len(),
                capacity = N,
                "BoundedArray::assign rejected"
            );
            return Err(Error::capacity_exceeded("BoundedArray capacity exceeded"));
        }

        self.data[..source.len()].copy_from_slice(source);
        self.len = source.len();
        Ok(())
    }

    /// Copy assignment from an array of any capacity.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if `other.len() > N`; the array is left
    /// untouched.
    pub fn assign_from<const M: usize>(&mut self, other: &BoundedArray<T, M>) -> Result<()> {
        self.assign(other.as_slice())
    }

    /// Returns the logical content.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Returns the logical content mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Iterates over the logical content.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates mutably over the logical content.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedArray<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> TryFrom<&[T]> for BoundedArray<T, N> {
    type Error = Error;

    fn try_from(source: &[T]) -> Result<Self> {
        let mut array = Self::new();
        array.assign(source)?;
        Ok(array)
    }
}

// Fast path: bounded by the storage, not by the logical length.
impl<T: Copy, const N: usize> Index<Length> for BoundedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: Length) -> &T {
        &self.data[index]
    }
}

impl<T: Copy, const N: usize> IndexMut<Length> for BoundedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: Length) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Copy + PartialEq, const N: usize, const M: usize> PartialEq<BoundedArray<T, M>>
    for BoundedArray<T, N>
{
    fn eq(&self, other: &BoundedArray<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const N: usize> Eq for BoundedArray<T, N> {}

impl<T: Copy + PartialEq, const N: usize> PartialEq<[T]> for BoundedArray<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq<&[T]> for BoundedArray<T, N> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Copy + Hash, const N: usize> Hash for BoundedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a BoundedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut BoundedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_assign_respects_capacity() {
        let source: [u8; 4] = kani::any();
        let take: usize = kani::any();
        kani::assume(take <= source.len());

        let mut array: BoundedArray<u8, 3> = BoundedArray::new();
        let result = array.assign(&source[..take]);

        assert!(array.len() <= 3);
        assert!(result.is_ok() == (take <= 3));
        if result.is_err() {
            assert!(array.is_empty());
        }
    }

    #[kani::proof]
    fn verify_at_or_never_reads_past_len() {
        let mut array: BoundedArray<u8, 4> = BoundedArray::from_fill(7);
        let index: usize = kani::any();
        let _ = array.assign(&[1, 2]);

        let value = array.at_or(index, 0);
        if index >= 2 {
            assert!(value == 0);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let array: BoundedArray<u32, 10> = BoundedArray::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 10);
        assert_eq!(BoundedArray::<u32, 10>::CAPACITY, 10);
        assert!(array.is_empty());
        assert!(!array.is_full());
        assert_eq!(array.remaining_capacity(), 10);
    }

    #[test]
    fn test_const_construction() {
        static TABLE: BoundedArray<u8, 4> = BoundedArray::from_fill(0xAA);
        assert!(TABLE.is_empty());
        assert_eq!(TABLE.data(), &[0xAA; 4]);
    }

    #[test]
    fn test_assign_exact_capacity() -> Result<()> {
        let mut array = BoundedArray::<u32, 3>::new();
        array.assign(&[1, 2, 3])?;

        assert_eq!(array.len(), 3);
        assert!(array.is_full());
        assert_eq!(array.as_slice(), &[1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_assign_over_capacity_leaves_content() -> Result<()> {
        let mut array = BoundedArray::<u32, 3>::new();
        array.assign(&[7, 8])?;

        let err = array.assign(&[1, 2, 3, 4]).unwrap_err();
        assert!(err.is_capacity_error());
        assert_eq!(array.as_slice(), &[7, 8]);
        assert_eq!(array.data(), &[7, 8, 0]);
        Ok(())
    }

    #[test]
    fn test_assign_shrinks_logical_content() -> Result<()> {
        let mut array = BoundedArray::<u8, 4>::new();
        array.assign(&[1, 2, 3, 4])?;
        array.assign(&[9])?;

        assert_eq!(array.len(), 1);
        assert_eq!(array.as_slice(), &[9]);
        // Storage past the logical end keeps stale values
        assert_eq!(array[2], 3);
        Ok(())
    }

    #[test]
    fn test_at_or() -> Result<()> {
        let mut array = BoundedArray::<i16, 4>::new();
        array.assign(&[-1, -2])?;

        assert_eq!(array.at_or(0, 99), -1);
        assert_eq!(array.at_or(1, 99), -2);
        assert_eq!(array.at_or(2, 99), 99);
        assert_eq!(array.at_or(usize::MAX, 99), 99);
        Ok(())
    }

    #[test]
    fn test_get() -> Result<()> {
        let mut array = BoundedArray::<u8, 4>::new();
        array.assign(&[5])?;

        assert_eq!(array.get(0), Some(&5));
        assert_eq!(array.get(1), None);
        if let Some(value) = array.get_mut(0) {
            *value = 6;
        }
        assert_eq!(array.as_slice(), &[6]);
        Ok(())
    }

    #[test]
    fn test_at_within_len() -> Result<()> {
        let mut array = BoundedArray::<u8, 4>::new();
        array.assign(&[3, 4])?;

        assert_eq!(*array.at(1), 4);
        *array.at_mut(0) = 30;
        assert_eq!(array.as_slice(), &[30, 4]);
        Ok(())
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "checked-access"))]
    #[should_panic(expected = "out of bounds")]
    fn test_at_checked_past_len() {
        let array = BoundedArray::<u8, 4>::new();
        let _ = array.at(0);
    }

    #[test]
    #[cfg(not(any(debug_assertions, feature = "checked-access")))]
    fn test_at_unchecked_reads_storage() {
        let array = BoundedArray::<u8, 4>::from_fill(5);
        assert_eq!(*array.at(3), 5);
    }

    #[test]
    #[should_panic]
    fn test_index_past_capacity_panics() {
        let array = BoundedArray::<u8, 4>::new();
        let _value = array[4];
    }

    #[test]
    fn test_data_mut_and_set_len() -> Result<()> {
        let mut array = BoundedArray::<u8, 4>::new();
        array.data_mut()[..3].copy_from_slice(b"abc");
        assert!(array.is_empty());

        array.set_len(3)?;
        assert_eq!(array.as_slice(), b"abc");

        let err = array.set_len(5).unwrap_err();
        assert!(err.is_bounds_error());
        assert_eq!(array.len(), 3);
        Ok(())
    }

    #[test]
    fn test_equality_uses_logical_content() -> Result<()> {
        let mut a = BoundedArray::<u8, 4>::from_fill(1);
        let mut b = BoundedArray::<u8, 8>::from_fill(2);
        assert_eq!(a, b);

        a.assign(&[1, 2, 3])?;
        b.assign(&[1, 2, 3])?;
        assert_eq!(a, b);

        b.assign(&[1, 2])?;
        assert_ne!(a, b);

        b.assign(&[1, 2, 4])?;
        assert_ne!(a, b);
        assert_eq!(a, [1u8, 2, 3][..]);
        Ok(())
    }

    #[test]
    fn test_float_elements_compare_by_value() -> Result<()> {
        let negative_zero = f32::from_bits(0x8000_0000);
        let mut a = BoundedArray::<f32, 2>::new();
        let mut b = BoundedArray::<f32, 2>::new();

        a.assign(&[0.0])?;
        b.assign(&[negative_zero])?;
        assert_eq!(a, b);

        a.assign(&[f32::NAN])?;
        b.assign(&[f32::NAN])?;
        assert_eq!(a.as_slice()[0].to_bits(), b.as_slice()[0].to_bits());
        assert_ne!(a, b);
        Ok(())
    }

    #[test]
    fn test_assign_from_other_capacity() -> Result<()> {
        let mut small = BoundedArray::<u8, 2>::new();
        let mut large = BoundedArray::<u8, 6>::new();
        large.assign(&[1, 2, 3])?;

        assert!(small.assign_from(&large).is_err());
        assert!(small.is_empty());

        large.assign(&[4, 5])?;
        small.assign_from(&large)?;
        assert_eq!(small, large);
        Ok(())
    }

    #[test]
    fn test_copy_is_independent() -> Result<()> {
        let mut original = BoundedArray::<u8, 3>::new();
        original.assign(&[1, 2])?;

        let mut copy = original;
        copy[0] = 9;
        assert_eq!(original.as_slice(), &[1, 2]);
        assert_eq!(copy.as_slice(), &[9, 2]);
        Ok(())
    }

    #[test]
    fn test_iter() -> Result<()> {
        let mut array = BoundedArray::<u32, 10>::new();
        array.assign(&[1, 2, 3])?;

        let mut iter = array.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);

        for value in &mut array {
            *value *= 10;
        }
        assert_eq!(array.iter().sum::<u32>(), 60);
        Ok(())
    }

    #[test]
    fn test_try_from_slice() {
        let array = BoundedArray::<u8, 3>::try_from(&[1u8, 2][..]);
        assert!(array.is_ok());
        assert!(BoundedArray::<u8, 1>::try_from(&[1u8, 2][..]).is_err());
    }

    #[test]
    fn test_debug_shows_logical_content() -> Result<()> {
        let mut array = BoundedArray::<u8, 4>::from_fill(9);
        array.assign(&[1, 2])?;
        assert_eq!(format!("{array:?}"), "[1, 2]");
        Ok(())
    }

    #[test]
    fn test_zero_capacity() {
        let mut array = BoundedArray::<u8, 0>::new();
        assert!(array.assign(&[]).is_ok());
        assert!(array.is_full());
        assert!(array.assign(&[1]).is_err());
    }
}
