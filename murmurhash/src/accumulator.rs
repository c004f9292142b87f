// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! Buffer collecting the input to be hashed.

extern crate alloc;
use alloc::vec::Vec;

use crate::MurmurHashError;
use crate::utils_common::{
    alloc::{try_alloc_vec_with_capacity, try_clone_into_vec, try_grow_vec_pow2},
    zeroize::Zeroize as _,
};

/// Capacity a freshly created [`Accumulator`] starts out with.
pub const INITIAL_CAPACITY: usize = 64;

/// Growable byte buffer accumulating input data in arrival order.
///
/// Capacity is grown by doubling, so that the amortized cost of
/// [`append()`](Self::append) is linear in the total input length even when
/// fed in small increments.
pub struct Accumulator {
    data: Vec<u8>,
}

impl Accumulator {
    /// Create a new, empty accumulator.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation for the initial capacity has failed.
    pub fn new() -> Result<Self, MurmurHashError> {
        Ok(Self {
            data: try_alloc_vec_with_capacity(INITIAL_CAPACITY)?,
        })
    }

    /// Append to the accumulated data.
    ///
    /// # Arguments:
    ///
    /// * `data` - The data to append. May be empty.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - Growing the buffer has failed.
    pub fn append(&mut self, data: &[u8]) -> Result<(), MurmurHashError> {
        let required_len = self
            .data
            .len()
            .checked_add(data.len())
            .ok_or(MurmurHashError::MemoryAllocationFailure)?;
        try_grow_vec_pow2(&mut self.data, required_len, INITIAL_CAPACITY)?;
        self.data.extend_from_slice(data);
        Ok(())
    }

    /// Discard all of the accumulated data.
    ///
    /// The capacity is retained for reuse.
    pub fn reset(&mut self) {
        self.data.zeroize();
        self.data.clear();
    }

    /// Length of the accumulated data in units of bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The accumulated data.
    pub fn contents(&self) -> &[u8] {
        &self.data
    }

    /// Create an independent copy of the accumulator.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation has failed.
    pub fn try_clone(&self) -> Result<Self, MurmurHashError> {
        let mut data = try_alloc_vec_with_capacity(self.data.capacity().max(INITIAL_CAPACITY))?;
        data.extend_from_slice(&self.data);
        Ok(Self { data })
    }

    /// Replace the accumulated data with a copy of another accumulator's.
    ///
    /// The existing storage gets reused if large enough.
    ///
    /// # Arguments:
    ///
    /// * `source` - The accumulator to copy from.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - Growing the buffer has failed.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), MurmurHashError> {
        log::debug!(
            "duplicating {} bytes into accumulator of capacity {}",
            source.len(),
            self.data.capacity()
        );
        self.data.zeroize();
        try_clone_into_vec(&mut self.data, &source.data)?;
        Ok(())
    }
}

impl Clone for Accumulator {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl Drop for Accumulator {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

#[test]
fn test_append() {
    let mut acc = Accumulator::new().unwrap();
    assert!(acc.is_empty());
    acc.append(b"foo").unwrap();
    acc.append(b"").unwrap();
    acc.append(b"bar").unwrap();
    assert_eq!(acc.len(), 6);
    assert_eq!(acc.contents(), b"foobar");
}

#[test]
fn test_append_growth() {
    let mut acc = Accumulator::new().unwrap();
    let mut expected = Vec::new();
    for i in 0..1500usize {
        let b = (i * 7 + 3) as u8;
        acc.append(&[b]).unwrap();
        expected.push(b);
    }
    assert_eq!(acc.contents(), expected.as_slice());

    // A single chunk exceeding several doublings at once.
    let chunk = [0x5au8; 5000];
    acc.append(&chunk).unwrap();
    expected.extend_from_slice(&chunk);
    assert_eq!(acc.contents(), expected.as_slice());
}

#[test]
fn test_append_overflow() {
    let mut acc = Accumulator::new().unwrap();
    acc.append(b"x").unwrap();
    // A slice of length usize::MAX can't be made up, provoke the length
    // overflow through the allocator helper instead.
    assert_eq!(
        try_grow_vec_pow2(&mut acc.data, usize::MAX, INITIAL_CAPACITY).map_err(MurmurHashError::from),
        Err(MurmurHashError::MemoryAllocationFailure)
    );
    assert_eq!(acc.contents(), b"x");
}

#[test]
fn test_reset() {
    let mut acc = Accumulator::new().unwrap();
    acc.append(&[1u8; 100]).unwrap();
    acc.reset();
    assert_eq!(acc.len(), 0);
    assert!(acc.contents().is_empty());
    acc.append(b"abc").unwrap();
    assert_eq!(acc.contents(), b"abc");
}

#[test]
fn test_try_clone() {
    let mut a = Accumulator::new().unwrap();
    a.append(b"hello").unwrap();
    let mut b = a.try_clone().unwrap();
    b.append(b" world").unwrap();
    assert_eq!(a.contents(), b"hello");
    assert_eq!(b.contents(), b"hello world");
    a.reset();
    assert_eq!(b.contents(), b"hello world");
}

#[test]
fn test_try_clone_from() {
    let mut src = Accumulator::new().unwrap();
    src.append(&[3u8; 300]).unwrap();

    // Destination too small, must grow.
    let mut dst = Accumulator::new().unwrap();
    dst.append(b"stale").unwrap();
    dst.try_clone_from(&src).unwrap();
    assert_eq!(dst.contents(), src.contents());

    // Destination large enough, storage gets reused.
    let mut small = Accumulator::new().unwrap();
    small.append(b"xy").unwrap();
    dst.try_clone_from(&small).unwrap();
    assert_eq!(dst.contents(), b"xy");

    dst.append(b"z").unwrap();
    assert_eq!(small.contents(), b"xy");
    assert_eq!(src.len(), 300);
}
