// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! Helpers related to `alloc`.
//!
//! All primitives in here report memory allocation failure through
//! [`TryNewError`] instead of aborting, leaving it to the caller to decide
//! whether the condition is fatal.

extern crate alloc;
use alloc::vec::Vec;

/// Memory allocation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TryNewError {
    /// Memory allocation failure.
    MemoryAllocationFailure,
}

/// Allocate an empty `Vec` with a given minimum capacity, handling memory
/// allocation failure gracefully.
///
/// # Arguments:
///
/// * `capacity` - The minimum capacity to reserve.
///
/// # Errors:
///
/// * [`TryNewError::MemoryAllocationFailure`] - The memory allocation has
///   failed.
pub fn try_alloc_vec_with_capacity<T>(capacity: usize) -> Result<Vec<T>, TryNewError> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity).map_err(|_| {
        log::warn!("failed to allocate vector of capacity {capacity}");
        TryNewError::MemoryAllocationFailure
    })?;
    Ok(v)
}

/// Compute the capacity a buffer grows to under the doubling policy.
///
/// Starting out from `current_capacity`, or from `initial_capacity` if the
/// former is zero, repeatedly double until the result is `>= required_len`.
/// Returns `None` if the doubling would overflow `usize` before reaching
/// `required_len`.
///
/// # Arguments:
///
/// * `current_capacity` - The buffer's current capacity.
/// * `required_len` - The minimum length the buffer must be able to hold.
/// * `initial_capacity` - The capacity to start doubling from for a buffer
///   without any capacity yet.
pub fn pow2_grown_capacity(current_capacity: usize, required_len: usize, initial_capacity: usize) -> Option<usize> {
    let mut capacity = if current_capacity != 0 {
        current_capacity
    } else {
        initial_capacity.max(1)
    };
    while capacity < required_len {
        capacity = capacity.checked_mul(2)?;
    }
    Some(capacity)
}

/// Make sure a `Vec` can hold at least `required_len` elements, growing its
/// capacity by repeated doubling if needed.
///
/// The `Vec`'s contents are always retained, only its capacity gets changed.
/// If the capacity already suffices, this is a no-op.
///
/// # Arguments:
///
/// * `v` - The `Vec` to grow.
/// * `required_len` - The minimum number of elements `v` must be able to hold
///   without reallocation afterwards.
/// * `initial_capacity` - The capacity to start doubling from in case `v`
///   hasn't got any capacity yet.
///
/// # Errors:
///
/// * [`TryNewError::MemoryAllocationFailure`] - The memory allocation has
///   failed or the grown capacity would not be representable. `v` is left
///   unmodified.
pub fn try_grow_vec_pow2<T>(v: &mut Vec<T>, required_len: usize, initial_capacity: usize) -> Result<(), TryNewError> {
    let old_capacity = v.capacity();
    if old_capacity >= required_len {
        return Ok(());
    }

    let new_capacity = pow2_grown_capacity(old_capacity, required_len, initial_capacity).unwrap_or(required_len);
    log::trace!("growing vector capacity from {old_capacity} to {new_capacity} for length {required_len}");
    v.try_reserve_exact(new_capacity - v.len()).map_err(|_| {
        log::warn!("failed to grow vector capacity from {old_capacity} to {new_capacity}");
        TryNewError::MemoryAllocationFailure
    })
}

/// Copy the contents of a slice into a `Vec`, replacing the latter's former
/// contents.
///
/// The `Vec`'s existing storage gets reused if its capacity suffices,
/// otherwise it's grown to at least `src.len()` first. Either way, `dst` ends
/// up owning memory independent of `src`.
///
/// # Arguments:
///
/// * `dst` - The destination `Vec`.
/// * `src` - The source to copy from.
///
/// # Errors:
///
/// * [`TryNewError::MemoryAllocationFailure`] - The memory allocation has
///   failed. `dst` is left unmodified.
pub fn try_clone_into_vec<T: Copy>(dst: &mut Vec<T>, src: &[T]) -> Result<(), TryNewError> {
    if dst.capacity() < src.len() {
        // dst.len() <= dst.capacity() < src.len()
        dst.try_reserve_exact(src.len() - dst.len()).map_err(|_| {
            log::warn!("failed to allocate vector of capacity {}", src.len());
            TryNewError::MemoryAllocationFailure
        })?;
    }
    dst.clear();
    dst.extend_from_slice(src);
    Ok(())
}

#[test]
fn test_pow2_grown_capacity() {
    assert_eq!(pow2_grown_capacity(64, 0, 64), Some(64));
    assert_eq!(pow2_grown_capacity(64, 64, 64), Some(64));
    assert_eq!(pow2_grown_capacity(64, 65, 64), Some(128));
    assert_eq!(pow2_grown_capacity(64, 1000, 64), Some(1024));
    assert_eq!(pow2_grown_capacity(0, 3, 64), Some(64));
    assert_eq!(pow2_grown_capacity(0, 3, 0), Some(4));
    assert_eq!(pow2_grown_capacity(3, 7, 64), Some(12));
    assert_eq!(pow2_grown_capacity(usize::MAX / 2 + 1, usize::MAX, 64), None);
}

#[test]
fn test_try_grow_vec_pow2() {
    let mut v: Vec<u8> = try_alloc_vec_with_capacity(64).unwrap();
    assert!(v.capacity() >= 64);
    v.extend_from_slice(&[1, 2, 3]);

    try_grow_vec_pow2(&mut v, 3, 64).unwrap();
    assert_eq!(v, [1, 2, 3]);

    try_grow_vec_pow2(&mut v, 200, 64).unwrap();
    assert!(v.capacity() >= 256);
    assert_eq!(v, [1, 2, 3]);

    let mut v: Vec<u8> = Vec::new();
    try_grow_vec_pow2(&mut v, 1, 64).unwrap();
    assert!(v.capacity() >= 64);
    assert!(v.is_empty());
}

#[test]
fn test_try_grow_vec_pow2_overflow() {
    let mut v: Vec<u8> = alloc::vec![1, 2];
    assert_eq!(
        try_grow_vec_pow2(&mut v, usize::MAX, 64),
        Err(TryNewError::MemoryAllocationFailure)
    );
    assert_eq!(v, [1, 2]);
}

#[test]
fn test_try_clone_into_vec() {
    let mut dst: Vec<u8> = try_alloc_vec_with_capacity(4).unwrap();
    dst.extend_from_slice(&[9, 9]);
    try_clone_into_vec(&mut dst, &[1, 2, 3]).unwrap();
    assert_eq!(dst, [1, 2, 3]);

    let src = [7u8; 100];
    try_clone_into_vec(&mut dst, &src).unwrap();
    assert_eq!(dst, src);

    try_clone_into_vec(&mut dst, &[]).unwrap();
    assert!(dst.is_empty());
}
