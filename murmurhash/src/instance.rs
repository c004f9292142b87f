// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! MurmurHash1 digest instances.

use crate::{
    MurmurHashError,
    accumulator::Accumulator,
    engine::{self, BLOCK_LEN, DIGEST_LEN},
};

/// A MurmurHash1 digest instance.
///
/// Input fed through [`update()`](Self::update) gets buffered in full, the
/// actual hashing happens only when a digest is requested. Requesting a
/// digest does not consume the buffered input: more data may get appended
/// afterwards and the instance must be [`reset()`](Self::reset) explicitly
/// for starting over.
#[derive(Clone)]
pub struct MurmurHash {
    acc: Accumulator,
}

impl MurmurHash {
    /// Create a new digest instance.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation has failed.
    pub fn new() -> Result<Self, MurmurHashError> {
        Ok(Self {
            acc: Accumulator::new()?,
        })
    }

    /// Compute the MurmurHash1 value of some data in one go.
    ///
    /// Equivalent to creating an instance, [updating](Self::update) it with
    /// `data` once and obtaining the [integer value](Self::to_integer)
    /// from it.
    ///
    /// # Arguments:
    ///
    /// * `data` - The data to hash. Passing `None` is an error, whereas
    ///   `Some` empty slice is not.
    ///
    /// # Errors:
    ///
    /// * [`MissingArgument`](MurmurHashError::MissingArgument) - No `data`
    ///   given.
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation has failed.
    pub fn raw_digest(data: Option<&[u8]>) -> Result<u32, MurmurHashError> {
        let data = data.ok_or(MurmurHashError::MissingArgument)?;
        let mut instance = Self::new()?;
        instance.update(data)?;
        Ok(instance.to_integer())
    }

    /// Append to the digested data.
    ///
    /// # Arguments:
    ///
    /// * `data` - The data to digest.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation has failed. The instance must not get used
    ///   any further.
    pub fn update(&mut self, data: &[u8]) -> Result<(), MurmurHashError> {
        self.acc.append(data)
    }

    /// Append to the digested data, chaining style.
    ///
    /// # Arguments:
    ///
    /// * `data` - The data to digest.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation has failed.
    pub fn chain(mut self, data: &[u8]) -> Result<Self, MurmurHashError> {
        self.update(data)?;
        Ok(self)
    }

    /// Reset the instance to the state it had right after
    /// [`Self::new()`](Self::new()).
    pub fn reset(&mut self) {
        self.acc.reset();
    }

    /// Produce the digest of all data digested so far.
    ///
    /// The instance is left unmodified.
    pub fn finalize(&self) -> [u8; DIGEST_LEN] {
        engine::digest_bytes(self.acc.contents())
    }

    /// Produce the digest of all data digested so far into a provided buffer.
    ///
    /// # Arguments:
    ///
    /// * `digest` - Destination to write the produced digest to. Must be
    ///   [`DIGEST_LEN`] bytes long.
    pub fn finalize_into(&self, digest: &mut [u8]) {
        debug_assert_eq!(digest.len(), DIGEST_LEN);
        digest[..DIGEST_LEN].copy_from_slice(&self.finalize());
    }

    /// Produce the MurmurHash1 value of all data digested so far.
    ///
    /// This is the native integer before serialization into the
    /// big-endian [digest](Self::finalize).
    pub fn to_integer(&self) -> u32 {
        engine::mix(self.acc.contents())
    }

    /// Determine the digest length.
    pub fn digest_len(&self) -> usize {
        DIGEST_LEN
    }

    /// Determine the block length.
    pub fn block_len(&self) -> usize {
        BLOCK_LEN
    }

    /// Length of all data digested so far.
    pub fn len(&self) -> usize {
        self.acc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acc.is_empty()
    }

    /// Duplicate the instance.
    ///
    /// The returned instance owns a copy of the data digested so far and is
    /// independent from `self` afterwards.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation has failed.
    pub fn try_clone(&self) -> Result<Self, MurmurHashError> {
        Ok(Self {
            acc: self.acc.try_clone()?,
        })
    }

    /// Turn the instance into a duplicate of another one.
    ///
    /// The instance's own storage gets reused if large enough.
    ///
    /// # Arguments:
    ///
    /// * `source` - The instance to duplicate.
    ///
    /// # Errors:
    ///
    /// * [`MemoryAllocationFailure`](MurmurHashError::MemoryAllocationFailure)
    ///   - The memory allocation has failed. The instance must not get used
    ///   any further.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), MurmurHashError> {
        self.acc.try_clone_from(&source.acc)
    }
}

#[cfg(test)]
use crate::engine::TEST_VECS;

#[test]
fn test_finalize_vectors() {
    for v in TEST_VECS.iter() {
        let mut instance = MurmurHash::new().unwrap();
        instance.update(v.data).unwrap();
        assert_eq!(instance.finalize(), v.digest);
        assert_eq!(instance.to_integer(), v.h);
    }
}

#[test]
fn test_finalize_idempotent() {
    let mut instance = MurmurHash::new().unwrap();
    instance.update(b"murmurhash").unwrap();
    let digest = instance.finalize();
    assert_eq!(instance.finalize(), digest);
    assert_eq!(instance.len(), 10);

    let mut buf = [0u8; DIGEST_LEN];
    instance.finalize_into(&mut buf);
    assert_eq!(buf, digest);

    // Appending after finalization continues from the buffered data.
    instance.update(b"!").unwrap();
    assert_eq!(instance.finalize(), engine::digest_bytes(b"murmurhash!"));
}

#[test]
fn test_incremental_equivalence() {
    let data: &[u8] = b"The quick brown fox jumps over the lazy dog";
    let expected = engine::digest_bytes(data);
    for split_len in 1..=data.len() {
        let mut instance = MurmurHash::new().unwrap();
        for chunk in data.chunks(split_len) {
            instance.update(chunk).unwrap();
            instance.update(&[]).unwrap();
        }
        assert_eq!(instance.finalize(), expected);
    }

    let instance = MurmurHash::new()
        .unwrap()
        .chain(b"The quick ")
        .unwrap()
        .chain(b"brown fox jumps over the lazy dog")
        .unwrap();
    assert_eq!(instance.finalize(), expected);
}

#[test]
fn test_reset() {
    let mut instance = MurmurHash::new().unwrap();
    instance.update(b"some residue").unwrap();
    instance.reset();
    assert!(instance.is_empty());
    assert_eq!(instance.to_integer(), 0);
    instance.update(b"test").unwrap();
    assert_eq!(instance.to_integer(), 0xd40f98bf);
}

#[test]
fn test_duplicate_independence() {
    let mut a = MurmurHash::new().unwrap();
    a.update(b"murmur").unwrap();
    let mut b = a.try_clone().unwrap();
    b.update(b"hash").unwrap();
    assert_eq!(a.to_integer(), engine::mix(b"murmur"));
    assert_eq!(b.to_integer(), 0xc709abd5);

    let mut c = MurmurHash::new().unwrap();
    c.update(&[0u8; 1000]).unwrap();
    c.try_clone_from(&a).unwrap();
    assert_eq!(c.to_integer(), a.to_integer());
    c.update(b"hash").unwrap();
    assert_eq!(a.to_integer(), engine::mix(b"murmur"));
    assert_eq!(c.to_integer(), 0xc709abd5);

    let d = b.clone();
    b.reset();
    assert_eq!(d.to_integer(), 0xc709abd5);
}

#[test]
fn test_growth_never_loses_data() {
    extern crate alloc;

    let mut instance = MurmurHash::new().unwrap();
    let mut whole = alloc::vec::Vec::new();
    for i in 0..1500usize {
        let b = (i * 7 + 3) as u8;
        instance.update(&[b]).unwrap();
        whole.push(b);
    }
    assert_eq!(instance.to_integer(), engine::mix(&whole));
    assert_eq!(instance.to_integer(), 0xf01ab2b0);
}

#[test]
fn test_raw_digest() {
    assert_eq!(MurmurHash::raw_digest(None), Err(MurmurHashError::MissingArgument));
    assert_eq!(MurmurHash::raw_digest(Some(b"".as_slice())), Ok(engine::mix(b"")));
    assert_eq!(MurmurHash::raw_digest(Some(b"test".as_slice())), Ok(0xd40f98bf));
}

#[test]
fn test_lengths() {
    let mut instance = MurmurHash::new().unwrap();
    assert_eq!(instance.digest_len(), 4);
    assert_eq!(instance.block_len(), 4);
    instance.update(&[0u8; 17]).unwrap();
    assert_eq!(instance.digest_len(), 4);
    assert_eq!(instance.block_len(), 4);
}
