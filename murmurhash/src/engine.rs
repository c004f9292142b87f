// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! Implementation of the MurmurHash1 mixing function.
//!
//! MurmurHash has been designed by Austin Appleby, who put it in the
//! Public Domain.
//!
//! Unlike its successors, MurmurHash1 seeds its state with the total input
//! length, so the input must be available in full before mixing can start.
//! Incremental input is collected by an
//! [`Accumulator`](crate::accumulator::Accumulator) first.

/// Length of a serialized digest in units of bytes.
pub const DIGEST_LEN: usize = 4;

/// Length of the words the input gets consumed in, in units of bytes.
pub const BLOCK_LEN: usize = 4;

const M: u32 = 0x5bd1e995;
const R: u32 = 16;

/// Determine the digest length.
pub const fn digest_len() -> usize {
    DIGEST_LEN
}

/// Determine the block length.
pub const fn block_len() -> usize {
    BLOCK_LEN
}

/// Compute the MurmurHash1 value of some data.
///
/// # Arguments:
///
/// * `data` - The data to hash, in full.
pub fn mix(data: &[u8]) -> u32 {
    // The length is taken modulo 2^32.
    let mut h = (data.len() as u32).wrapping_mul(M);

    let words = data.chunks_exact(BLOCK_LEN);
    let tail = words.remainder();
    for k in words {
        let k = u32::from_le_bytes([k[0], k[1], k[2], k[3]]);
        h = mix_word(h, k);
    }

    if !tail.is_empty() {
        // Tail bytes are unsigned, they must not get sign extended.
        if tail.len() >= 3 {
            h = h.wrapping_add((tail[2] as u32) << 16);
        }
        if tail.len() >= 2 {
            h = h.wrapping_add((tail[1] as u32) << 8);
        }
        h = h.wrapping_add(tail[0] as u32);
        h = h.wrapping_mul(M);
        h ^= h >> R;
    }

    h = h.wrapping_mul(M);
    h ^= h >> 10;
    h = h.wrapping_mul(M);
    h ^= h >> 17;
    h
}

fn mix_word(mut h: u32, k: u32) -> u32 {
    h = h.wrapping_add(k).wrapping_mul(M);
    h ^= h >> R;
    h
}

/// Serialize a hash value into its big-endian digest representation.
///
/// # Arguments:
///
/// * `h` - The hash value as returned by [`mix()`].
pub const fn serialize(h: u32) -> [u8; DIGEST_LEN] {
    h.to_be_bytes()
}

/// Compute the serialized MurmurHash1 digest of some data.
///
/// # Arguments:
///
/// * `data` - The data to hash, in full.
pub fn digest_bytes(data: &[u8]) -> [u8; DIGEST_LEN] {
    serialize(mix(data))
}

#[cfg(test)]
pub(crate) struct MurmurHashTestVec<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) h: u32,
    pub(crate) digest: [u8; DIGEST_LEN],
}

// Cross-checked against an independent implementation.
#[cfg(test)]
pub(crate) const TEST_VECS: [MurmurHashTestVec<'static>; 8] = [
    MurmurHashTestVec {
        data: b"",
        h: 0x00000000,
        digest: [0x00, 0x00, 0x00, 0x00],
    },
    MurmurHashTestVec {
        data: b"a",
        h: 0x8bca2515,
        digest: [0x8b, 0xca, 0x25, 0x15],
    },
    MurmurHashTestVec {
        data: b"ab",
        h: 0x8f5090d8,
        digest: [0x8f, 0x50, 0x90, 0xd8],
    },
    MurmurHashTestVec {
        data: b"abc",
        h: 0x55575fdc,
        digest: [0x55, 0x57, 0x5f, 0xdc],
    },
    MurmurHashTestVec {
        data: b"test",
        h: 0xd40f98bf,
        digest: [0xd4, 0x0f, 0x98, 0xbf],
    },
    MurmurHashTestVec {
        data: b"murmurhash",
        h: 0xc709abd5,
        digest: [0xc7, 0x09, 0xab, 0xd5],
    },
    MurmurHashTestVec {
        data: b"The quick brown fox jumps over the lazy dog",
        h: 0x63be264a,
        digest: [0x63, 0xbe, 0x26, 0x4a],
    },
    MurmurHashTestVec {
        data: &[0xff, 0xfe, 0xfd],
        h: 0xc8782926,
        digest: [0xc8, 0x78, 0x29, 0x26],
    },
];

#[test]
fn test_mix_vectors() {
    for v in TEST_VECS.iter() {
        assert_eq!(mix(v.data), v.h);
        assert_eq!(digest_bytes(v.data), v.digest);
    }
}

#[test]
fn test_mix_empty() {
    // The avalanche maps zero onto itself.
    assert_eq!(mix(&[]), 0);
    assert_eq!(digest_bytes(&[]), [0u8; DIGEST_LEN]);
}

#[test]
fn test_mix_deterministic() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let h = mix(data);
    for _ in 0..8 {
        assert_eq!(mix(data), h);
    }
}

#[test]
fn test_mix_long() {
    // 1027 bytes: multiple blocks plus a three byte tail.
    let mut data = [0u8; 1027];
    for (i, b) in data.iter_mut().enumerate() {
        *b = i as u8;
    }
    data[1024..].copy_from_slice(b"xyz");
    assert_eq!(mix(&data), 0xca8b4f32);
}

#[test]
fn test_serialize_big_endian() {
    assert_eq!(serialize(0x01020304), [0x01, 0x02, 0x03, 0x04]);
    assert_eq!(serialize(0xd40f98bf), [0xd4, 0x0f, 0x98, 0xbf]);
}

#[test]
fn test_lengths() {
    assert_eq!(digest_len(), 4);
    assert_eq!(block_len(), 4);
}
