// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! RustCrypto [`digest`] trait implementations for [`MurmurHash`].
//!
//! This makes [`MurmurHash`] usable through the generic
//! [`Digest`](digest::Digest) interface, which provides all the
//! convenience on top: one-shot hashing, chained updates, hex formatting of
//! the output and so on.
//!
//! The trait methods are infallible, a memory allocation failure encountered
//! from within any of them is fatal and handled through
//! [`handle_alloc_error()`](alloc::alloc::handle_alloc_error).

extern crate alloc;
use alloc::alloc::{Layout, handle_alloc_error};

use crate::{MurmurHash, engine::DIGEST_LEN};

fn abort_on_alloc_failure(required_len: usize) -> ! {
    let layout = Layout::array::<u8>(required_len).unwrap_or(Layout::new::<u8>());
    handle_alloc_error(layout)
}

impl Default for MurmurHash {
    fn default() -> Self {
        match MurmurHash::new() {
            Ok(instance) => instance,
            Err(_) => abort_on_alloc_failure(crate::accumulator::INITIAL_CAPACITY),
        }
    }
}

impl digest::HashMarker for MurmurHash {}

impl digest::OutputSizeUser for MurmurHash {
    type OutputSize = digest::consts::U4;
}

impl digest::Update for MurmurHash {
    fn update(&mut self, data: &[u8]) {
        if MurmurHash::update(self, data).is_err() {
            abort_on_alloc_failure(self.len().saturating_add(data.len()));
        }
    }
}

impl digest::FixedOutput for MurmurHash {
    fn finalize_into(self, out: &mut digest::Output<Self>) {
        MurmurHash::finalize_into(&self, out.as_mut_slice());
    }
}

impl digest::Reset for MurmurHash {
    fn reset(&mut self) {
        MurmurHash::reset(self);
    }
}

impl digest::FixedOutputReset for MurmurHash {
    fn finalize_into_reset(&mut self, out: &mut digest::Output<Self>) {
        MurmurHash::finalize_into(self, out.as_mut_slice());
        MurmurHash::reset(self);
    }
}

const _: () =
    assert!(<<MurmurHash as digest::OutputSizeUser>::OutputSize as digest::typenum::Unsigned>::USIZE == DIGEST_LEN);

#[test]
fn test_digest_one_shot() {
    use crate::engine::TEST_VECS;
    use digest::Digest as _;

    for v in TEST_VECS.iter() {
        let out = MurmurHash::digest(v.data);
        assert_eq!(out.as_slice(), v.digest);
    }
}

#[test]
fn test_digest_incremental() {
    use digest::Digest as _;

    let mut h = <MurmurHash as digest::Digest>::new();
    digest::Digest::update(&mut h, b"murmur");
    digest::Digest::update(&mut h, b"hash");
    assert_eq!(digest::Digest::finalize_reset(&mut h).as_slice(), [0xc7, 0x09, 0xab, 0xd5]);
    assert!(h.is_empty());

    let out = digest::Digest::finalize(MurmurHash::new_with_prefix(b"te").chain_update(b"st"));
    assert_eq!(out.as_slice(), [0xd4, 0x0f, 0x98, 0xbf]);
    assert_eq!(<MurmurHash as digest::Digest>::output_size(), DIGEST_LEN);
}

#[test]
fn test_digest_hex() {
    use digest::Digest as _;

    let out = MurmurHash::digest(b"murmurhash");
    assert_eq!(alloc::format!("{:x}", out), "c709abd5");
}
