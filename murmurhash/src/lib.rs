// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! MurmurHash1 (32-bit) digest with incremental input.
//!
//! MurmurHash1 is not a cryptographic hash and must not be used where
//! collision resistance matters.

#![no_std]

use digest_murmurhash_utils_common as utils_common;

pub mod accumulator;
pub mod engine;
mod error;
mod instance;
#[cfg(feature = "digest")]
mod rustcrypto;

pub use engine::{BLOCK_LEN, DIGEST_LEN, block_len, digest_len};
pub use error::*;
pub use instance::*;
