// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! MurmurHash digest related error type definitions.

use crate::utils_common;
use core::{convert, error, fmt};

const MURMURHASH_ERROR_CODE_MEMORY_ALLOCATION_FAILURE: isize = 1;
const MURMURHASH_ERROR_CODE_MISSING_ARGUMENT: isize = 2;

/// Error returned by the MurmurHash digest primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MurmurHashError {
    /// Memory allocation failure.
    ///
    /// Returned when the input buffer could not get grown or duplicated. The
    /// affected instance should not get used any further.
    MemoryAllocationFailure = MURMURHASH_ERROR_CODE_MEMORY_ALLOCATION_FAILURE,
    /// A one-shot digest has been requested without any input data.
    ///
    /// Note that an empty input is not a missing one.
    MissingArgument = MURMURHASH_ERROR_CODE_MISSING_ARGUMENT,
}

impl MurmurHashError {
    /// Numeric error code, stable across releases.
    pub const fn code(self) -> isize {
        self as isize
    }
}

impl fmt::Display for MurmurHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoryAllocationFailure => f.write_str("memory allocation failure"),
            Self::MissingArgument => f.write_str("no data given"),
        }
    }
}

impl error::Error for MurmurHashError {}

impl convert::From<convert::Infallible> for MurmurHashError {
    fn from(value: convert::Infallible) -> Self {
        match value {}
    }
}

impl convert::From<utils_common::alloc::TryNewError> for MurmurHashError {
    fn from(value: utils_common::alloc::TryNewError) -> Self {
        match value {
            utils_common::alloc::TryNewError::MemoryAllocationFailure => MurmurHashError::MemoryAllocationFailure,
        }
    }
}

#[test]
fn test_error_codes() {
    assert_eq!(MurmurHashError::MemoryAllocationFailure.code(), 1);
    assert_eq!(MurmurHashError::MissingArgument.code(), 2);
    assert_eq!(
        MurmurHashError::from(utils_common::alloc::TryNewError::MemoryAllocationFailure),
        MurmurHashError::MemoryAllocationFailure
    );
}
