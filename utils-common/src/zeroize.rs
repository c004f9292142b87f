// SPDX-License-Identifier: Apache-2.0
// Copyright 2023-2025 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! Configuration dependent, transparent alias for the
//! [`Zeroize`](https://docs.rs/zeroize/latest/zeroize/trait.Zeroize.html) trait.
//!
//! Depending on whether or not the `zeroize` Cargo feature is enabled,
//! [`Zeroize`] is either an alias to the actual definition from the
//! [`zeroize crate`](https://docs.rs/zeroize/latest/zeroize/index.html) or to
//! a trivial drop-in substitute.

#[cfg(feature = "zeroize")]
#[doc(hidden)]
mod cfg {
    pub use zeroize::Zeroize;
}

#[cfg(not(feature = "zeroize"))]
#[doc(hidden)]
mod cfg {
    pub trait Zeroize {
        fn zeroize(&mut self);
    }

    impl<T: ?Sized> Zeroize for T {
        fn zeroize(&mut self) {}
    }
}

/// Configuration abstraction alias definition for
/// [`zeroize::Zeroize`](https://docs.rs/zeroize/latest/zeroize/trait.Zeroize.html).
///
/// Depending on whether or the Cargo feature `zeroize` is enabled, this is
/// either an alias to the real [`zeroize::Zeroize`](https://docs.rs/zeroize/latest/zeroize/trait.Zeroize.html) or to some
/// API compatible drop-in substitute implemented trivially for any type.
///
/// Note that for a `Vec`, the real implementation also truncates it to zero
/// length after wiping, whereas the substitute leaves it alone. Callers
/// wanting an empty `Vec` in either configuration must clear it explicitly.
pub use cfg::Zeroize;

#[cfg(feature = "zeroize")]
#[test]
fn test_zeroize_vec() {
    extern crate alloc;

    let mut v = alloc::vec![1u8, 2, 3];
    v.zeroize();
    assert!(v.is_empty());
}
