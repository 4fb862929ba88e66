// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random sources
//!
//! Everything random in this crate is driven by a [`RngCore`]. The
//! [`RandomSource`] extension trait, implemented for every `RngCore`, adds the
//! single capability the sequence algorithms need: a uniformly distributed
//! index in a half-open range.
//!
//! Where an operation is called without an explicit generator, a fresh
//! [`DefaultRng`] seeded from the operating system is constructed for that one
//! call. There is no shared or thread-local generator.

use rand_core::RngCore;
#[cfg(feature = "std")]
use rand_core::{OsRng, SeedableRng};

#[cfg(feature = "std")]
use crate::{Error, ErrorKind};

/// The generator used when the caller does not supply one
///
/// This is the ChaCha block cipher with 12 rounds, the Rand project's standard
/// generator. It is seeded per call from [`OsRng`], so output is not
/// reproducible; pass your own seeded generator for reproducible results.
pub type DefaultRng = rand_chacha::ChaCha12Rng;

/// Construct a [`DefaultRng`] seeded from the operating system.
///
/// # Panics
///
/// If the OS entropy source fails. Use [`try_default_source`] to handle
/// that case.
#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
pub fn default_source() -> DefaultRng {
    match try_default_source() {
        Ok(rng) => rng,
        Err(err) => panic!("could not initialize the default random source: {}", err),
    }
}

/// Construct a [`DefaultRng`] seeded from the operating system.
///
/// Fails with [`ErrorKind::Unavailable`] (chaining the underlying error) if
/// the OS entropy source cannot be read.
#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
pub fn try_default_source() -> Result<DefaultRng, Error> {
    match DefaultRng::from_rng(OsRng) {
        Ok(rng) => {
            debug!("seeded default random source from OsRng");
            Ok(rng)
        }
        Err(err) => {
            warn!("OsRng failed to seed the default random source: {}", err);
            Err(Error::with_cause(
                ErrorKind::Unavailable,
                "failed to seed the default random source",
                err,
            ))
        }
    }
}

/// Extension trait on [`RngCore`] providing uniform index sampling.
///
/// This trait is automatically implemented for every type implementing
/// `RngCore`, including `&mut R` and `dyn RngCore`.
///
/// # Example
///
/// ```
/// use rand_seq::rng::RandomSource;
/// use rand_pcg::Pcg32;
/// use rand_core::SeedableRng;
///
/// let mut rng = Pcg32::seed_from_u64(7);
/// let i = rng.uniform_index(3, 10);
/// assert!((3..10).contains(&i));
/// ```
pub trait RandomSource: RngCore {
    /// Sample an index uniformly from `[low, high)`.
    ///
    /// A range holding a single value returns `low` without consuming any
    /// randomness. Ranges whose width fits in a `u32` are sampled from 32-bit
    /// output, so results agree on 32- and 64-bit platforms.
    ///
    /// # Panics
    ///
    /// If `low >= high`.
    #[inline]
    fn uniform_index(&mut self, low: usize, high: usize) -> usize {
        assert!(low < high, "uniform_index: empty range {}..{}", low, high);
        let range = high - low;
        if range == 1 {
            return low;
        }
        if range <= u32::MAX as usize {
            low + sample_u32(self, range as u32) as usize
        } else {
            low + sample_u64(self, range as u64) as usize
        }
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {}

// Lemire's widening-multiply method with rejection. `thresh` is
// `2^32 % range`; a low word below it would bias the high word.
#[inline]
fn sample_u32<R: RngCore + ?Sized>(rng: &mut R, range: u32) -> u32 {
    let thresh = range.wrapping_neg() % range;
    loop {
        let m = u64::from(rng.next_u32()) * u64::from(range);
        let (hi, lo) = ((m >> 32) as u32, m as u32);
        if lo >= thresh {
            return hi;
        }
    }
}

#[inline]
fn sample_u64<R: RngCore + ?Sized>(rng: &mut R, range: u64) -> u64 {
    let thresh = range.wrapping_neg() % range;
    loop {
        let m = u128::from(rng.next_u64()) * u128::from(range);
        let (hi, lo) = ((m >> 64) as u64, m as u64);
        if lo >= thresh {
            return hi;
        }
    }
}
