// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lazy shuffling, random sampling and small sequence helpers
//!
//! This crate extends [`Iterator`] and slices with a handful of operations
//! that the standard library does not provide:
//!
//! *   [`IteratorExt::shuffle`]: a lazily evaluated random permutation
//! *   [`IteratorExt::sample`] and [`IteratorExt::choose_one`]: random
//!     selection without replacement
//! *   [`SliceExt::get_cyclic`] and [`SliceExt::get_clamped`]: wrap-around and
//!     saturating indexing
//! *   [`IteratorExt::interspersed`], [`IteratorExt::batches`] and
//!     [`IteratorExt::except_by`]: interspersion, chunking and set
//!     difference
//!
//! # Quick start
//!
//! ```
//! use rand_seq::prelude::*;
//! use rand_core::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(42);
//!
//! let deck: Vec<u32> = (1..=52).shuffle_with(&mut rng).collect();
//! assert_eq!(deck.len(), 52);
//!
//! let hand: Vec<u32> = deck.iter().copied().sample_with(5, &mut rng)?.collect();
//! assert_eq!(hand.len(), 5);
//!
//! let days = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
//! assert_eq!(days.get_cyclic(-1)?, &"sun");
//! # Ok::<(), rand_seq::Error>(())
//! ```
//!
//! # Random sources
//!
//! Every random operation has two forms: one taking a caller-owned generator
//! (`*_with(&mut rng)`), which keeps results reproducible for a seeded
//! generator, and one that builds a fresh [`rng::DefaultRng`] seeded from the
//! operating system for that single call (requires the `std` feature). See the
//! [`rng`] module.
//!
//! # Crate features
//!
//! *   `std` (default): OS-seeded default generator and
//!     `std::error::Error` support
//! *   `log`: log via the `log` crate
//! *   `serde`: serialization of [`IndexPolicy`] and [`ErrorKind`]

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![doc(test(attr(allow(unused_variables))))]
#![no_std]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod log_macros;

mod error;
pub mod prelude;
pub mod rng;
pub mod seq;

pub use crate::error::{Error, ErrorKind};
pub use crate::rng::RandomSource;
pub use crate::seq::{IndexPolicy, IteratorExt, SliceExt};
