// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence-related functionality
//!
//! This module provides:
//!
//! *   [`IteratorExt`] for shuffling, sampling and adapting iterators
//! *   [`SliceExt`] for indexing slices under an [`IndexPolicy`]
//! *   [`shuffle`], [`sample`] and [`choose_one`]: the same random operations
//!     as free functions over any [`IntoIterator`]
//! *   [`resolve_index`], [`clamp_index`] and [`cyclic_index`]: index
//!     arithmetic against a known length
//!
//! Random operations first collect their input into an owned buffer, reading
//! it exactly once; the result is then produced lazily from that buffer.

mod batch;
mod except;
mod index;
mod intersperse;
mod sample;
mod shuffle;

pub use self::batch::Batches;
pub use self::except::ExceptBy;
pub use self::index::{clamp_index, cyclic_index, resolve_index, IndexPolicy};
pub use self::intersperse::Intersperse;
pub use self::sample::{choose_one, sample};
pub use self::shuffle::{shuffle, ShuffleIter};

use core::hash::Hash;

use rand_core::RngCore;

#[cfg(feature = "std")]
use crate::rng::{default_source, DefaultRng};
use crate::Error;

/// Extension trait on iterators, providing random and adapting methods.
///
/// This trait is implemented on all iterators `I` where `I: Iterator + Sized`.
/// You must `use` this trait:
///
/// ```
/// use rand_seq::IteratorExt;
/// use rand_core::SeedableRng;
///
/// let mut rng = rand_pcg::Pcg32::seed_from_u64(3);
/// let word: String = "shuffle".chars().shuffle_with(&mut rng).collect();
/// println!("{}", word);
/// ```
/// Example output (depends on the generator):
/// ```none
/// lfhsuef
/// ```
///
/// Methods without a `_with` suffix seed a fresh [`DefaultRng`] from the
/// operating system on every call and require the `std` feature.
pub trait IteratorExt: Iterator + Sized {
    /// Lazily shuffle the elements using a fresh [`DefaultRng`].
    ///
    /// See [`IteratorExt::shuffle_with`].
    ///
    /// # Panics
    ///
    /// If the OS entropy source fails; see
    /// [`default_source`](crate::rng::default_source).
    #[cfg(feature = "std")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
    fn shuffle(self) -> ShuffleIter<Self::Item, DefaultRng> {
        shuffle(self, default_source())
    }

    /// Lazily shuffle the elements.
    ///
    /// The iterator is consumed immediately into a buffer; each call to
    /// `next` on the result then costs one index draw. The output is a
    /// uniformly random permutation of the input, and stopping early (e.g.
    /// via [`Iterator::take`]) leaves the rest of the buffer untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_seq::IteratorExt;
    /// use rand_core::SeedableRng;
    ///
    /// let mut rng = rand_pcg::Pcg32::seed_from_u64(11);
    /// let mut v: Vec<u32> = (0..10).shuffle_with(&mut rng).collect();
    /// v.sort();
    /// assert_eq!(v, (0..10).collect::<Vec<_>>());
    /// ```
    fn shuffle_with<R>(self, rng: &mut R) -> ShuffleIter<Self::Item, &mut R>
    where
        R: RngCore + ?Sized,
    {
        shuffle(self, rng)
    }

    /// Sample `count` distinct elements using a fresh [`DefaultRng`].
    ///
    /// See [`IteratorExt::sample_with`].
    ///
    /// # Panics
    ///
    /// If the OS entropy source fails.
    #[cfg(feature = "std")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
    fn sample(self, count: usize) -> Result<ShuffleIter<Self::Item, DefaultRng>, Error> {
        sample(self, count, default_source())
    }

    /// Sample `count` distinct elements, in random order.
    ///
    /// "Distinct" refers to positions: no input element is returned twice,
    /// although equal values may appear if the input holds duplicates.
    ///
    /// Fails with [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if
    /// `count` exceeds the number of elements. Only `count` draws are made.
    ///
    /// # Example
    ///
    /// ```
    /// use rand_seq::{IteratorExt, ErrorKind};
    /// use rand_core::SeedableRng;
    ///
    /// let mut rng = rand_pcg::Pcg32::seed_from_u64(5);
    /// let picked: Vec<char> = "abcdef".chars().sample_with(3, &mut rng)?.collect();
    /// assert_eq!(picked.len(), 3);
    ///
    /// let err = "ab".chars().sample_with(3, &mut rng).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::OutOfRange);
    /// # Ok::<(), rand_seq::Error>(())
    /// ```
    fn sample_with<R>(self, count: usize, rng: &mut R) -> Result<ShuffleIter<Self::Item, &mut R>, Error>
    where
        R: RngCore + ?Sized,
    {
        sample(self, count, rng)
    }

    /// Choose one element using a fresh [`DefaultRng`].
    ///
    /// See [`IteratorExt::choose_one_with`].
    ///
    /// # Panics
    ///
    /// If the OS entropy source fails.
    #[cfg(feature = "std")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
    fn choose_one(self) -> Result<Self::Item, Error> {
        choose_one(self, &mut default_source())
    }

    /// Uniformly choose one element.
    ///
    /// Makes a single index draw; no shuffling is performed. Fails with
    /// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) on an empty
    /// iterator, as `sample_with(1, rng)` does.
    fn choose_one_with<R>(self, rng: &mut R) -> Result<Self::Item, Error>
    where
        R: RngCore + ?Sized,
    {
        choose_one(self, rng)
    }

    /// Place a clone of `separator` between each pair of adjacent elements.
    ///
    /// ```
    /// use rand_seq::IteratorExt;
    ///
    /// let v: Vec<i32> = [1, 2, 3].into_iter().interspersed(0).collect();
    /// assert_eq!(v, [1, 0, 2, 0, 3]);
    /// ```
    fn interspersed(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Group elements into vectors of `size` elements.
    ///
    /// The last batch holds whatever remains and may be shorter; it is never
    /// empty. Fails with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) if
    /// `size` is zero.
    ///
    /// ```
    /// use rand_seq::IteratorExt;
    ///
    /// let b: Vec<Vec<i32>> = (1..=5).batches(2)?.collect();
    /// assert_eq!(b, [vec![1, 2], vec![3, 4], vec![5]]);
    /// # Ok::<(), rand_seq::Error>(())
    /// ```
    fn batches(self, size: usize) -> Result<Batches<Self>, Error> {
        Batches::new(self, size)
    }

    /// Elements not present in `other`, each yielded at most once.
    ///
    /// Equivalent to [`IteratorExt::except_by`] with the identity key.
    ///
    /// ```
    /// use rand_seq::IteratorExt;
    ///
    /// let v: Vec<i32> = [1, 2, 2, 3, 4].into_iter().except([2, 4]).collect();
    /// assert_eq!(v, [1, 3]);
    /// ```
    fn except<J>(self, other: J) -> ExceptBy<Self, Self::Item, fn(&Self::Item) -> Self::Item>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Hash + Eq + Clone,
    {
        ExceptBy::new(self, other, <Self::Item as Clone>::clone as fn(&Self::Item) -> Self::Item)
    }

    /// Elements whose key does not occur among the keys of `other`.
    ///
    /// `other` is read eagerly into a hash set when this method is called;
    /// `self` is read lazily. Set semantics apply: once an element with a
    /// given key has been yielded, later elements with the same key are
    /// skipped.
    ///
    /// ```
    /// use rand_seq::IteratorExt;
    ///
    /// let words = ["apple", "avocado", "banana", "cherry", "blueberry"];
    /// let v: Vec<&str> = words
    ///     .into_iter()
    ///     .except_by(["bread"], |w| w.chars().next())
    ///     .collect();
    /// assert_eq!(v, ["apple", "cherry"]);
    /// ```
    fn except_by<J, K, F>(self, other: J, key: F) -> ExceptBy<Self, K, F>
    where
        J: IntoIterator<Item = Self::Item>,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        ExceptBy::new(self, other, key)
    }
}

impl<I> IteratorExt for I where I: Iterator + Sized {}

/// Extension trait on slices, providing policy-driven indexing.
///
/// ```
/// use rand_seq::{SliceExt, IndexPolicy};
///
/// let v = [10, 20, 30];
/// assert_eq!(v.get_cyclic(4)?, &20);
/// assert_eq!(v.get_clamped(-7)?, &10);
/// assert_eq!(v.get_with(2, IndexPolicy::Regular)?, &30);
/// assert!(v.get_with(3, IndexPolicy::Regular).is_err());
/// # Ok::<(), rand_seq::Error>(())
/// ```
pub trait SliceExt {
    /// The element type of the slice
    type Item;

    /// Get the element at `index`, resolved under `policy`.
    ///
    /// Fails with [`ErrorKind::Empty`](crate::ErrorKind::Empty) on an empty
    /// slice, whatever the policy, and with
    /// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) for an
    /// out-of-bounds index under [`IndexPolicy::Regular`].
    fn get_with(&self, index: isize, policy: IndexPolicy) -> Result<&Self::Item, Error>;

    /// Get the element at `index`, saturating at both ends.
    fn get_clamped(&self, index: isize) -> Result<&Self::Item, Error> {
        self.get_with(index, IndexPolicy::Clamp)
    }

    /// Get the element at `index`, wrapping around in both directions.
    fn get_cyclic(&self, index: isize) -> Result<&Self::Item, Error> {
        self.get_with(index, IndexPolicy::Cyclic)
    }
}

impl<T> SliceExt for [T] {
    type Item = T;

    fn get_with(&self, index: isize, policy: IndexPolicy) -> Result<&T, Error> {
        let i = resolve_index(index, self.len(), policy)?;
        Ok(&self[i])
    }
}
