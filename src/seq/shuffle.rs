// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lazy Fisher-Yates shuffling

use alloc::collections::VecDeque;
use core::iter::FusedIterator;

use rand_core::RngCore;

use crate::rng::RandomSource;

/// An iterator over a lazily shuffled buffer
///
/// Yields a uniformly random permutation of the collected input (or, when
/// created by [`sample`](super::sample), a prefix of one), one element per
/// call to `next`.
///
/// This struct is created by [`shuffle`], [`sample`](super::sample) and the
/// corresponding methods on [`IteratorExt`](super::IteratorExt).
#[derive(Debug, Clone)]
pub struct ShuffleIter<T, R> {
    // The not yet yielded elements, in Fisher-Yates slot order.
    buf: VecDeque<T>,
    // How many more elements will be yielded.
    left: usize,
    rng: R,
}

impl<T, R: RngCore> ShuffleIter<T, R> {
    pub(super) fn new(buf: VecDeque<T>, left: usize, rng: R) -> Self {
        debug_assert!(left <= buf.len());
        ShuffleIter { buf, left, rng }
    }

    /// Consume the iterator, returning the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Lazily shuffle the elements of `iterable`.
///
/// The input is read once, in full, before this function returns. Each
/// subsequent call to `next` on the result draws one index from `rng`.
///
/// `rng` may be an owned generator or `&mut` to a caller-owned one.
///
/// # Example
///
/// ```
/// use rand_seq::seq::shuffle;
/// use rand_core::SeedableRng;
///
/// let rng = rand_pcg::Pcg32::seed_from_u64(9);
/// let first_two: Vec<_> = shuffle(vec!["x", "y", "z"], rng).take(2).collect();
/// assert_eq!(first_two.len(), 2);
/// assert_ne!(first_two[0], first_two[1]);
/// ```
pub fn shuffle<I, R>(iterable: I, rng: R) -> ShuffleIter<I::Item, R>
where
    I: IntoIterator,
    R: RngCore,
{
    let buf = materialize(iterable);
    let len = buf.len();
    ShuffleIter::new(buf, len, rng)
}

pub(super) fn materialize<I: IntoIterator>(iterable: I) -> VecDeque<I::Item> {
    let buf: VecDeque<_> = iterable.into_iter().collect();
    trace!("collected {} elements into the shuffle buffer", buf.len());
    buf
}

impl<T, R: RngCore> Iterator for ShuffleIter<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.left == 0 {
            return None;
        }
        // Durstenfeld's variant of the Fisher-Yates shuffle, run forwards:
        // the pick is yielded and the front element moves into its slot.
        let k = self.rng.uniform_index(0, self.buf.len());
        self.left -= 1;
        self.buf.swap_remove_front(k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T, R: RngCore> ExactSizeIterator for ShuffleIter<T, R> {}

impl<T, R: RngCore> FusedIterator for ShuffleIter<T, R> {}
