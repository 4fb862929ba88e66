// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Random selection without replacement

use alloc::vec::Vec;

use rand_core::RngCore;

use super::shuffle::{materialize, ShuffleIter};
use crate::rng::RandomSource;
use crate::Error;

/// Randomly sample `count` elements of `iterable`, without replacement.
///
/// Returns a lazy iterator over exactly `count` elements taken from distinct
/// positions of the input, in random order. This is the first `count` steps
/// of [`shuffle`](super::shuffle): the remaining elements are never touched,
/// and only `count` index draws are made in total.
///
/// The input is read in full before this function returns, so that `count`
/// can be checked against its length. Fails with
/// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) if `count` exceeds
/// the number of elements; `count == 0` is valid and yields nothing.
///
/// # Example
///
/// ```
/// use rand_seq::seq::sample;
/// use rand_core::SeedableRng;
///
/// let mut rng = rand_pcg::Pcg32::seed_from_u64(2);
/// let winners: Vec<u32> = sample(1..=100, 3, &mut rng)?.collect();
/// assert_eq!(winners.len(), 3);
/// assert!(winners.iter().all(|w| (1..=100).contains(w)));
/// # Ok::<(), rand_seq::Error>(())
/// ```
pub fn sample<I, R>(iterable: I, count: usize, rng: R) -> Result<ShuffleIter<I::Item, R>, Error>
where
    I: IntoIterator,
    R: RngCore,
{
    let buf = materialize(iterable);
    if count > buf.len() {
        return Err(Error::out_of_range(
            "count",
            "sample count exceeds the number of elements",
        ));
    }
    Ok(ShuffleIter::new(buf, count, rng))
}

/// Uniformly choose one element of `iterable`.
///
/// The input is read in full, then a single index is drawn; there is no
/// shuffling. This behaves as [`sample`] with a count of one: if `iterable`
/// yields nothing it fails the same way, with
/// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) naming `count`.
///
/// # Example
///
/// ```
/// use rand_seq::seq::choose_one;
/// use rand_core::SeedableRng;
///
/// let mut rng = rand_pcg::Pcg32::seed_from_u64(4);
/// let face = choose_one(1..=6, &mut rng)?;
/// assert!((1..=6).contains(&face));
/// # Ok::<(), rand_seq::Error>(())
/// ```
pub fn choose_one<I, R>(iterable: I, rng: &mut R) -> Result<I::Item, Error>
where
    I: IntoIterator,
    R: RngCore + ?Sized,
{
    let mut buf: Vec<I::Item> = iterable.into_iter().collect();
    if buf.is_empty() {
        return Err(Error::out_of_range(
            "count",
            "cannot choose from an empty sequence",
        ));
    }
    let index = rng.uniform_index(0, buf.len());
    Ok(buf.swap_remove(index))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::ReplayRng;
    use crate::ErrorKind;
    use core::cell::Cell;

    #[test]
    fn count_bounds() {
        let mut r = crate::test::rng(401);
        for len in 0..6usize {
            for count in 0..=len {
                let s: Vec<usize> = sample(0..len, count, &mut r).unwrap().collect();
                assert_eq!(s.len(), count);
            }
            let err = sample(0..len, len + 1, &mut r).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
            assert_eq!(err.param(), Some("count"));
        }
        let err = sample(0..3, usize::MAX, &mut r).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn errors_before_drawing() {
        let mut r = ReplayRng::new(&[]);
        assert!(sample([1, 2], 3, &mut r).is_err());
        assert!(choose_one(Vec::<u8>::new(), &mut r).is_err());
        assert_eq!(r.draws(), 0);
    }

    #[test]
    fn empty_sample_draws_nothing() {
        let mut r = ReplayRng::new(&[]);
        let mut s = sample(0..10, 0, &mut r).unwrap();
        assert_eq!(s.len(), 0);
        assert_eq!(s.next(), None);
        drop(s);
        assert_eq!(r.draws(), 0);
    }

    #[test]
    fn input_read_exactly_once() {
        let reads = Cell::new(0);
        let source = (0..8).inspect(|_| reads.set(reads.get() + 1));
        let s: Vec<i32> = sample(source, 2, crate::test::rng(402)).unwrap().collect();
        assert_eq!(s.len(), 2);
        assert_eq!(reads.get(), 8);
    }

    #[test]
    fn positions_are_distinct() {
        let mut r = crate::test::rng(403);
        // equal values at distinct positions
        let input = ['x', 'x', 'y', 'y', 'z'];
        for _ in 0..100 {
            let mut s: Vec<char> = sample(input, 5, &mut r).unwrap().collect();
            s.sort_unstable();
            assert_eq!(s, input);
        }
        let tagged: Vec<(usize, char)> = input.iter().copied().enumerate().collect();
        for _ in 0..100 {
            let s: Vec<(usize, char)> = sample(tagged.iter().copied(), 3, &mut r).unwrap().collect();
            assert!(s[0].0 != s[1].0 && s[1].0 != s[2].0 && s[0].0 != s[2].0);
        }
    }

    #[test]
    fn choose_single() {
        let mut r = ReplayRng::new(&[u32::MAX]);
        assert_eq!(choose_one(["p", "q", "r"], &mut r).unwrap(), "r");
        assert_eq!(r.draws(), 1);

        let mut r = ReplayRng::new(&[]);
        assert_eq!(choose_one([7], &mut r).unwrap(), 7);
        assert_eq!(r.draws(), 0);

        let err = choose_one(core::iter::empty::<u8>(), &mut crate::test::rng(404)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.param(), Some("count"));
    }

    #[test]
    fn empty_choice_fails_like_sample_of_one() {
        let mut r = ReplayRng::new(&[]);
        let sampled = sample("".chars(), 1, &mut r).unwrap_err();
        let chosen = choose_one("".chars(), &mut r).unwrap_err();
        assert_eq!(chosen.kind(), sampled.kind());
        assert_eq!(chosen.param(), sampled.param());
        assert_eq!(r.draws(), 0);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri is too slow
    fn choose_uniform() {
        let mut r = crate::test::rng(405);
        let chars = [
            'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
        ];
        let mut chosen = [0i32; 14];
        // Binomial(1000, 1/14): mean 71.4, sd ~8.1
        for _ in 0..1000 {
            let picked = choose_one(chars, &mut r).unwrap();
            chosen[(picked as usize) - ('a' as usize)] += 1;
        }
        for count in chosen.iter() {
            assert!(35 < *count && *count < 110, "count: {}", count);
        }
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri is too slow
    fn sample_first_position_uniform() {
        let mut r = crate::test::rng(406);
        let mut firsts = [0i32; 5];
        let mut members = [0i32; 5];
        for _ in 0..5000 {
            let s: Vec<usize> = sample(0..5, 2, &mut r).unwrap().collect();
            firsts[s[0]] += 1;
            for &x in &s {
                members[x] += 1;
            }
        }
        for count in firsts.iter() {
            // Binomial(5000, 1/5): mean 1000, sd ~28
            assert!(850 < *count && *count < 1150, "count: {}", count);
        }
        for count in members.iter() {
            // each element is in a 2-sample with probability 2/5
            assert!(1800 < *count && *count < 2200, "count: {}", count);
        }
    }
}
