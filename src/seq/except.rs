// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set difference by key

use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;

use hashbrown::HashSet;

/// An iterator yielding the elements whose key is not excluded
///
/// The key set starts as the keys of the excluded sequence and grows with
/// every yielded element, so each key is yielded at most once.
///
/// This struct is created by
/// [`IteratorExt::except`](super::IteratorExt::except) and
/// [`IteratorExt::except_by`](super::IteratorExt::except_by).
#[derive(Clone)]
pub struct ExceptBy<I, K, F> {
    iter: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> ExceptBy<I, K, F>
where
    I: Iterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    pub(super) fn new<J>(iter: I, excluded: J, mut key: F) -> Self
    where
        J: IntoIterator<Item = I::Item>,
    {
        let seen: HashSet<K> = excluded.into_iter().map(|x| key(&x)).collect();
        trace!("except_by: {} excluded keys", seen.len());
        ExceptBy { iter, seen, key }
    }
}

impl<I: fmt::Debug, K, F> fmt::Debug for ExceptBy<I, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ExceptBy")
            .field("iter", &self.iter)
            .field("seen", &self.seen.len())
            .finish()
    }
}

impl<I, K, F> Iterator for ExceptBy<I, K, F>
where
    I: Iterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, K, F> FusedIterator for ExceptBy<I, K, F>
where
    I: FusedIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
}
