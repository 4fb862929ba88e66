// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::iter::{Fuse, FusedIterator};

/// An iterator adapter placing a separator between adjacent elements
///
/// This struct is created by
/// [`IteratorExt::interspersed`](super::IteratorExt::interspersed).
#[derive(Debug, Clone)]
pub struct Intersperse<I: Iterator> {
    iter: Fuse<I>,
    separator: I::Item,
    pending: Option<I::Item>,
    started: bool,
}

impl<I: Iterator> Intersperse<I>
where
    I::Item: Clone,
{
    pub(super) fn new(iter: I, separator: I::Item) -> Self {
        Intersperse {
            iter: iter.fuse(),
            separator,
            pending: None,
            started: false,
        }
    }
}

impl<I: Iterator> Iterator for Intersperse<I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        if !self.started {
            self.started = true;
            return self.iter.next();
        }
        let item = self.iter.next()?;
        self.pending = Some(item);
        Some(self.separator.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let pending = self.pending.is_some() as usize;
        let started = self.started;
        let count = |n: usize| -> Option<usize> {
            if started {
                // every remaining element is preceded by a separator
                n.checked_mul(2)?.checked_add(pending)
            } else {
                Some(n.checked_mul(2)?.saturating_sub(1))
            }
        };
        (
            count(lower).unwrap_or(usize::MAX),
            upper.and_then(count),
        )
    }
}

impl<I: Iterator> FusedIterator for Intersperse<I> where I::Item: Clone {}
