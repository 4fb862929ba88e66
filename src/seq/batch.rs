// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use alloc::vec::Vec;

use crate::{Error, ErrorKind};

/// An iterator over fixed-size batches of another iterator
///
/// Every batch holds `size` elements except possibly the last, which holds
/// the remainder. Batches are pulled from the inner iterator on demand.
///
/// This struct is created by
/// [`IteratorExt::batches`](super::IteratorExt::batches).
#[derive(Debug, Clone)]
pub struct Batches<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Batches<I> {
    pub(super) fn new(iter: I, size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::with_param(
                ErrorKind::InvalidArgument,
                "batch size must be positive",
                "size",
            ));
        }
        Ok(Batches { iter, size })
    }

    /// The configured batch size
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut batch = Vec::with_capacity(self.size.min(self.iter.size_hint().0.max(1)));
        batch.extend(self.iter.by_ref().take(self.size));
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.size;
        let batches = |n: usize| n / size + (n % size != 0) as usize;
        let (lower, upper) = self.iter.size_hint();
        (batches(lower), upper.map(batches))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    #[test]
    fn remainder_in_last_batch() {
        let b: Vec<Vec<i32>> = Batches::new(1..=7, 3).unwrap().collect();
        assert_eq!(b, [vec![1, 2, 3], vec![4, 5, 6], vec![7]]);

        let b: Vec<Vec<i32>> = Batches::new(1..=6, 3).unwrap().collect();
        assert_eq!(b, [vec![1, 2, 3], vec![4, 5, 6]]);

        let b: Vec<Vec<i32>> = Batches::new(1..=2, 5).unwrap().collect();
        assert_eq!(b, [vec![1, 2]]);

        let mut b = Batches::new(0..0, 1).unwrap();
        assert_eq!(b.next(), None);
    }

    #[test]
    fn zero_size_rejected() {
        let err = Batches::new(0..10, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.param(), Some("size"));
    }

    #[test]
    fn size_hint_counts_batches() {
        assert_eq!(Batches::new(0..7, 3).unwrap().size_hint(), (3, Some(3)));
        assert_eq!(Batches::new(0..6, 3).unwrap().size_hint(), (2, Some(2)));
        assert_eq!(Batches::new(0..0, 3).unwrap().size_hint(), (0, Some(0)));
        assert_eq!(Batches::new(0u8.., 4).unwrap().size_hint().1, None);
    }

    #[test]
    fn pulls_lazily() {
        let mut seen = 0;
        let mut b = Batches::new((0..100).inspect(|_| seen += 1), 10).unwrap();
        assert_eq!(b.next().map(|v| v.len()), Some(10));
        drop(b);
        assert_eq!(seen, 10);
    }
}
