// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index resolution against a known length

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// How an arbitrary signed index is mapped onto `0..len`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexPolicy {
    /// Plain bounds-checked indexing: the index must lie in `0..len`.
    #[default]
    Regular,
    /// Saturate: negative indices map to `0`, indices past the end to
    /// `len - 1`.
    Clamp,
    /// Wrap around in both directions, so `-1` is the last element.
    Cyclic,
}

impl IndexPolicy {
    /// Resolve `index` against `len` under this policy.
    ///
    /// Same as [`resolve_index`].
    #[inline]
    pub fn resolve(self, index: isize, len: usize) -> Result<usize, Error> {
        resolve_index(index, len, self)
    }
}

/// Resolve `index` against a sequence of length `len` under `policy`.
///
/// Every policy fails with [`ErrorKind::Empty`](crate::ErrorKind::Empty) when
/// `len == 0`. [`IndexPolicy::Regular`] additionally fails with
/// [`ErrorKind::OutOfRange`](crate::ErrorKind::OutOfRange) when `index` is
/// negative or not less than `len`.
///
/// ```
/// use rand_seq::seq::{resolve_index, IndexPolicy};
///
/// assert_eq!(resolve_index(-2, 5, IndexPolicy::Cyclic)?, 3);
/// assert_eq!(resolve_index(-2, 5, IndexPolicy::Clamp)?, 0);
/// assert!(resolve_index(-2, 5, IndexPolicy::Regular).is_err());
/// # Ok::<(), rand_seq::Error>(())
/// ```
pub fn resolve_index(index: isize, len: usize, policy: IndexPolicy) -> Result<usize, Error> {
    match policy {
        IndexPolicy::Regular => regular_index(index, len),
        IndexPolicy::Clamp => clamp_index(index, len),
        IndexPolicy::Cyclic => cyclic_index(index, len),
    }
}

fn regular_index(index: isize, len: usize) -> Result<usize, Error> {
    if len == 0 {
        return Err(Error::empty("cannot index into an empty sequence"));
    }
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(Error::out_of_range("index", "index is outside the sequence")),
    }
}

/// Clamp `index` into `0..len`.
///
/// Fails with [`ErrorKind::Empty`](crate::ErrorKind::Empty) when `len == 0`.
pub fn clamp_index(index: isize, len: usize) -> Result<usize, Error> {
    if len == 0 {
        return Err(Error::empty("cannot clamp an index into an empty sequence"));
    }
    Ok(match usize::try_from(index) {
        Ok(i) => i.min(len - 1),
        Err(_) => 0,
    })
}

/// Wrap `index` around into `0..len`; the result is
/// `((index mod len) + len) mod len`.
///
/// Correct for all `index` values, including `isize::MIN` and `isize::MAX`,
/// and for lengths beyond `isize::MAX`.
///
/// Fails with [`ErrorKind::Empty`](crate::ErrorKind::Empty) when `len == 0`.
pub fn cyclic_index(index: isize, len: usize) -> Result<usize, Error> {
    if len == 0 {
        return Err(Error::empty("cannot wrap an index into an empty sequence"));
    }
    // i128 holds every isize and usize, so neither the cast nor the
    // Euclidean remainder can overflow.
    Ok((index as i128).rem_euclid(len as i128) as usize)
}
