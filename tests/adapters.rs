// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Public-API checks of index resolution and the non-random adapters.

use rand_seq::prelude::*;
use rand_seq::seq::{clamp_index, cyclic_index};

#[test]
fn ring_buffer_walk() {
    let ring = ["n", "e", "s", "w"];
    let walk: Vec<&str> = (-5..5).map(|i| *ring.get_cyclic(i).unwrap()).collect();
    assert_eq!(walk, ["w", "n", "e", "s", "w", "n", "e", "s", "w", "n"]);
}

#[test]
fn clamp_and_cycle_agree_inside_bounds() {
    for len in 1..20usize {
        for i in 0..len as isize {
            assert_eq!(clamp_index(i, len).unwrap(), i as usize);
            assert_eq!(cyclic_index(i, len).unwrap(), i as usize);
            assert_eq!(IndexPolicy::Regular.resolve(i, len).unwrap(), i as usize);
        }
    }
}

#[test]
fn empty_slices_fail() {
    let empty: [u8; 0] = [];
    assert_eq!(empty.get_clamped(0).unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(empty.get_cyclic(3).unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(
        empty.get_with(0, IndexPolicy::Regular).unwrap_err().kind(),
        ErrorKind::Empty
    );
}

#[test]
fn csv_like_join() {
    let line: String = ["a", "b", "c"].into_iter().interspersed(",").collect();
    assert_eq!(line, "a,b,c");
}

#[test]
fn batches_of_strings() {
    let pages: Vec<Vec<String>> = (1..=5)
        .map(|n| format!("item{}", n))
        .batches(2)
        .unwrap()
        .collect();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2], ["item5"]);

    let err = (1..=5).batches(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn except_by_case_insensitive() {
    let tags = ["Rust", "rust", "Go", "zig", "GO", "C"];
    let banned = ["c"];
    let kept: Vec<&str> = tags
        .into_iter()
        .except_by(banned, |t| t.to_ascii_lowercase())
        .collect();
    assert_eq!(kept, ["Rust", "Go", "zig"]);
}
