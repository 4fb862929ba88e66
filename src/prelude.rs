// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenience re-export of common members
//!
//! Like the standard library's prelude, this module simplifies importing of
//! common items. Unlike the standard prelude, the contents of this module must
//! be imported manually:
//!
//! ```
//! use rand_seq::prelude::*;
//! # let v: Vec<u8> = (0..4).interspersed(9).collect();
//! ```

#[doc(no_inline)]
pub use crate::rng::{DefaultRng, RandomSource};
#[doc(no_inline)]
pub use crate::seq::{IndexPolicy, IteratorExt, SliceExt};
#[doc(no_inline)]
pub use crate::{Error, ErrorKind};
