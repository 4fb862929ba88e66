// Copyright 2018-2024 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error kind which can be matched over.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument can never be valid for this operation (e.g. a batch size
    /// of zero).
    InvalidArgument,
    /// A numeric argument lies outside its documented bounds.
    OutOfRange,
    /// The operation requires at least one element.
    Empty,
    /// The OS entropy source could not be used to seed a generator.
    Unavailable,
}

impl ErrorKind {
    /// A description of this error kind
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "argument out of range",
            ErrorKind::Empty => "sequence is empty",
            ErrorKind::Unavailable => "entropy source unavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error type of sequence operations
///
/// Embeds a [`ErrorKind`], a static message, the name of the offending
/// parameter if there is one, and (with `std` only) an optional chained cause.
///
/// Every operation of this crate validates its arguments when it is called,
/// so an `Error` is always returned before any element is produced or any
/// random draw is made.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    msg: &'static str,
    param: Option<&'static str>,
    #[cfg(feature = "std")]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new instance, with specified kind and a message.
    pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
        Error {
            kind,
            msg,
            param: None,
            #[cfg(feature = "std")]
            cause: None,
        }
    }

    /// Create a new instance blaming the parameter named `param`.
    pub fn with_param(kind: ErrorKind, msg: &'static str, param: &'static str) -> Self {
        Error {
            param: Some(param),
            ..Error::new(kind, msg)
        }
    }

    /// Create a new instance, with specified kind, message, and a
    /// chained cause.
    ///
    /// Without `std` the cause is dropped.
    #[cfg(feature = "std")]
    pub fn with_cause<E>(kind: ErrorKind, msg: &'static str, cause: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error {
            cause: Some(cause.into()),
            ..Error::new(kind, msg)
        }
    }

    /// Create a new instance, with specified kind, message, and a
    /// chained cause.
    ///
    /// Without `std` the cause is dropped.
    #[cfg(not(feature = "std"))]
    pub fn with_cause<E>(kind: ErrorKind, msg: &'static str, _cause: E) -> Self {
        Error::new(kind, msg)
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn msg(&self) -> &'static str {
        self.msg
    }

    /// Name of the parameter which caused the failure, if any
    pub fn param(&self) -> Option<&'static str> {
        self.param
    }

    pub(crate) fn out_of_range(param: &'static str, msg: &'static str) -> Self {
        Error::with_param(ErrorKind::OutOfRange, msg, param)
    }

    pub(crate) fn empty(msg: &'static str) -> Self {
        Error::new(ErrorKind::Empty, msg)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind, kind.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.param {
            Some(param) => write!(f, "{} (`{}`): {}", self.kind, param, self.msg),
            None => write!(f, "{}: {}", self.kind, self.msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
