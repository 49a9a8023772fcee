// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{io, string::FromUtf8Error};
use thiserror::Error;

/// An error that occurs while reading test runner output.
///
/// Returned by [`parse`](crate::parse). Only a failed read produces this
/// error; lines the parser does not understand are tolerated and never abort
/// parsing.
#[derive(Debug, Error)]
#[error("error reading test runner output")]
pub struct ParseError {
    #[from]
    inner: io::Error,
}

/// An error that occurs while serializing a [`Report`](crate::Report).
///
/// Returned by [`Report::serialize`](crate::Report::serialize) and
/// [`Report::to_string`](crate::Report::to_string).
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The destination could not be written to.
    #[error("error writing JUnit report")]
    Write(#[from] quick_xml::Error),

    /// The serialized report was not valid UTF-8.
    #[error("serialized JUnit report is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}
