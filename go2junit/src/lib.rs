// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Convert `go test -v` output into JUnit XML reports.
//!
//! This crate is the command-line front end for the `gotest-junit` library.
//! Pipe a verbose Go test run through it:
//!
//! ```text
//! go test -v ./... | go2junit > report.xml
//! ```

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
#[doc(hidden)]
pub use output::OutputWriter;
