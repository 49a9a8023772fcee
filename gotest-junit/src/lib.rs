// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parse `go test -v` transcripts and generate JUnit reports in Rust.
//!
//! The pipeline has two stages: [`parse`] reconstructs a [`Report`] (suites
//! containing cases) from the line-oriented transcript, and
//! [`Report::serialize`] renders the report as a `testsuites` XML document.
//!
//! ```
//! use gotest_junit::parse;
//! use std::io::Cursor;
//!
//! let transcript = "\
//! === RUN   TestA
//! --- PASS: TestA (0.01s)
//! ok  \texample.com/pkg\t0.02s
//! ";
//! let report = parse(Cursor::new(transcript)).unwrap();
//! assert_eq!(report.suites.len(), 1);
//! println!("{}", report.to_string().unwrap());
//! ```

#![warn(missing_docs)]

mod errors;
mod parse;
mod report;
mod serialize;

pub use errors::*;
pub use parse::parse;
pub use report::*;
