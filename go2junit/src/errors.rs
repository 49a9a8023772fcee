// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::StderrStyles;
use camino::Utf8PathBuf;
use gotest_junit::{ParseError, SerializeError};
use owo_colors::OwoColorize;
use std::error::Error;
use thiserror::Error;
use tracing::error;

/// Exit codes returned by the `go2junit` process.
pub struct ExitCode;

impl ExitCode {
    /// The transcript could not be opened or read.
    pub const READ_FAILED: i32 = 100;

    /// The report could not be created or written.
    pub const WRITE_FAILED: i32 = 101;
}

// Note that the #[error()] strings are mostly placeholder messages -- the
// expected way to print out errors is with the display_to_stderr method,
// which colorizes errors.

/// An error expected in the normal course of converting a transcript.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("failed to open transcript")]
    TranscriptOpenError {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to read test runner output")]
    TranscriptReadError {
        #[from]
        err: ParseError,
    },
    #[error("failed to create report file")]
    ReportCreateError {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to write JUnit report")]
    ReportWriteError {
        #[from]
        err: SerializeError,
    },
    #[error("failed to flush JUnit report")]
    ReportFlushError {
        #[source]
        err: std::io::Error,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::TranscriptOpenError { .. } | Self::TranscriptReadError { .. } => {
                ExitCode::READ_FAILED
            }
            Self::ReportCreateError { .. }
            | Self::ReportWriteError { .. }
            | Self::ReportFlushError { .. } => ExitCode::WRITE_FAILED,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let mut next_error = match self {
            Self::TranscriptOpenError { path, err } => {
                error!("failed to open transcript `{}`", path.style(styles.bold));
                Some(err as &dyn Error)
            }
            Self::TranscriptReadError { err } => {
                error!("failed to read test runner output");
                err.source()
            }
            Self::ReportCreateError { path, err } => {
                error!("failed to create report file `{}`", path.style(styles.bold));
                Some(err as &dyn Error)
            }
            Self::ReportWriteError { err } => {
                error!("failed to write JUnit report");
                err.source()
            }
            Self::ReportFlushError { err } => {
                error!("failed to write JUnit report");
                Some(err as &dyn Error)
            }
        };

        while let Some(err) = next_error {
            error!(
                target: "go2junit::no_heading",
                "{}: {}",
                "caused by".style(styles.warning_text),
                err
            );
            next_error = err.source();
        }
    }
}
