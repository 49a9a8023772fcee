// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::SerializeError, serialize::serialize_report};
use std::{io, time::Duration};

/// The suites reconstructed from one test runner transcript.
///
/// Produced by [`parse`](crate::parse); can also be assembled directly for
/// testing or for transcripts obtained some other way.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// The suites in this report, in the order their terminating summary
    /// lines appeared in the input.
    pub suites: Vec<Suite>,
}

impl Report {
    /// Creates a new, empty `Report`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize this report to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_report(self, writer)
    }

    /// Serialize this report to a string.
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// One logical grouping of test cases, conventionally a single package run.
#[derive(Clone, Debug, Default)]
pub struct Suite {
    /// The package name from the suite's summary line; empty if the summary
    /// line carried no package field.
    pub name: String,

    /// Elapsed wall time for the suite; zero if unavailable.
    pub duration: Duration,

    /// The cases of this suite, in the order their start lines appeared.
    pub cases: Vec<Case>,
}

impl Suite {
    /// The total number of cases in this suite.
    pub fn tests(&self) -> usize {
        self.cases.len()
    }

    /// The number of cases marked [`CaseStatus::Failure`].
    pub fn failures(&self) -> usize {
        self.count(CaseStatus::Failure)
    }

    /// The number of cases marked [`CaseStatus::Error`].
    pub fn errors(&self) -> usize {
        self.count(CaseStatus::Error)
    }

    /// The number of cases marked [`CaseStatus::Skipped`].
    pub fn skipped(&self) -> usize {
        self.count(CaseStatus::Skipped)
    }

    fn count(&self, status: CaseStatus) -> usize {
        self.cases
            .iter()
            .filter(|case| case.status == status)
            .count()
    }
}

/// A single test case outcome.
#[derive(Clone, Debug, Default)]
pub struct Case {
    /// The case name from its `=== RUN` line; empty if the line had too few
    /// fields.
    pub name: String,

    /// Elapsed time for the case; zero if unavailable or unparseable.
    pub duration: Duration,

    /// The outcome of this case.
    pub status: CaseStatus,

    /// Free-form transcript lines attributed to this case, each terminated
    /// with a line break.
    pub output: String,
}

/// The outcome classification of a [`Case`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CaseStatus {
    /// The case was never explicitly marked passed or failed.
    ///
    /// Counted in a suite's `tests` total but in none of the failure
    /// counters; consumers infer passes as `tests - failures - errors -
    /// skipped`.
    #[default]
    Unknown,

    /// The case passed.
    Success,

    /// The case failed. Serialized with a `failure` element carrying the
    /// case's captured output.
    Failure,

    /// The case errored. Tracked in the `errors` counter only; this schema
    /// mapping has no dedicated `error` element.
    Error,

    /// The case was skipped. Tracked in the `skipped` counter only.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_counters_ignore_unknown_and_success() {
        let suite = Suite {
            name: "example.com/pkg".to_owned(),
            duration: Duration::from_millis(250),
            cases: vec![
                case_with_status(CaseStatus::Success),
                case_with_status(CaseStatus::Unknown),
                case_with_status(CaseStatus::Failure),
                case_with_status(CaseStatus::Failure),
                case_with_status(CaseStatus::Error),
                case_with_status(CaseStatus::Skipped),
            ],
        };

        assert_eq!(suite.tests(), 6);
        assert_eq!(suite.failures(), 2);
        assert_eq!(suite.errors(), 1);
        assert_eq!(suite.skipped(), 1);
    }

    fn case_with_status(status: CaseStatus) -> Case {
        Case {
            status,
            ..Case::default()
        }
    }
}
