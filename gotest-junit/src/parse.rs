// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parse the verbose output of the Go test runner.

use crate::{
    errors::ParseError,
    report::{Case, CaseStatus, Report, Suite},
};
use std::{io::BufRead, mem, time::Duration};

/// Parses a `go test -v` transcript into a [`Report`].
///
/// Parsing is best-effort: lines the parser does not recognize are captured
/// as output of the current case, and malformed fields within recognized
/// marker lines are ignored. The only failure mode is a read error from
/// `reader`.
///
/// A suite still open when the input ends never saw its terminating summary
/// line and is not part of the returned report.
pub fn parse(reader: impl BufRead) -> Result<Report, ParseError> {
    let mut parser = Parser::default();
    for line in reader.lines() {
        parser.apply(classify(&line?));
    }
    Ok(parser.finish())
}

/// A single transcript line, classified into the action it triggers.
#[derive(Clone, Debug, Eq, PartialEq)]
enum LineKind<'a> {
    /// Bare `PASS`/`FAIL` marker. Carries no suite information and is
    /// superseded by the `ok`/`FAIL <pkg> <time>` summary line.
    Marker,

    /// `=== RUN <name>`: a new case begins.
    StartCase { name: Option<&'a str> },

    /// `--- PASS:`/`--- FAIL: <name> (<seconds>s)`: result for the current
    /// case.
    MarkResult {
        status: CaseStatus,
        duration: Option<Duration>,
    },

    /// `ok`/`FAIL <pkg> <time>`: the current suite terminates.
    EndSuite {
        name: Option<&'a str>,
        duration: Option<Duration>,
    },

    /// Anything else: free-form output attributed to the current case.
    Output(&'a str),
}

/// Classifies one line, with any trailing newline already stripped.
///
/// Checks run in priority order; a line matching several prefixes takes the
/// first match. Fields are split on runs of whitespace.
fn classify(line: &str) -> LineKind<'_> {
    if line == "PASS" || line == "FAIL" {
        LineKind::Marker
    } else if line.starts_with("=== RUN") {
        LineKind::StartCase {
            name: nth_field(line, 2),
        }
    } else if line.starts_with("--- FAIL:") {
        LineKind::MarkResult {
            status: CaseStatus::Failure,
            duration: nth_field(line, 3).and_then(parse_seconds),
        }
    } else if line.starts_with("--- PASS:") {
        LineKind::MarkResult {
            status: CaseStatus::Success,
            duration: nth_field(line, 3).and_then(parse_seconds),
        }
    } else if line.starts_with("FAIL") || line.starts_with("ok") {
        LineKind::EndSuite {
            name: nth_field(line, 1),
            duration: nth_field(line, 2).and_then(parse_seconds),
        }
    } else {
        LineKind::Output(line)
    }
}

fn nth_field(line: &str, n: usize) -> Option<&str> {
    line.split_whitespace().nth(n)
}

/// Parses a transcript duration field into seconds.
///
/// `go test` prints durations as fractional seconds: `0.12s` on summary
/// lines, `(0.05s)` on case result lines, and `(0.05` in the older
/// `(0.05 seconds)` form. Returns `None` for anything that does not parse as
/// a non-negative number of seconds; callers leave the corresponding
/// duration at zero.
fn parse_seconds(field: &str) -> Option<Duration> {
    let digits = field.strip_prefix('(').unwrap_or(field);
    let digits = digits.strip_suffix(')').unwrap_or(digits);
    let digits = digits.strip_suffix('s').unwrap_or(digits);
    let seconds: f64 = digits.parse().ok()?;
    Duration::try_from_secs_f64(seconds).ok()
}

/// Parser state: the suites finalized so far plus the accumulators for the
/// suite and case currently being read.
#[derive(Debug, Default)]
struct Parser {
    suites: Vec<Suite>,
    suite: Suite,
    /// Catches output and result markers seen while the current suite has no
    /// case open. Never emitted.
    orphan: Case,
}

impl Parser {
    fn apply(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::Marker => {}
            LineKind::StartCase { name } => {
                self.suite.cases.push(Case {
                    name: name.unwrap_or_default().to_owned(),
                    ..Case::default()
                });
            }
            LineKind::MarkResult { status, duration } => {
                let case = self.current_case();
                case.status = status;
                if let Some(duration) = duration {
                    case.duration = duration;
                }
            }
            LineKind::EndSuite { name, duration } => {
                self.suite.name = name.unwrap_or_default().to_owned();
                self.suite.duration = duration.unwrap_or_default();
                self.suites.push(mem::take(&mut self.suite));
            }
            LineKind::Output(line) => {
                let output = &mut self.current_case().output;
                output.push_str(line);
                output.push('\n');
            }
        }
    }

    /// The case unrecognized lines and result markers attach to: the last
    /// case of the current suite, or the orphan placeholder if the suite has
    /// none yet.
    fn current_case(&mut self) -> &mut Case {
        match self.suite.cases.last_mut() {
            Some(case) => case,
            None => &mut self.orphan,
        }
    }

    fn finish(self) -> Report {
        Report {
            suites: self.suites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn classify_line_kinds() {
        let cases = [
            ("PASS", LineKind::Marker),
            ("FAIL", LineKind::Marker),
            (
                "=== RUN   TestFoo",
                LineKind::StartCase {
                    name: Some("TestFoo"),
                },
            ),
            ("=== RUN", LineKind::StartCase { name: None }),
            (
                "--- PASS: TestFoo (0.05s)",
                LineKind::MarkResult {
                    status: CaseStatus::Success,
                    duration: Some(Duration::from_millis(50)),
                },
            ),
            (
                "--- FAIL: TestFoo (0.10s)",
                LineKind::MarkResult {
                    status: CaseStatus::Failure,
                    duration: Some(Duration::from_millis(100)),
                },
            ),
            // Old-style result line: `(0.05 seconds)`.
            (
                "--- PASS: TestFoo (0.05 seconds)",
                LineKind::MarkResult {
                    status: CaseStatus::Success,
                    duration: Some(Duration::from_millis(50)),
                },
            ),
            (
                "--- FAIL: TestFoo",
                LineKind::MarkResult {
                    status: CaseStatus::Failure,
                    duration: None,
                },
            ),
            (
                "--- FAIL: TestFoo (x.yzs)",
                LineKind::MarkResult {
                    status: CaseStatus::Failure,
                    duration: None,
                },
            ),
            (
                "ok  \texample.com/pkg\t0.03s",
                LineKind::EndSuite {
                    name: Some("example.com/pkg"),
                    duration: Some(Duration::from_millis(30)),
                },
            ),
            (
                "FAIL\texample.com/pkg\t0.12s",
                LineKind::EndSuite {
                    name: Some("example.com/pkg"),
                    duration: Some(Duration::from_millis(120)),
                },
            ),
            (
                "FAIL\texample.com/pkg [build failed]",
                LineKind::EndSuite {
                    name: Some("example.com/pkg"),
                    duration: None,
                },
            ),
            ("    some indented diagnostic", LineKind::Output("    some indented diagnostic")),
            ("", LineKind::Output("")),
        ];

        for (line, expected) in cases {
            assert_eq!(classify(line), expected, "line: {line:?}");
        }
    }

    #[test]
    fn parses_suites_and_attributes_output() {
        let input = indoc::indoc! {"
            === RUN   TestA
            --- PASS: TestA (0.01s)
            === RUN   TestB
            some failure detail
            --- FAIL: TestB (0.02s)
            FAIL
            FAIL\texample.com/pkg\t0.03s
        "};

        let report = parse(Cursor::new(input)).expect("transcript parses");
        assert_eq!(report.suites.len(), 1);

        let suite = &report.suites[0];
        assert_eq!(suite.name, "example.com/pkg");
        assert_eq!(suite.duration, Duration::from_millis(30));
        assert_eq!(suite.tests(), 2);
        assert_eq!(suite.failures(), 1);

        let case_a = &suite.cases[0];
        assert_eq!(case_a.name, "TestA");
        assert_eq!(case_a.status, CaseStatus::Success);
        assert_eq!(case_a.duration, Duration::from_millis(10));
        assert_eq!(case_a.output, "");

        let case_b = &suite.cases[1];
        assert_eq!(case_b.name, "TestB");
        assert_eq!(case_b.status, CaseStatus::Failure);
        assert_eq!(case_b.duration, Duration::from_millis(20));
        assert_eq!(case_b.output, "some failure detail\n");
    }

    #[test]
    fn suites_are_emitted_in_terminating_line_order() {
        let input = indoc::indoc! {"
            === RUN   TestA
            --- PASS: TestA (0.01s)
            ok  \texample.com/first\t0.02s
            === RUN   TestB
            --- PASS: TestB (0.01s)
            ok  \texample.com/second\t0.03s
        "};

        let report = parse(Cursor::new(input)).expect("transcript parses");
        let names: Vec<_> = report
            .suites
            .iter()
            .map(|suite| suite.name.as_str())
            .collect();
        assert_eq!(names, ["example.com/first", "example.com/second"]);
    }

    #[test]
    fn open_suite_is_dropped_at_end_of_stream() {
        let input = indoc::indoc! {"
            === RUN   TestA
            --- PASS: TestA (0.01s)
        "};

        let report = parse(Cursor::new(input)).expect("transcript parses");
        assert!(report.suites.is_empty());
    }

    #[test]
    fn output_before_first_case_is_dropped() {
        let input = indoc::indoc! {"
            go: downloading example.com/dep v1.2.3
            === RUN   TestA
            --- PASS: TestA (0.01s)
            ok  \texample.com/pkg\t0.02s
        "};

        let report = parse(Cursor::new(input)).expect("transcript parses");
        assert_eq!(report.suites[0].cases[0].output, "");
    }

    #[test]
    fn output_after_suite_end_is_not_attributed() {
        let input = indoc::indoc! {"
            === RUN   TestA
            --- PASS: TestA (0.01s)
            ok  \texample.com/first\t0.02s
            stray diagnostic between suites
            === RUN   TestB
            --- PASS: TestB (0.01s)
            ok  \texample.com/second\t0.03s
        "};

        let report = parse(Cursor::new(input)).expect("transcript parses");
        assert_eq!(report.suites[0].cases[0].output, "");
        assert_eq!(report.suites[1].cases[0].output, "");
    }

    #[test]
    fn result_marker_without_case_start_is_swallowed() {
        let input = indoc::indoc! {"
            --- PASS: TestA (0.01s)
            ok  \texample.com/pkg\t0.02s
        "};

        let report = parse(Cursor::new(input)).expect("transcript parses");
        let suite = &report.suites[0];
        assert_eq!(suite.name, "example.com/pkg");
        assert_eq!(suite.tests(), 0);
    }

    #[test]
    fn malformed_durations_stay_zero() {
        let input = indoc::indoc! {"
            === RUN   TestA
            --- PASS: TestA (bogus)
            ok  \texample.com/pkg\tnot-a-duration
        "};

        let report = parse(Cursor::new(input)).expect("transcript parses");
        let suite = &report.suites[0];
        assert_eq!(suite.duration, Duration::ZERO);
        assert_eq!(suite.cases[0].status, CaseStatus::Success);
        assert_eq!(suite.cases[0].duration, Duration::ZERO);
    }

    #[test]
    fn short_summary_line_yields_empty_suite_name() {
        let input = "=== RUN   TestA\n--- PASS: TestA (0.01s)\nok\n";

        let report = parse(Cursor::new(input)).expect("transcript parses");
        let suite = &report.suites[0];
        assert_eq!(suite.name, "");
        assert_eq!(suite.duration, Duration::ZERO);
        assert_eq!(suite.tests(), 1);
    }

    #[test]
    fn parse_seconds_accepts_transcript_forms() {
        let cases = [
            ("0.12s", Some(Duration::from_millis(120))),
            ("(1.23s)", Some(Duration::from_millis(1230))),
            ("(0.05", Some(Duration::from_millis(50))),
            ("17s", Some(Duration::from_secs(17))),
            ("(-0.01s)", None),
            ("()", None),
            ("seconds", None),
            ("", None),
        ];

        for (field, expected) in cases {
            assert_eq!(parse_seconds(field), expected, "field: {field:?}");
        }
    }
}
