// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a [`Report`].

use crate::{
    errors::SerializeError,
    report::{Case, CaseStatus, Report, Suite},
};
use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::{io, time::Duration};

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static FAILURE_TAG: &str = "failure";
static MESSAGE_TAG: &str = "message";

pub(crate) fn serialize_report(
    report: &Report,
    writer: impl io::Write,
) -> Result<(), SerializeError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;

    writer.write_event(Event::Start(BytesStart::new(TESTSUITES_TAG)))?;
    for suite in &report.suites {
        serialize_suite(suite, &mut writer)?;
    }
    serialize_end_tag(TESTSUITES_TAG, &mut writer)?;
    writer.write_event(Event::Eof)?;

    // Trailing newline.
    writer.write_indent()?;
    Ok(())
}

fn serialize_suite(
    suite: &Suite,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let mut testsuite_tag = BytesStart::new(TESTSUITE_TAG);
    testsuite_tag.extend_attributes([
        ("name", suite.name.as_str()),
        ("errors", suite.errors().to_string().as_str()),
        ("failures", suite.failures().to_string().as_str()),
        ("skipped", suite.skipped().to_string().as_str()),
        ("tests", suite.tests().to_string().as_str()),
        ("time", serialize_time(suite.duration).as_str()),
    ]);
    writer.write_event(Event::Start(testsuite_tag))?;

    for case in &suite.cases {
        serialize_case(case, writer)?;
    }

    serialize_end_tag(TESTSUITE_TAG, writer)
}

fn serialize_case(case: &Case, writer: &mut Writer<impl io::Write>) -> Result<(), SerializeError> {
    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    testcase_tag.extend_attributes([
        ("name", case.name.as_str()),
        ("time", serialize_time(case.duration).as_str()),
    ]);

    // Only failures carry a detail element; Error and Skipped cases are
    // visible in the suite counters alone.
    match case.status {
        CaseStatus::Failure => {
            writer.write_event(Event::Start(testcase_tag))?;
            writer.write_event(Event::Start(BytesStart::new(FAILURE_TAG)))?;
            writer.write_event(Event::Start(BytesStart::new(MESSAGE_TAG)))?;
            writer.write_event(Event::Text(BytesText::new(&case.output)))?;
            serialize_end_tag(MESSAGE_TAG, writer)?;
            serialize_end_tag(FAILURE_TAG, writer)?;
            serialize_end_tag(TESTCASE_TAG, writer)
        }
        CaseStatus::Unknown | CaseStatus::Success | CaseStatus::Error | CaseStatus::Skipped => {
            writer.write_event(Event::Empty(testcase_tag))?;
            Ok(())
        }
    }
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    writer.write_event(Event::End(BytesEnd::new(tag_name)))?;
    Ok(())
}

// Durations are serialized the way the transcript prints them: seconds in
// the shortest decimal form (`0.03`, not `0.030`).
fn serialize_time(time: Duration) -> String {
    format!("{}", time.as_secs_f64())
}
