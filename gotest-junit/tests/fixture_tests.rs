// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use goldenfile::Mint;
use gotest_junit::parse;
use std::io::Cursor;

static VERBOSE_RUN: &str = include_str!("fixtures/verbose_run.txt");

#[test]
fn fixtures() {
    let mut mint = Mint::new("tests/fixtures");

    let f = mint
        .new_goldenfile("verbose_run.xml")
        .expect("creating new goldenfile succeeds");

    let report = parse(Cursor::new(VERBOSE_RUN)).expect("parsing verbose_run.txt succeeds");
    report
        .serialize(f)
        .expect("serializing verbose_run succeeds");
}
