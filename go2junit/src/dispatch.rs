// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::ExpectedError,
    output::{OutputContext, OutputOpts, OutputWriter},
};
use camino::Utf8PathBuf;
use clap::Parser;
use gotest_junit::Report;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
};
use tracing::debug;

/// Convert `go test -v` output into a JUnit XML report.
///
/// Reads a verbose Go test transcript from standard input (or a file) and
/// writes a `testsuites` XML document suitable for CI dashboards.
#[derive(Debug, Parser)]
#[command(version, bin_name = "go2junit")]
pub struct App {
    /// Path to a `go test -v` transcript [default: standard input]
    #[arg(value_name = "TRANSCRIPT")]
    transcript: Option<Utf8PathBuf>,

    /// Write the XML report to this path [default: standard output]
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<Utf8PathBuf>,

    #[command(flatten)]
    output_opts: OutputOpts,
}

impl App {
    /// Initializes the output context.
    pub fn init_output(&self) -> OutputContext {
        self.output_opts.init()
    }

    /// Executes the conversion.
    pub fn exec(self, output_writer: &mut OutputWriter) -> Result<(), ExpectedError> {
        let report = match &self.transcript {
            Some(path) => {
                let file = File::open(path).map_err(|err| ExpectedError::TranscriptOpenError {
                    path: path.clone(),
                    err,
                })?;
                convert(BufReader::new(file))?
            }
            None => convert(io::stdin().lock())?,
        };

        match &self.output {
            Some(path) => {
                let file = File::create(path).map_err(|err| ExpectedError::ReportCreateError {
                    path: path.clone(),
                    err,
                })?;
                write_report(&report, BufWriter::new(file))
            }
            None => write_report(&report, output_writer.stdout_writer()),
        }
    }
}

/// Runs the parse stage over one reader.
fn convert(reader: impl BufRead) -> Result<Report, ExpectedError> {
    let report = gotest_junit::parse(reader)?;
    debug!(
        "parsed {} suites with {} cases",
        report.suites.len(),
        report.suites.iter().map(|suite| suite.tests()).sum::<usize>(),
    );
    Ok(report)
}

fn write_report(report: &Report, mut writer: impl Write) -> Result<(), ExpectedError> {
    report.serialize(&mut writer)?;
    writer
        .flush()
        .map_err(|err| ExpectedError::ReportFlushError { err })?;
    Ok(())
}
