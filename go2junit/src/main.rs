// Copyright (c) The go2junit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use go2junit::{App, OutputWriter};

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    let output = app.init_output();

    match app.exec(&mut OutputWriter::default()) {
        Ok(()) => Ok(()),
        Err(error) => {
            error.display_to_stderr(&output.stderr_styles());
            std::process::exit(error.process_exit_code())
        }
    }
}
