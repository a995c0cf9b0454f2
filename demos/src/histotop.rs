// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Command line front end: analyzes the numbers in a file or on stdin.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use histotop::analysis::Analysis;
use histotop::analysis::analyze;
use histotop::source::LineSource;
use histotop::source::WordSource;
use tracing::Level;
use tracing::debug;
use tracing::error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Split {
    /// One number per line.
    Lines,
    /// Numbers separated by any whitespace.
    Words,
}

#[derive(Debug, Parser)]
#[command(version, about = "Histogram and top-N of a stream of numbers")]
struct Args {
    /// Number of largest values to report.
    #[arg(short = 'n', long = "top", default_value_t = 10)]
    top_n: usize,

    /// Width of every histogram bin.
    #[arg(short = 'w', long, default_value_t = 1.0, allow_negative_numbers = true)]
    bin_width: f64,

    /// How the input is split into tokens.
    #[arg(long, value_enum, default_value_t = Split::Lines)]
    split: Split,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Input file; stdin when omitted or `-`.
    file: Option<PathBuf>,
}

fn open_input(file: Option<&PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn run(args: &Args) -> anyhow::Result<Analysis> {
    let reader = open_input(args.file.as_ref())?;
    let analysis = match args.split {
        Split::Lines => analyze(LineSource::new(reader), args.top_n, args.bin_width)?,
        Split::Words => analyze(WordSource::new(reader), args.top_n, args.bin_width)?,
    };
    Ok(analysis)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    debug!(
        top_n = args.top_n,
        bin_width = args.bin_width,
        split = ?args.split,
        file = ?args.file,
        "starting analysis"
    );

    match run(&args) {
        Ok(analysis) => {
            info!(
                count = analysis.count(),
                bins = analysis.histogram().len(),
                "analysis finished"
            );
            print!("{analysis}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("analysis failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}
