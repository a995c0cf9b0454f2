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

use std::path::PathBuf;
use std::process::Command as StdCommand;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "x", about = "Developer tasks for the histotop workspace")]
struct Command {
    #[command(subcommand)]
    sub: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Compile every workspace member.
    Build,
    /// Check formatting and run clippy.
    Lint {
        /// Apply formatting fixes instead of checking.
        #[arg(long)]
        fix: bool,
    },
    /// Run every test, doc tests included.
    Test {
        /// Run tests with `--no-fail-fast`.
        #[arg(long)]
        no_fail_fast: bool,
    },
}

impl SubCommand {
    fn run(self) -> Result<(), String> {
        match self {
            SubCommand::Build => run_cargo(&["build", "--workspace", "--all-features"]),
            SubCommand::Lint { fix } => {
                if fix {
                    run_cargo(&["fmt", "--all"])?;
                } else {
                    run_cargo(&["fmt", "--all", "--", "--check"])?;
                }
                run_cargo(&[
                    "clippy",
                    "--workspace",
                    "--all-targets",
                    "--all-features",
                    "--",
                    "-D",
                    "warnings",
                ])
            }
            SubCommand::Test { no_fail_fast } => {
                let mut args = vec!["test", "--workspace", "--all-features"];
                if no_fail_fast {
                    args.push("--no-fail-fast");
                }
                run_cargo(&args)
            }
        }
    }
}

fn find_cargo() -> Result<PathBuf, String> {
    which::which("cargo").map_err(|err| format!("cannot find cargo: {err}"))
}

fn run_cargo(args: &[&str]) -> Result<(), String> {
    let cargo = find_cargo()?;
    println!("$ cargo {}", args.join(" "));
    let status = StdCommand::new(cargo)
        .args(args)
        .status()
        .map_err(|err| format!("failed to run cargo: {err}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("cargo {} failed: {status}", args[0]))
    }
}

fn main() -> ExitCode {
    let cmd = Command::parse();
    match cmd.sub.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
