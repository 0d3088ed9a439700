/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */


use std::{io::{stdin, stdout, BufRead as _},
          path::PathBuf,
          process::ExitCode};

use clap::{Args, CommandFactory as _, Parser, Subcommand};
use crossterm::style::Stylize as _;
use miette::IntoDiagnostic as _;
use qgo_dropdown::{confirm_async_with,
                   is_stdin_piped,
                   is_stdout_piped,
                   multi_select_async_with,
                   select_async_with,
                   try_initialize_logging_global,
                   CrosstermEventStreamInputSource,
                   SelectError,
                   SelectOption,
                   StdinIsPipedResult,
                   StdoutIsPipedResult,
                   Theme,
                   CONFIRM_NO,
                   CONFIRM_YES};

#[derive(Debug, Parser)]
#[command(bin_name = "qgo-pick")]
#[command(
    about = "Pick from a list with the arrow keys, and print what was picked 🔎",
    long_about = None
)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    /// Pick exactly one option. Prints its value.
    Select(ListArg),
    /// Pick any number of options. Prints their values, one per line.
    MultiSelect(ListArg),
    /// Ask a yes / no question. Exits with 0 for yes and 1 for no.
    Confirm {
        #[arg(long, short = 'p', default_value = "Are you sure?")]
        prompt: String,
    },
}

#[derive(Debug, Args)]
pub struct ListArg {
    #[arg(long, short = 'p', default_value = "Select an option")]
    pub prompt: String,

    /// Options as `VALUE` or `VALUE=LABEL`. When none are given, options are read from
    /// stdin, one `VALUE<TAB>LABEL` per line 👉
    #[arg(value_name = "VALUE[=LABEL]")]
    pub options: Vec<String>,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "path",
        help = "Load the theme from this JSON file instead of the config folder."
    )]
    pub theme: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> miette::Result<ExitCode> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = run(cli_arg).await;

    should_log.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Stop logging...", result = ?result);
    });

    result
}

async fn run(cli_arg: CLIArg) -> miette::Result<ExitCode> {
    let bin_name = CLIArg::command();
    let bin_name = bin_name.get_bin_name().unwrap_or("this command");

    // The prompt draws on stdout.
    if let StdoutIsPipedResult::StdoutIsPiped = is_stdout_piped() {
        show_error_do_not_pipe_stdout(bin_name);
        return Ok(ExitCode::from(2));
    }

    let theme = match &cli_arg.global_options.theme {
        Some(path) => Theme::try_load_from(path)?,
        None => Theme::load(),
    };

    let mut output = stdout();
    let mut input_source = CrosstermEventStreamInputSource::default();

    let result = match cli_arg.command {
        CLICommand::Select(list_arg) => {
            let options = try_collect_options(&list_arg.options)?;
            select_async_with(
                list_arg.prompt,
                &options,
                (&mut output, &mut input_source),
                &theme,
            )
            .await
            .map(|it| vec![it])
        }
        CLICommand::MultiSelect(list_arg) => {
            let options = try_collect_options(&list_arg.options)?;
            multi_select_async_with(
                list_arg.prompt,
                &options,
                (&mut output, &mut input_source),
                &theme,
            )
            .await
        }
        CLICommand::Confirm { prompt } => {
            let answer =
                confirm_async_with(prompt, (&mut output, &mut input_source), &theme).await?;
            println!("{}", if answer { CONFIRM_YES } else { CONFIRM_NO });
            return Ok(if answer {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    };

    match result {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(SelectError::Cancelled) => Ok(ExitCode::FAILURE),
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run the prompt due to the following problem",
                error = ?error
            );
            Err(error.into())
        }
    }
}

/// Options from the command line win. Otherwise they are read from piped stdin. With
/// neither, the list is empty and the prompt reports it.
fn try_collect_options(args: &[String]) -> miette::Result<Vec<SelectOption>> {
    if !args.is_empty() {
        return Ok(args.iter().map(|it| parse_option_arg(it)).collect());
    }

    match is_stdin_piped() {
        StdinIsPipedResult::StdinIsNotPiped => Ok(vec![]),
        StdinIsPipedResult::StdinIsPiped => {
            // macos has issues w/ stdin piped in.
            // https://github.com/crossterm-rs/crossterm/issues/396
            if cfg!(target_os = "macos") {
                miette::bail!(
                    "Piping options into stdin does not work on macOS. Pass them as \
                     arguments instead."
                );
            }
            let lines = stdin()
                .lock()
                .lines()
                .collect::<std::io::Result<Vec<String>>>()
                .into_diagnostic()?;
            Ok(parse_option_lines(&lines))
        }
    }
}

fn parse_option_arg(arg: &str) -> SelectOption {
    match arg.split_once('=') {
        Some((value, label)) => SelectOption::new(value, label),
        None => SelectOption::from(arg),
    }
}

/// Blank lines are skipped.
fn parse_option_lines(lines: &[String]) -> Vec<SelectOption> {
    lines
        .iter()
        .filter(|it| !it.trim().is_empty())
        .map(|it| SelectOption::parse_line(it))
        .collect()
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    let msg = format!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \nIt draws the prompt on stdout."
    )
    .yellow()
    .to_string();
    eprintln!("{msg}");
}
