//! groundup CLI
//!
//! Runs the book examples: `exit` and `maximum`.

use anyhow::Context;
use clap::{Arg, ArgMatches, Command, value_parser};
use groundup_maximum::{DATA_ITEMS, find_maximum, parse_items, report};
use std::io::Write;
use std::process;

fn cli() -> Command {
    Command::new("groundup")
        .version("0.1.0")
        .about("Programming From Ground Up examples")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("exit")
                .about("Exit through a direct system call")
                .arg(
                    Arg::new("status")
                        .short('s')
                        .long("status")
                        .value_name("N")
                        .help("Status code handed to the kernel")
                        .value_parser(value_parser!(i32))
                        .allow_negative_numbers(true)
                        .default_value("0"),
                ),
        )
        .subcommand(
            Command::new("maximum")
                .about("Print the largest of a zero-terminated list of data items")
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("FILE")
                        .help("Read data items from a file")
                        .conflicts_with("items")
                        .num_args(1),
                )
                .arg(
                    Arg::new("items")
                        .value_name("ITEMS")
                        .help("Data items, ending with 0 (defaults to the book's list)")
                        .value_parser(value_parser!(i32))
                        .allow_negative_numbers(true)
                        .num_args(1..),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("exit", sub)) => Ok(run_exit(sub)),
        Some(("maximum", sub)) => run_maximum(sub),
        _ => Err(anyhow::anyhow!("groundup: ERR_USAGE: missing subcommand")),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Exit with the requested status; the returned code is never produced
fn run_exit(matches: &ArgMatches) -> i32 {
    let status = matches
        .get_one::<i32>("status")
        .copied()
        .unwrap_or(groundup_exit::DEFAULT_STATUS);

    // The raw syscall skips std's own stdout flush at process exit.
    let _ = std::io::stdout().flush();
    groundup_exit::exit(status)
}

fn run_maximum(matches: &ArgMatches) -> Result<i32, anyhow::Error> {
    let items = match (
        matches.get_one::<String>("file"),
        matches.get_many::<i32>("items"),
    ) {
        (Some(file_path), _) => read_items(file_path)?,
        (None, Some(items)) => items.copied().collect(),
        (None, None) => DATA_ITEMS.to_vec(),
    };

    let line = maximum_line(&items)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").context("groundup:maximum: cannot write report")?;
    Ok(0)
}

fn maximum_line(items: &[i32]) -> Result<String, anyhow::Error> {
    let largest = find_maximum(items)?;
    Ok(report(largest))
}

fn read_items(file_path: &str) -> Result<Vec<i32>, anyhow::Error> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("groundup:maximum: cannot read {file_path}"))?;
    Ok(parse_items(&content)?)
}
