//! # orgretrieve
//!
//! A CLI tool for rendering org metadata retrieve results as aligned text
//! reports.
//!
//! ## Overview
//!
//! orgretrieve is built on top of orgretrievelib. It reads the JSON result
//! document produced by a metadata retrieve client and prints the
//! two-section text report (retrieved source, retrieve warnings). A result
//! that does not match the expected shape prints a localized diagnostic
//! embedding the raw JSON instead of a table.
//!
//! ## Usage
//!
//! ```bash
//! # Render a retrieve result file
//! orgretrieve result.json
//!
//! # Read the result from stdin
//! retrieve-client --json | orgretrieve
//!
//! # Echo the normalized parsed result as JSON
//! orgretrieve result.json --output json
//! ```

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use console::Style;
use log::debug;
use orgretrievelib::{format_parsed_retrieve, Catalog, ParsedRetrieve, Registry};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("orgretrieve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render org metadata retrieve results as aligned text reports")
        .arg(
            Arg::new("input")
                .help("Retrieve result JSON file, or '-' for stdin")
                .default_value("-"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Read the result document from a file or stdin
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read '{}'", input))
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let text = read_input(input)?;
    debug!("read {} bytes from {}", text.len(), input);

    let registry = Registry::builtin();
    let catalog = Catalog::new();
    let parsed = ParsedRetrieve::from_json(&text, &registry)
        .with_context(|| format!("input '{}' is not valid JSON", input))?;

    match output {
        "json" => match &parsed {
            ParsedRetrieve::Retrieve(result) => {
                debug!(
                    "echoing parsed result: {} successes, {} failures",
                    result.successes.len(),
                    result.failures.len()
                );
                let mut rendered = serde_json::to_string_pretty(result)?;
                rendered.push('\n');
                Ok(rendered)
            }
            ParsedRetrieve::Unrecognized(_) => {
                anyhow::bail!(format_parsed_retrieve(&parsed, &registry, &catalog))
            }
        },
        _ => Ok(format_parsed_retrieve(&parsed, &registry, &catalog)),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(report) => {
            if !report.is_empty() {
                print!("{}", report);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!(
                "{} {:#}",
                Style::new().red().bold().apply_to("Error:"),
                error
            );
            ExitCode::FAILURE
        }
    }
}
