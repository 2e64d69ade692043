use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

use crate::commands;
use crate::config::DrillsConfig;

pub fn build_cli() -> Command {
    Command::new("drills")
        .version(clap::crate_version!())
        .about("Small numeric console exercises")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .help("Do not print input prompts. Overrides show_prompts in the configuration file.")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("sort")
                .about("Read three numbers and print them in ascending order")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("numbers")
                        .help("The three numbers to sort. Prompts for them when omitted.")
                        .num_args(3)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("sign")
                .about("Say whether a number is positive, negative or zero")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("value")
                        .help("The number to classify. Prompts for it when omitted.")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("sequence")
                .about("Print squares of 0..25 followed by triples of 25..50")
                .arg(
                    Arg::new("row_width")
                        .short('w')
                        .long("row-width")
                        .help("Values per output line. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize))
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("matrix-add")
                .about("Read two matrices and print their element-wise sum"),
        )
        .subcommand(
            Command::new("smallest")
                .about("Print the index of the smallest number in an array")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("values")
                        .help("Integers to search. Uses the built-in array when omitted.")
                        .num_args(0..)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .help("How many leading values to scan. Defaults to all of them.")
                        .value_hint(ValueHint::Other),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}

/// Resolve the configuration for a parsed command line.
pub fn config_from_matches(matches: &ArgMatches) -> Result<DrillsConfig> {
    let config_path = matches.get_one::<PathBuf>("config");
    let mut config = DrillsConfig::load(config_path.map(PathBuf::as_path))?;
    if matches.get_flag("quiet") {
        config.show_prompts = false;
    }
    Ok(config)
}

/// Run the selected exercise against `input` and `output`.
pub fn dispatch<R: BufRead, W: Write>(matches: &ArgMatches, input: R, output: W) -> Result<()> {
    let (name, sub_m) = matches
        .subcommand()
        .ok_or_else(|| anyhow::anyhow!("no exercise selected"))?;
    let config = config_from_matches(sub_m)?;
    log::debug!("[Drills] Running {}", name);

    match name {
        "sort" => {
            let numbers: Vec<String> = sub_m
                .get_many::<String>("numbers")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default();
            commands::sort::run(&config, &numbers, input, output)
        }
        "sign" => {
            let value = sub_m.get_one::<String>("value").map(String::as_str);
            commands::sign::run(&config, value, input, output).map(|_| ())
        }
        "sequence" => {
            let row_width = sub_m.get_one::<usize>("row_width").copied();
            commands::sequence::run(&config, row_width, output)
        }
        "matrix-add" => commands::matrix::run(&config, input, output).map(|_| ()),
        "smallest" => {
            let values: Vec<String> = sub_m
                .get_many::<String>("values")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default();
            let size = sub_m.get_one::<String>("size").map(String::as_str);
            commands::smallest::run(&values, size, output).map(|_| ())
        }
        other => anyhow::bail!("unknown exercise: {}", other),
    }
}

/// Entry point used by the binary: stdin in, stdout out.
pub fn run_stdio(matches: &ArgMatches) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    dispatch(matches, stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str], stdin: &str) -> Result<String> {
        let matches = build_cli().try_get_matches_from(args)?;
        let mut out = Vec::new();
        dispatch(&matches, Cursor::new(stdin.to_string()), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn command_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn sort_accepts_negative_arguments() {
        assert_eq!(run_args(&["drills", "sort", "2", "-7", "0"], "").unwrap(), "-7 0 2\n");
    }

    #[test]
    fn sort_requires_three_arguments() {
        assert!(build_cli()
            .try_get_matches_from(["drills", "sort", "1", "2"])
            .is_err());
    }

    #[test]
    fn quiet_flag_after_subcommand() {
        let out = run_args(&["drills", "sign", "-q"], "-4\n").unwrap();
        assert_eq!(out, "The number -4 is Negative\n");
    }

    #[test]
    fn smallest_with_size() {
        let out = run_args(&["drills", "smallest", "--size", "3", "9", "4", "6", "-1"], "").unwrap();
        assert_eq!(out, "The smallest number is at index 1\n");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = run_args(&["drills", "sequence", "-c", "/nonexistent/drills.json"], "");
        assert!(err.is_err());
    }
}
