//! Command-line argument parsing for the rematch binary.
//!
//! This module defines the CLI interface (flags and options) and provides a
//! simple `parse()` helper that returns a populated `Config`. Usage errors
//! and `--help` are handled by clap itself: help exits 0, bad or missing
//! flags print a usage message to stderr and exit non-zero.

use clap::{Arg, ArgAction, ArgMatches, Command};
use rematch::{Config, FormatMode};

/// Build the clap Command describing rematch's CLI.
///
/// This is separated for testability and to support `--help` handling by
/// clap. Most consumers should call `parse()` instead.
pub fn build_cli() -> Command {
    Command::new("rematch")
        .about("Search for lines matching a regular expression in a file or standard input")
        .arg(
            Arg::new("regex")
                .short('r')
                .long("regex")
                .value_name("PATTERN")
                .num_args(1)
                .required(true)
                .help("Regular expression to search for"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .num_args(1)
                .help("File to search in. If not provided (or -), standard input is used"),
        )
        .arg(
            Arg::new("underscore")
                .short('u')
                .long("underscore")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["color", "machine"])
                .help("Print '^' markers under the matched text"),
        )
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["underscore", "machine"])
                .help("Highlight the matched text"),
        )
        .arg(
            Arg::new("machine")
                .short('m')
                .long("machine")
                .action(ArgAction::SetTrue)
                .overrides_with_all(["underscore", "color"])
                .help("Machine-readable output: line\\tstart\\tend\\tmatch, one line per match"),
        )
}

/// Map parsed matches to a `Config`.
///
/// The three format flags mutually override each other, so at most one is
/// set here; the last one specified on the command line wins.
pub fn config_from(matches: &ArgMatches) -> Config {
    let format = if matches.get_flag("machine") {
        FormatMode::Machine
    } else if matches.get_flag("color") {
        FormatMode::Color
    } else if matches.get_flag("underscore") {
        FormatMode::Underscore
    } else {
        FormatMode::Plain
    };

    Config {
        pattern: matches
            .get_one::<String>("regex")
            .cloned()
            .unwrap_or_default(),
        file: matches.get_one::<String>("file").cloned(),
        format,
    }
}

/// Parse CLI arguments into a `Config`. Exits via clap on usage errors
/// (non-zero) and on `--help` (zero).
pub fn parse() -> Config {
    config_from(&build_cli().get_matches())
}
