//! Command line parsing for the `spigot` binary.
//!
//! Usage: `spigot [DIGITS]`. A single optional positional argument; anything
//! that is not a non-negative integer is rejected before any work starts.

use spigot_api::ArgError;

use crate::config::DEFAULT_DIGIT_COUNT;

pub const USAGE: &str = "\
Usage: spigot [DIGITS]

Computes DIGITS decimal digits of pi (default 1000) in parallel and prints
them inside the ASCII-art template.

Options:
  -h, --help       Print this help
  -V, --version    Print version

Environment:
  SPIGOT_TEMPLATE  Template path (default: pi.txt)
  SPIGOT_WORKERS   Worker thread count (default: logical CPUs)
  SPIGOT_LOG_JSON  Emit logs as JSON when set to 1
  RUST_LOG         Log filter directives";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run { digits: u64 },
    Help,
    Version,
}

/// Parses the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    match args.as_slice() {
        [] => Ok(Command::Run {
            digits: DEFAULT_DIGIT_COUNT,
        }),
        [arg] => match arg.as_ref() {
            "-h" | "--help" => Ok(Command::Help),
            "-V" | "--version" => Ok(Command::Version),
            raw => parse_digit_count(raw).map(|digits| Command::Run { digits }),
        },
        more => Err(ArgError::TooManyArguments(more.len())),
    }
}

/// Parses a digit count. Range checks happen in the coordinator.
pub fn parse_digit_count(raw: &str) -> Result<u64, ArgError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgError::InvalidNumber(raw.to_string()))
}
