//! Command-line options for the `py2c` binary
//!
//! `PY2C_LOG` overrides the verbosity switches.

use clap::{crate_description, crate_name, crate_version, Arg, ArgMatches, Command};
use simplelog::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable holding a log level name
pub const LOG_ENV: &str = "PY2C_LOG";

/// Where the source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: Input,
    pub log_level: LevelFilter,
}

pub fn cli() -> Command<'static> {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("input")
                .required(true)
                .help("Source file to translate, or '-' for standard input"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .takes_value(false)
                .help("Log each pipeline stage"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .takes_value(false)
                .conflicts_with("verbose")
                .help("Disable logging"),
        )
}

impl Options {
    pub fn from_matches(matches: &ArgMatches, env_level: Option<&str>) -> Result<Self, String> {
        let input = match matches.value_of("input") {
            Some("-") => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
            None => return Err("No input file provided".to_string()),
        };

        let log_level = match env_level {
            Some(level) => LevelFilter::from_str(level.trim())
                .map_err(|_| format!("Invalid {} value '{}'", LOG_ENV, level))?,
            None if matches.is_present("verbose") => LevelFilter::Debug,
            None if matches.is_present("quiet") => LevelFilter::Off,
            None => LevelFilter::Warn,
        };

        Ok(Options { input, log_level })
    }
}
