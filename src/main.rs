// py2c: translate a small Python-like language into C-like source

mod config;

use std::fs;
use std::io::{self, Read};
use std::process;

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use config::{Input, Options, LOG_ENV};

fn main() {
    let matches = config::cli().get_matches();
    let env_level = std::env::var(LOG_ENV).ok();

    let options = match Options::from_matches(&matches, env_level.as_deref()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(2);
        }
    };

    init_logger(options.log_level);

    let source = match read_source(&options.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match py2c::transpile(&source) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logger(level: LevelFilter) {
    let result = TermLogger::init(
        level,
        ConfigBuilder::new()
            .set_location_level(LevelFilter::Error)
            .set_time_level(LevelFilter::Off)
            .set_thread_level(LevelFilter::Off)
            .set_target_level(LevelFilter::Off)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    if let Err(e) = result {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn read_source(input: &Input) -> Result<String, String> {
    match input {
        Input::File(path) => fs::read_to_string(path)
            .map_err(|e| format!("Cannot read '{}': {}", path.display(), e)),
        Input::Stdin => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| format!("Cannot read standard input: {}", e))?;
            Ok(source)
        }
    }
}
