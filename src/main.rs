pub mod cli;
pub mod config;
pub mod error;
pub mod ffmpeg;
pub mod fstools;
pub mod layout;
pub mod logging;
pub mod packager;
pub mod planner;
pub mod rendition;
pub mod resolution;

#[cfg(test)]
mod testutil;

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};

use cli::{parse_cli, USAGE};
use ffmpeg::FFmpeg;
use logging::{LogSession, LOG_FILE};

fn main() -> ExitCode {
    let config = match parse_cli(env::args_os(), FFmpeg::from_env()) {
        Ok(Some(config)) => config,
        Ok(None) => {
            show_help();
            return ExitCode::SUCCESS;
        },
        Err(err) => err.exit(),
    };

    let _log = LogSession::open(Path::new("."), LOG_FILE);

    match config.ffmpeg.is_installed().and_then(|_| packager::run(&config)) {
        Ok(_) => {
            info!(output = ?config.output, "all HLS variants generated");
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

fn show_help() {
    let program = env::args().next().unwrap_or_else(|| String::from(env!("CARGO_PKG_NAME")));
    println!("Usage: {} {}", program, USAGE);
    println!("  -input <input_file>         Path to video file");
    println!("  -output <output_directory>  Path to output directory");
}
