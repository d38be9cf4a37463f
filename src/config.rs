use std::path::PathBuf;

use crate::ffmpeg::FFmpeg;

/// Everything a run needs, built once from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub ffmpeg: FFmpeg,
}

impl Config {
    /// `None` when either path is missing or empty.
    pub fn from_args(input: Option<String>, output: Option<String>, ffmpeg: FFmpeg) -> Option<Self> {
        match (input, output) {
            (Some(input), Some(output)) if !input.is_empty() && !output.is_empty() => Some(Config {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
                ffmpeg,
            }),
            _ => None,
        }
    }
}
