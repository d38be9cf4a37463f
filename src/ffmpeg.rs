use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::HlsError;

pub mod encoder;
pub mod probe;

#[derive(Clone, Debug, PartialEq)]
pub struct FFmpeg {
    pub prober: PathBuf,
    pub encoder: PathBuf,
}

impl Default for FFmpeg {
    fn default() -> Self {
        FFmpeg::new("ffprobe", "ffmpeg")
    }
}

impl FFmpeg {
    pub fn new<P: Into<PathBuf>, E: Into<PathBuf>>(prober: P, encoder: E) -> Self {
        FFmpeg {
            prober: prober.into(),
            encoder: encoder.into(),
        }
    }

    /// `FFPROBE` and `FFMPEG` override the executables found on `PATH`.
    pub fn from_env() -> Self {
        let defaults = FFmpeg::default();
        FFmpeg {
            prober: env::var_os("FFPROBE").map(PathBuf::from).unwrap_or(defaults.prober),
            encoder: env::var_os("FFMPEG").map(PathBuf::from).unwrap_or(defaults.encoder),
        }
    }

    pub fn is_installed(&self) -> Result<(), HlsError> {
        for tool in [&self.prober, &self.encoder] {
            if !runs(tool) {
                return Err(HlsError::ToolMissing { tool: tool.clone() });
            }
        }
        Ok(())
    }
}

fn runs(tool: &Path) -> bool {
    let cmd = Command::new(tool)
        .arg("-version")
        .stdin(Stdio::null())
        .output();
    match cmd {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}
