use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::HlsError;
use crate::resolution::Resolution;
use super::FFmpeg;

fn probe_args(path: &Path) -> Vec<PathBuf> {
    fn pbs(s: &str) -> PathBuf { PathBuf::from(s) }

    vec![
        pbs("-v"), pbs("error"),
        pbs("-select_streams"), pbs("v:0"),
        pbs("-show_entries"), pbs("stream=width,height"),
        pbs("-of"), pbs("csv=s=x:p=0"),
        PathBuf::from(path),
    ]
}

/// Runs the prober and returns its trimmed `WxH` report, stdout and stderr
/// combined.
pub fn probe_resolution_text(ffmpeg: &FFmpeg, path: &Path) -> Result<String, HlsError> {
    let output = Command::new(&ffmpeg.prober)
        .args(probe_args(path))
        .stdin(Stdio::null())
        .output()
        .map_err(|err| HlsError::for_probe(path, &format!("error running {:?}: {}", ffmpeg.prober, err)))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(HlsError::for_probe(path, &match output.status.code() {
            Some(code) => format!("{:?} exited with {}: {}", ffmpeg.prober, code, combined.trim()),
            None => format!("{:?} did not exit successfully.", ffmpeg.prober),
        }));
    }

    let text = combined.trim();
    if text.is_empty() {
        return Err(HlsError::for_probe(path, "unable to determine resolution from prober output"));
    }
    debug!(input = ?path, probe = text, "probed resolution");
    Ok(String::from(text))
}

pub fn probe_resolution(ffmpeg: &FFmpeg, path: &Path) -> Result<Resolution, HlsError> {
    probe_resolution_text(ffmpeg, path)?.parse()
}
