use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::HlsError;
use crate::rendition::Rendition;
use super::FFmpeg;

pub const AUDIO_CODEC: &str = "aac";
pub const AUDIO_BITRATE: &str = "192k";
pub const VIDEO_CODEC: &str = "h264";
pub const VIDEO_BITRATE: &str = "2M";
pub const SEGMENT_SECONDS: u32 = 10;
pub const PLAYLIST_SIZE: u32 = 6;

pub fn hls_args(input: &Path, rendition: &Rendition, output_root: &Path) -> Vec<PathBuf> {
    fn pbs(s: &str) -> PathBuf { PathBuf::from(s) }

    vec![
        pbs("-i"), PathBuf::from(input),
        pbs("-vf"), PathBuf::from(rendition.scale_filter()),
        pbs("-c:a"), pbs(AUDIO_CODEC),
        pbs("-b:a"), pbs(AUDIO_BITRATE),
        pbs("-c:v"), pbs(VIDEO_CODEC),
        pbs("-b:v"), pbs(VIDEO_BITRATE),
        pbs("-hls_time"), PathBuf::from(SEGMENT_SECONDS.to_string()),
        pbs("-hls_list_size"), PathBuf::from(PLAYLIST_SIZE.to_string()),
        // sliding window: segments that fall out of the playlist are removed
        pbs("-hls_flags"), pbs("delete_segments"),
        rendition.playlist_path(output_root),
    ]
}

/// Blocks until the encoder exits. The rendition directory must already exist.
pub fn encode_rendition(ffmpeg: &FFmpeg, input: &Path, rendition: &Rendition, output_root: &Path) -> Result<(), HlsError> {
    let args = hls_args(input, rendition, output_root);
    debug!(rendition = rendition.name, "{:?} {}", ffmpeg.encoder,
        args.iter().map(|s| format!("{:?}", s)).collect::<Vec<String>>().join(" "));

    let output = Command::new(&ffmpeg.encoder)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|err| HlsError::for_rendition(rendition.name, &format!("error executing {:?}: {}", ffmpeg.encoder, err)))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if let Some(last) = stderr.lines().rev().find(|l| !l.trim().is_empty()) {
        warn!(rendition = rendition.name, "{}", last.trim());
    }
    Err(HlsError::for_rendition(rendition.name, &match output.status.code() {
        Some(code) => format!("{:?} exited with {}", ffmpeg.encoder, code),
        None => format!("{:?} did not exit successfully.", ffmpeg.encoder),
    }))
}
