use tracing::info;

use crate::config::Config;
use crate::error::HlsError;
use crate::ffmpeg::probe::probe_resolution;
use crate::layout::ensure_output_root;
use crate::planner::encode_renditions;
use crate::rendition::RENDITIONS;

/// Probe and gate the source, prepare the output root, then encode every
/// rendition. The first error ends the run.
pub fn run(config: &Config) -> Result<(), HlsError> {
    let resolution = probe_resolution(&config.ffmpeg, &config.input)?;
    if !resolution.is_full_hd() {
        return Err(HlsError::ResolutionTooLow { resolution });
    }
    info!(input = ?config.input, %resolution, "source accepted");

    ensure_output_root(&config.output)?;
    encode_renditions(&config.ffmpeg, &config.input, &config.output, RENDITIONS)
}
