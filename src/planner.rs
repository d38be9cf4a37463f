use std::fs;
use std::path::Path;

use human_repr::HumanCount;
use kdam::{term, tqdm, BarExt};
use tracing::info;

use crate::error::HlsError;
use crate::ffmpeg::encoder::encode_rendition;
use crate::ffmpeg::FFmpeg;
use crate::fstools::directory_size;
use crate::rendition::Rendition;

/// Encodes every rendition in order, stopping at the first failure. Output
/// of renditions that already finished is left in place.
pub fn encode_renditions(ffmpeg: &FFmpeg, input: &Path, output_root: &Path, renditions: &[Rendition]) -> Result<(), HlsError> {
    term::init(false);
    let mut pbar = tqdm!(
        total = renditions.len(),
        desc = String::from("renditions"),
        position = 0,
        force_refresh = true
    );

    for (done, rendition) in renditions.iter().enumerate() {
        pbar.set_postfix(format!("{} ({})", rendition, rendition.scale));
        let _ = pbar.update_to(done);

        encode_one(ffmpeg, input, output_root, rendition)?;

        info!(
            %rendition,
            playlist = ?rendition.playlist_path(output_root),
            size = %directory_size(&rendition.directory(output_root)).human_count_bytes(),
            "generated HLS variant"
        );
    }

    let _ = pbar.update_to(renditions.len());
    Ok(())
}

fn encode_one(ffmpeg: &FFmpeg, input: &Path, output_root: &Path, rendition: &Rendition) -> Result<(), HlsError> {
    let dir = rendition.directory(output_root);
    fs::create_dir_all(&dir)
        .map_err(|err| HlsError::for_rendition(rendition.name, &format!("unable to create {:?}: {}", dir, err)))?;
    encode_rendition(ffmpeg, input, rendition, output_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogSession, LOG_FILE};
    use crate::rendition::RENDITIONS;
    use crate::testutil::{fake_tool, tool_lock};

    const RECORDING_ENCODER: &str = r#"
for last; do :; done
echo "$last" >> "$(dirname "$0")/calls.log"
case "$last" in *720p*) [ -n "$FAIL_720" ] && exit 1 ;; esac
echo '#EXTM3U' > "$last"
echo 'segment' > "$(dirname "$last")/variant0.ts"
"#;

    fn calls(dir: &Path) -> Vec<String> {
        fs::read_to_string(dir.join("calls.log")).unwrap_or_default()
            .lines().map(String::from).collect()
    }

    #[test]
    fn test_all_renditions() {
        let _lock = tool_lock();
        let dir = tempfile::tempdir().unwrap();
        let encoder = fake_tool(dir.path(), "ffmpeg", &RECORDING_ENCODER.replace("$FAIL_720", ""));
        let root = dir.path().join("out");
        fs::create_dir(&root).unwrap();

        encode_renditions(&FFmpeg::new("ffprobe", encoder), Path::new("in.mkv"), &root, RENDITIONS).unwrap();

        for name in ["1080p", "720p", "480p"] {
            assert!(root.join(name).join(format!("variant_{}.m3u8", name)).is_file());
        }
        let expected: Vec<String> = RENDITIONS.iter()
            .map(|r| r.playlist_path(&root).to_string_lossy().into_owned())
            .collect();
        assert_eq!(calls(dir.path()), expected);
    }

    #[test]
    fn test_rerun_over_previous_output() {
        let _lock = tool_lock();
        let dir = tempfile::tempdir().unwrap();
        let encoder = fake_tool(dir.path(), "ffmpeg", &RECORDING_ENCODER.replace("$FAIL_720", ""));
        let root = dir.path().join("out");
        let ffmpeg = FFmpeg::new("ffprobe", encoder);

        encode_renditions(&ffmpeg, Path::new("in.mkv"), &root, RENDITIONS).unwrap();
        encode_renditions(&ffmpeg, Path::new("in.mkv"), &root, RENDITIONS).unwrap();
        assert_eq!(calls(dir.path()).len(), 6);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let _lock = tool_lock();
        let dir = tempfile::tempdir().unwrap();
        let encoder = fake_tool(dir.path(), "ffmpeg", &RECORDING_ENCODER.replace("$FAIL_720", "fail"));
        let root = dir.path().join("out");

        let logs = tempfile::tempdir().unwrap();
        let result = {
            let _log = LogSession::open(logs.path(), LOG_FILE);
            encode_renditions(&FFmpeg::new("ffprobe", encoder), Path::new("in.mkv"), &root, RENDITIONS)
        };
        match result {
            Err(HlsError::Encode { rendition, .. }) => assert_eq!(rendition, "720p"),
            other => panic!("unexpected {:?}", other),
        }

        // reporting the failure is left to the caller, so it is logged once
        let logged = fs::read_to_string(logs.path().join(LOG_FILE)).unwrap();
        assert!(logged.contains("generated HLS variant"));
        assert!(!logged.contains("error generating HLS variant"));

        assert_eq!(calls(dir.path()).len(), 2);
        assert!(root.join("1080p/variant_1080p.m3u8").is_file());
        assert!(!root.join("480p").exists());
    }

    #[test]
    fn test_output_root_is_a_file() {
        let _lock = tool_lock();
        let dir = tempfile::tempdir().unwrap();
        let encoder = fake_tool(dir.path(), "ffmpeg", &RECORDING_ENCODER.replace("$FAIL_720", ""));
        let root = dir.path().join("out");
        fs::write(&root, b"").unwrap();

        match encode_renditions(&FFmpeg::new("ffprobe", encoder), Path::new("in.mkv"), &root, RENDITIONS) {
            Err(HlsError::Encode { rendition, .. }) => assert_eq!(rendition, "1080p"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(calls(dir.path()).is_empty());
    }
}
