use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::HlsError;
use crate::fstools::{classify_path, DirEntryCategory};

/// Makes sure the output root exists before any rendition is encoded.
///
/// Existing content is never removed. An existing path that is not a
/// directory is accepted with a warning; the first rendition will fail on it.
pub fn ensure_output_root(path: &Path) -> Result<(), HlsError> {
    match classify_path(path).map_err(|err| HlsError::for_directory(path, err))? {
        DirEntryCategory::DoesNotExist => {
            fs::create_dir_all(path).map_err(|err| HlsError::for_directory(path, err))?;
            info!(output = ?path, "created output directory");
        },
        DirEntryCategory::Directory => debug!(output = ?path, "reusing output directory"),
        DirEntryCategory::RegularFile | DirEntryCategory::Other => {
            warn!(output = ?path, "output path exists but is not a directory")
        },
    }
    Ok(())
}
