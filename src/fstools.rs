use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, PartialEq)]
pub enum DirEntryCategory {
    DoesNotExist,
    RegularFile,
    Directory,
    Other,
}

pub fn classify_path(path: &Path) -> io::Result<DirEntryCategory> {
    match fs::metadata(path) {
        Ok(metadata) => {
            if metadata.is_file() {
                Ok(DirEntryCategory::RegularFile)
            } else if metadata.is_dir() {
                Ok(DirEntryCategory::Directory)
            } else {
                Ok(DirEntryCategory::Other)
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DirEntryCategory::DoesNotExist),
        Err(err) => Err(err),
    }
}

/// Sum of the sizes of the regular files directly inside `dir`.
pub fn directory_size(dir: &Path) -> u64 {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.metadata().ok())
            .filter(|m| m.is_file())
            .map(|m| m.len())
            .sum(),
        Err(_) => 0,
    }
}
