use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::resolution::Resolution;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rendition {
    pub name: &'static str,
    pub scale: Resolution,
}

/// Encoded one after another, largest first.
pub const RENDITIONS: &[Rendition] = &[
    Rendition { name: "1080p", scale: Resolution { width: 1920, height: 1080 } },
    Rendition { name: "720p", scale: Resolution { width: 1280, height: 720 } },
    Rendition { name: "480p", scale: Resolution { width: 854, height: 480 } },
];

impl Rendition {
    pub fn directory(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.name)
    }

    pub fn playlist_path(&self, output_root: &Path) -> PathBuf {
        self.directory(output_root).join(format!("variant_{}.m3u8", self.name))
    }

    pub fn scale_filter(&self) -> String {
        format!("scale={}", self.scale)
    }
}

impl Display for Rendition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
