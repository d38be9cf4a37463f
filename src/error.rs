use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resolution::Resolution;

#[derive(Debug, Error)]
pub enum HlsError {
    #[error("unable to prepare output directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to probe {path:?}: {msg}")]
    Probe { path: PathBuf, msg: String },

    #[error("unable to parse resolution {text:?}: {msg}")]
    Parse { text: String, msg: String },

    #[error("resolution {resolution} is below the 1920x1080 minimum")]
    ResolutionTooLow { resolution: Resolution },

    #[error("error generating HLS variant {rendition}: {msg}")]
    Encode { rendition: String, msg: String },

    #[error("{tool:?} is not installed")]
    ToolMissing { tool: PathBuf },
}

impl HlsError {
    pub fn for_directory(path: &Path, source: io::Error) -> Self {
        HlsError::Directory {
            path: PathBuf::from(path),
            source,
        }
    }

    pub fn for_probe(path: &Path, msg: &str) -> Self {
        HlsError::Probe {
            path: PathBuf::from(path),
            msg: String::from(msg),
        }
    }

    pub fn for_parse(text: &str, msg: &str) -> Self {
        HlsError::Parse {
            text: String::from(text),
            msg: String::from(msg),
        }
    }

    pub fn for_rendition(rendition: &str, msg: &str) -> Self {
        HlsError::Encode {
            rendition: String::from(rendition),
            msg: String::from(msg),
        }
    }
}
