use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a single conversion. The `Display` text is what
/// the user sees in the error dialog.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File path is empty")]
    EmptyPath,

    #[error("Please use a .zip file")]
    NotZip,

    #[error("File not found")]
    NotFound,

    #[error("Could not create folder {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Copy was interrupted: {0}")]
    Interrupted(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
