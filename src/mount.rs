//! Mount target for rendered frames
//!
//! Frames go to stdout unless a file is named. A named path must already
//! exist; a missing target is reported and nothing is rendered. Any other
//! problem with an existing path surfaces when it is opened.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWrite;

/// Writer frames are rendered into
pub type MountWriter = Box<dyn AsyncWrite + Unpin + Send>;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("Mount target '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open mount target '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the session renders its frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountTarget {
    Stdout,
    /// An existing path, truncated when mounted
    File(PathBuf),
}

impl MountTarget {
    /// Resolve the optional path given on the command line
    ///
    /// # Arguments
    /// * `path` - File to render into, or `None` for stdout
    ///
    /// # Returns
    /// The target, or [`MountError::NotFound`] if nothing exists at the path
    pub fn resolve(path: Option<&Path>) -> Result<Self, MountError> {
        match path {
            None => Ok(Self::Stdout),
            Some(path) if path.exists() => Ok(Self::File(path.to_path_buf())),
            Some(path) => Err(MountError::NotFound(path.to_path_buf())),
        }
    }

    /// Open the target for writing
    pub async fn open(&self) -> Result<MountWriter, MountError> {
        match self {
            Self::Stdout => Ok(Box::new(tokio::io::stdout())),
            Self::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .open(path)
                    .await
                    .map_err(|source| MountError::Open {
                        path: path.clone(),
                        source,
                    })?;
                Ok(Box::new(file))
            }
        }
    }
}
