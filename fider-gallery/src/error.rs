use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("Failed to write gallery to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write gallery to stdout: {0}")]
    Stdout(#[source] io::Error),
}
