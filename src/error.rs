use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvLayerError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}
