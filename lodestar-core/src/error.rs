use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum Error {
    /// The root/global namespace cannot be mounted
    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),

    /// A mount manifest could not be read or parsed
    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
