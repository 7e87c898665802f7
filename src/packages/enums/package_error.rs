use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Packages directory not found.")]
    RootNotFound,
    #[error("Package not found: {0}")]
    PackageNotFound(String),
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid package path: {0}")]
    InvalidPath(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
