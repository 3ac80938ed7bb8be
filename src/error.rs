use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Insufficient configuration: {0}")]
    Configuration(String),

    #[error("Could not resolve path: {}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid ignore pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Could not enumerate {}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Generated content for `{0}` cannot be encoded as UTF-8")]
    Encoding(String),

    #[error("Could not write `{target}`")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },
}
