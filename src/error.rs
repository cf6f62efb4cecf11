use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while reading record files and thumbnails
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} returned a truncated body ({len} bytes)")]
    Truncated { url: String, len: usize },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("refusing to load shard with unsafe name {0:?}")]
    InvalidShardName(String),
}

pub type GalleryResult<T> = Result<T, GalleryError>;
