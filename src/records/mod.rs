/// Gallery record loading module
///
/// This module handles:
/// - Reading record files over HTTP or from a local folder
/// - Loading the index and its shards into one collection
/// - The sample records used when the index is unreachable
/// - Downloading thumbnails and full-size pictures

pub mod fallback;
pub mod loader;
pub mod source;
pub mod thumbnail;
