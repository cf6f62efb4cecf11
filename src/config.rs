use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::records::source::{DirSource, HttpSource, RecordSource};

/// Where the viewer looks when nothing is given on the command line
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Directory (or URL path segment) holding the record files
pub const RECORDS_PREFIX: &str = "records";

/// Record file listing every shard
pub const INDEX_NAME: &str = "index.json";

/// Delay between the last keystroke and the search
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Parser, Debug)]
#[command(version, about = "Browse and search images uploaded to a photo bed", long_about = None)]
pub struct Args {
    /// Site serving `/records/index.json` and its shards
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Read records from a local folder instead of the site
    #[arg(long, value_name = "PATH")]
    pub records_dir: Option<PathBuf>,

    /// Search delay after the last keystroke, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,
}

/// Where record files are read from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Http { base_url: String },
    Directory(PathBuf),
}

impl SourceConfig {
    /// Build the matching record source; HTTP sources share `client`
    pub fn build(&self, client: &reqwest::Client) -> Arc<dyn RecordSource> {
        match self {
            SourceConfig::Http { base_url } => Arc::new(HttpSource::new(client.clone(), base_url.clone())),
            SourceConfig::Directory(path) => Arc::new(DirSource::new(path.clone())),
        }
    }
}

/// Resolved viewer settings
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub source: SourceConfig,
    pub debounce: Duration,
}

impl From<Args> for GalleryConfig {
    fn from(args: Args) -> Self {
        let source = match args.records_dir {
            Some(path) => SourceConfig::Directory(path),
            None => SourceConfig::Http { base_url: args.base_url },
        };

        GalleryConfig {
            source,
            debounce: Duration::from_millis(args.debounce_ms),
        }
    }
}
