/// Gallery record loader
///
/// This module reads the record index, then every shard it lists, and
/// turns the result into a single newest-first collection.
/// Only a failing index is fatal to live data; a failing shard is skipped.

use std::collections::HashSet;

use crate::config::INDEX_NAME;
use crate::error::{GalleryError, GalleryResult};
use crate::state::data::ImageRecord;

use super::fallback::fallback_records;
use super::source::RecordSource;

/// Outcome of a gallery load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    /// Records from every shard that could be read, normalized
    Success(Vec<ImageRecord>),
    /// The index could not be read; `fallback` holds the sample records
    Failure {
        reason: String,
        fallback: Vec<ImageRecord>,
    },
}

impl LoadResult {
    /// Build a failure carrying the fixed sample records
    pub fn failure(reason: impl Into<String>) -> Self {
        LoadResult::Failure {
            reason: reason.into(),
            fallback: fallback_records(),
        }
    }
}

#[cfg(test)]
impl LoadResult {
    /// Records to display, whichever branch was taken
    pub fn records(&self) -> &[ImageRecord] {
        match self {
            LoadResult::Success(records) => records,
            LoadResult::Failure { fallback, .. } => fallback,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LoadResult::Success(_))
    }
}

/// Load every record reachable from the index of `source`
///
/// # Arguments
/// * `source` - Where `index.json` and the shards are read from
///
/// # Returns
/// * `LoadResult::Success` - Records from all readable shards, newest first
/// * `LoadResult::Failure` - The index failed; carries the sample records
pub async fn load_image_data(source: &dyn RecordSource) -> LoadResult {
    log::info!("🔍 Loading gallery records from {}", source.describe());

    let shard_names = match fetch_index(source).await {
        Ok(names) => names,
        Err(err) => {
            log::error!("Failed to load record index: {}", err);
            return LoadResult::failure(err.to_string());
        }
    };

    let mut records = Vec::new();
    let mut skipped = 0;
    for name in &shard_names {
        match fetch_shard(source, name).await {
            Ok(batch) => {
                log::debug!("Loaded {} records from {}", batch.len(), name);
                records.extend(batch);
            }
            Err(err) => {
                skipped += 1;
                log::warn!("⚠️  Skipping shard {}: {}", name, err);
            }
        }
    }

    let records = normalize(records);
    log::info!(
        "✅ Loaded {} records from {} shards ({} skipped)",
        records.len(),
        shard_names.len() - skipped,
        skipped
    );

    LoadResult::Success(records)
}

/// Read the list of shard names
async fn fetch_index(source: &dyn RecordSource) -> GalleryResult<Vec<String>> {
    let text = source.fetch_text(INDEX_NAME).await?;
    serde_json::from_str(&text).map_err(|source| GalleryError::Parse {
        name: INDEX_NAME.to_string(),
        source,
    })
}

/// Read a single shard
async fn fetch_shard(source: &dyn RecordSource, name: &str) -> GalleryResult<Vec<ImageRecord>> {
    if !is_safe_shard_name(name) {
        return Err(GalleryError::InvalidShardName(name.to_string()));
    }

    let text = source.fetch_text(name).await?;
    serde_json::from_str(&text).map_err(|source| GalleryError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Shard names must stay inside the records root
fn is_safe_shard_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty()
        && !name.starts_with('/')
        && !name.contains('\\')
        && !name.split('/').any(|part| part == "..")
}

/// Sort newest first and drop repeated hashes
///
/// The sort is stable, so records with the same timestamp keep shard order.
/// For a repeated hash the first record after sorting (the newest) wins.
pub fn normalize(mut records: Vec<ImageRecord>) -> Vec<ImageRecord> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut seen = HashSet::new();
    records.retain(|record| {
        if seen.insert(record.hash.clone()) {
            true
        } else {
            log::warn!("⚠️  Duplicate hash {} ({}), keeping the newest", record.hash, record.filename);
            false
        }
    });

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::GalleryState;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// In-memory source; missing names answer like an HTTP 404
    struct MemorySource {
        files: HashMap<String, String>,
    }

    impl MemorySource {
        fn new(files: &[(&str, String)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(name, body)| (name.to_string(), body.clone()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl RecordSource for MemorySource {
        fn describe(&self) -> String {
            "memory".to_string()
        }

        async fn fetch_text(&self, name: &str) -> GalleryResult<String> {
            self.files.get(name).cloned().ok_or_else(|| GalleryError::Status {
                url: format!("memory://records/{}", name),
                status: 404,
            })
        }
    }

    fn shard(entries: &[(&str, i64)]) -> String {
        let records: Vec<String> = entries
            .iter()
            .map(|(hash, created_at)| {
                format!(
                    r#"{{"filename": "{hash}.jpg", "url": "https://cdn.example.com/{hash}.jpg",
                        "thumb_url": "", "created_at": {created_at}, "tags": [], "desc": "",
                        "size_kb": 10, "width": 1, "height": 1, "hash": "{hash}"}}"#
                )
            })
            .collect();
        format!("[{}]", records.join(","))
    }

    fn hashes(records: &[ImageRecord]) -> Vec<&str> {
        records.iter().map(|record| record.hash.as_str()).collect()
    }

    #[tokio::test]
    async fn test_missing_shard_is_partial_success() {
        let source = MemorySource::new(&[
            ("index.json", r#"["a.json", "b.json"]"#.to_string()),
            ("a.json", shard(&[("a1", 10), ("a2", 20)])),
        ]);

        let mut state = GalleryState::new();
        let pending = state.start_load(Arc::new(source));
        assert!(state.is_loading());
        state.finish_load(pending.await);

        assert_eq!(hashes(state.all_images()), vec!["a2", "a1"]);
        assert!(state.error_message().is_empty());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_missing_index_falls_back() {
        let source = MemorySource::new(&[("a.json", shard(&[("a1", 10)]))]);

        let mut state = GalleryState::new();
        let pending = state.start_load(Arc::new(source));
        assert!(state.is_loading());
        state.finish_load(pending.await);

        assert_eq!(state.all_images(), fallback_records().as_slice());
        assert!(!state.error_message().is_empty());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_malformed_index_falls_back() {
        let source = MemorySource::new(&[("index.json", "{not json".to_string())]);

        let result = load_image_data(&source).await;
        match result {
            LoadResult::Failure { reason, fallback } => {
                assert!(reason.contains("index.json"));
                assert_eq!(fallback, fallback_records());
            }
            LoadResult::Success(_) => panic!("malformed index must not succeed"),
        }
    }

    #[tokio::test]
    async fn test_malformed_shard_is_skipped() {
        let source = MemorySource::new(&[
            ("index.json", r#"["good.json", "bad.json"]"#.to_string()),
            ("good.json", shard(&[("g1", 5)])),
            ("bad.json", r#"[{"filename": "x.jpg"}]"#.to_string()),
        ]);

        let result = load_image_data(&source).await;
        assert!(result.is_success());
        assert_eq!(hashes(result.records()), vec!["g1"]);
    }

    #[tokio::test]
    async fn test_shards_merge_newest_first() {
        let source = MemorySource::new(&[
            ("index.json", r#"["2025-07.json", "2025-08.json"]"#.to_string()),
            ("2025-07.json", shard(&[("old", 100), ("mid", 300)])),
            ("2025-08.json", shard(&[("new", 500), ("older", 50)])),
        ]);

        let result = load_image_data(&source).await;
        let records = result.records();
        assert_eq!(hashes(records), vec!["new", "mid", "old", "older"]);
        assert!(records.windows(2).all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn test_unsafe_shard_names_are_skipped() {
        let source = MemorySource::new(&[
            ("index.json", r#"["../secret.json", "/etc/passwd", "", "ok.json"]"#.to_string()),
            ("ok.json", shard(&[("ok", 1)])),
            ("../secret.json", shard(&[("secret", 2)])),
        ]);

        let result = load_image_data(&source).await;
        assert_eq!(hashes(result.records()), vec!["ok"]);
    }

    #[tokio::test]
    async fn test_empty_index_loads_nothing() {
        let source = MemorySource::new(&[("index.json", "[]".to_string())]);

        let result = load_image_data(&source).await;
        assert_eq!(result, LoadResult::Success(Vec::new()));
    }

    #[test]
    fn test_normalize_keeps_newest_duplicate() {
        let mut first: ImageRecord = fallback_records().remove(0);
        first.created_at = 10;
        let mut newer = first.clone();
        newer.created_at = 20;
        newer.filename = "renamed.jpg".to_string();

        let records = normalize(vec![first, newer]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "renamed.jpg");
    }

    #[test]
    fn test_normalize_is_stable_for_equal_timestamps() {
        let mut records = fallback_records();
        for record in &mut records {
            record.created_at = 1;
        }
        let expected = hashes(&records).iter().map(|h| h.to_string()).collect::<Vec<_>>();

        let normalized = normalize(records);
        assert_eq!(hashes(&normalized), expected);
    }
}
