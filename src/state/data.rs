/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the record loader and the UI layer.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Represents a single uploaded image, as written to a record shard
///
/// Records are immutable once loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Display name (e.g., "test2.b9de6437.jpg"), not guaranteed unique
    pub filename: String,
    /// Full-resolution asset URL
    pub url: String,
    /// Thumbnail asset URL (may be empty)
    #[serde(default)]
    pub thumb_url: String,
    /// Upload time in Unix seconds
    /// Older uploader builds wrote this as `uploaded_at`
    #[serde(alias = "uploaded_at")]
    pub created_at: i64,
    /// Tags in display order, may contain empty strings
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form description, empty when absent
    #[serde(default)]
    pub desc: String,
    /// File size in kilobytes
    #[serde(default)]
    pub size_kb: f64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Content hash, the identity key of a record
    pub hash: String,
    /// Repository path written by the uploader (unused for display)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}

impl ImageRecord {
    /// Tags that are worth showing: empty and whitespace-only entries are skipped
    pub fn display_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| !tag.trim().is_empty())
    }

    /// URL to use for grid thumbnails, falls back to the full image
    pub fn thumbnail_url(&self) -> &str {
        if self.thumb_url.trim().is_empty() {
            &self.url
        } else {
            &self.thumb_url
        }
    }

    /// Size in megabytes with two decimals (e.g., "5.05 MB")
    pub fn size_label(&self) -> String {
        format_size_mb(self.size_kb)
    }

    /// Pixel dimensions (e.g., "4000 × 3000")
    pub fn dimensions_label(&self) -> String {
        format!("{} × {}", self.width, self.height)
    }

    /// Upload date in local time, used on grid cards
    pub fn date_label(&self) -> String {
        self.local_time()
            .map(|time| time.format("%Y/%m/%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Upload date and time in local time, used in the detail view
    pub fn datetime_label(&self) -> String {
        self.local_time()
            .map(|time| time.format("%Y/%m/%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    fn local_time(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp(self.created_at, 0).map(|utc| utc.with_timezone(&Local))
    }
}

/// Format a kilobyte count as megabytes with two decimals
pub fn format_size_mb(size_kb: f64) -> String {
    format!("{:.2} MB", size_kb / 1024.0)
}
