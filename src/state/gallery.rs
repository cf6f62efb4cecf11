use std::future::Future;
use std::sync::Arc;

use super::data::ImageRecord;
use crate::records::loader::{self, LoadResult};
use crate::records::source::RecordSource;

/// User-facing notice shown while the sample records are on screen
pub const FALLBACK_NOTICE: &str =
    "Failed to load gallery data. Showing sample images instead, check the network connection and retry.";

/// Search criteria, one per searchable field
///
/// An empty field places no constraint on the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub tag: String,
    pub desc: String,
}

impl FilterCriteria {
    /// True when no field constrains the result
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.tag.is_empty() && self.desc.is_empty()
    }

    /// Lowercase every field once so matching can compare against lowercase records
    fn lowercased(&self) -> FilterCriteria {
        FilterCriteria {
            name: self.name.to_lowercase(),
            tag: self.tag.to_lowercase(),
            desc: self.desc.to_lowercase(),
        }
    }
}

/// Counters shown in the stats line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryStats {
    pub total_count: usize,
    pub filtered_count: usize,
    /// Sum over every loaded record, independent of the filter
    pub total_size_kb: f64,
}

/// Return the records matching every non-empty criterion, in their original order
///
/// Matching is a case-insensitive substring test:
/// - `name` against the filename
/// - `tag` against any single tag
/// - `desc` against the description (an empty description never matches)
pub fn filter_images(all: &[ImageRecord], criteria: &FilterCriteria) -> Vec<ImageRecord> {
    if criteria.is_empty() {
        return all.to_vec();
    }

    let criteria = criteria.lowercased();
    all.iter()
        .filter(|image| matches(image, &criteria))
        .cloned()
        .collect()
}

/// `criteria` must already be lowercase
fn matches(image: &ImageRecord, criteria: &FilterCriteria) -> bool {
    let name_match = criteria.name.is_empty() || image.filename.to_lowercase().contains(&criteria.name);

    let tag_match = criteria.tag.is_empty()
        || image
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&criteria.tag));

    let desc_match = criteria.desc.is_empty() || image.desc.to_lowercase().contains(&criteria.desc);

    name_match && tag_match && desc_match
}

/// The gallery as seen by the UI
///
/// The window owns the only instance. It is mutated through `start_load`,
/// `finish_load` and `apply_filter`, never field by field.
#[derive(Debug, Default)]
pub struct GalleryState {
    /// Every loaded record, newest first
    all_images: Vec<ImageRecord>,
    /// Records matching `criteria`, same order as `all_images`
    filtered_images: Vec<ImageRecord>,
    criteria: FilterCriteria,
    loading: bool,
    /// Non-empty only while fallback records are in use
    error_message: String,
}

impl GalleryState {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_images(&self) -> &[ImageRecord] {
        &self.all_images
    }

    pub fn filtered_images(&self) -> &[ImageRecord] {
        &self.filtered_images
    }

    #[cfg(test)]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Hide the error banner (fallback records stay on screen)
    pub fn dismiss_error(&mut self) {
        self.error_message.clear();
    }

    /// Find a record by its hash
    pub fn find(&self, hash: &str) -> Option<&ImageRecord> {
        self.all_images.iter().find(|image| image.hash == hash)
    }

    /// Mark a load as started
    fn begin_load(&mut self) {
        self.loading = true;
        self.error_message.clear();
    }

    /// Install the outcome of a load
    ///
    /// Always clears the loading flag. The current criteria are re-applied so
    /// a reload does not discard what the user typed.
    pub fn finish_load(&mut self, result: LoadResult) {
        match result {
            LoadResult::Success(records) => {
                log::info!("📁 Gallery loaded with {} images", records.len());
                self.all_images = records;
            }
            LoadResult::Failure { reason, fallback } => {
                log::error!("❌ Gallery load failed, using sample records: {}", reason);
                self.all_images = fallback;
                self.error_message = FALLBACK_NOTICE.to_string();
            }
        }
        self.filtered_images = filter_images(&self.all_images, &self.criteria);
        self.loading = false;
    }

    /// Start a load against `source`
    ///
    /// Marks the gallery as loading and returns the fetch to run in the
    /// background. Its result must be handed to `finish_load`, which is the
    /// only place the loading flag is cleared.
    pub fn start_load(&mut self, source: Arc<dyn RecordSource>) -> impl Future<Output = LoadResult> + Send + 'static {
        self.begin_load();
        async move { loader::load_image_data(source.as_ref()).await }
    }

    /// Store new criteria and recompute the filtered view
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.filtered_images = filter_images(&self.all_images, &criteria);
        self.criteria = criteria;
        log::debug!(
            "🔍 Filter {:?} matched {} of {} images",
            self.criteria,
            self.filtered_images.len(),
            self.all_images.len()
        );
    }

    /// Reset every criterion and show all images again
    pub fn clear_filter(&mut self) {
        self.apply_filter(FilterCriteria::default());
    }

    pub fn stats(&self) -> GalleryStats {
        GalleryStats {
            total_count: self.all_images.len(),
            filtered_count: self.filtered_images.len(),
            total_size_kb: self.all_images.iter().map(|image| image.size_kb).sum(),
        }
    }
}
