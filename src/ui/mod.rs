/// UI building blocks for the gallery window
///
/// Every view function renders nothing when the data it needs is missing,
/// so a stale selection or an empty banner never breaks the whole window.

pub mod card;
pub mod detail;
pub mod search_bar;
pub mod status;

use std::collections::{HashMap, HashSet};

use iced::widget::{container, image, scrollable};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::state::data::ImageRecord;
use crate::Message;

/// Thumbnail of a record, keyed by hash in the window
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(image::Handle),
    Failed,
}

impl Thumbnail {
    /// Turn the outcome of a background fetch into something the view can draw
    pub fn from_fetch(hash: &str, result: Result<Vec<u8>, String>) -> Self {
        match result {
            Ok(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                log::debug!("No image for {}: {}", hash, err);
                Thumbnail::Failed
            }
        }
    }
}

/// Drop thumbnails whose record is no longer loaded
pub fn retain_loaded(thumbnails: &mut HashMap<String, Thumbnail>, images: &[ImageRecord]) {
    let loaded: HashSet<&str> = images.iter().map(|image| image.hash.as_str()).collect();
    let before = thumbnails.len();
    thumbnails.retain(|hash, _| loaded.contains(hash.as_str()));
    if thumbnails.len() < before {
        log::debug!("Dropped {} stale thumbnails", before - thumbnails.len());
    }
}

/// Scrollable grid of image cards
pub fn grid<'a>(images: &'a [ImageRecord], thumbnails: &'a HashMap<String, Thumbnail>) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = images
        .iter()
        .map(|image| card::view(image, thumbnails.get(&image.hash)))
        .collect();

    scrollable(
        container(Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0))
            .padding(4)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fallback::fallback_records;

    #[test]
    fn test_retain_loaded_drops_stale_hashes() {
        let images = fallback_records();
        let mut thumbnails = HashMap::new();
        thumbnails.insert(images[0].hash.clone(), Thumbnail::Failed);
        thumbnails.insert("from-another-folder".to_string(), Thumbnail::Loading);

        retain_loaded(&mut thumbnails, &images);

        assert_eq!(thumbnails.len(), 1);
        assert!(thumbnails.contains_key(&images[0].hash));
    }

    #[test]
    fn test_retain_loaded_with_no_images_empties_map() {
        let mut thumbnails = HashMap::new();
        thumbnails.insert("old".to_string(), Thumbnail::Failed);

        retain_loaded(&mut thumbnails, &[]);
        assert!(thumbnails.is_empty());
    }

    #[test]
    fn test_from_fetch_maps_errors_to_failed() {
        let failed = Thumbnail::from_fetch("hash-x", Err("HTTP 404".to_string()));
        assert!(matches!(failed, Thumbnail::Failed));

        let ready = Thumbnail::from_fetch("hash-x", Ok(vec![0u8; 128]));
        assert!(matches!(ready, Thumbnail::Ready(_)));
    }
}
