use clap::Parser;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use iced::widget::{column, container, text};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod error;
mod records;
mod state;
mod ui;

use config::{Args, GalleryConfig, SourceConfig};
use records::loader::LoadResult;
use records::source::RecordSource;
use records::thumbnail::fetch_image;
use state::debounce::{self, Debouncer, Ticket};
use state::gallery::{FilterCriteria, GalleryState};
use ui::Thumbnail;

/// Main application state
struct GalleryViewer {
    /// The loaded images and the applied filter
    gallery: GalleryState,
    /// What is typed in the search inputs (may be ahead of the applied filter)
    inputs: FilterCriteria,
    /// Collapses keystrokes into a single search
    debouncer: Debouncer,
    /// Shared HTTP client for records and thumbnails
    client: reqwest::Client,
    /// Where records are read from
    source: Arc<dyn RecordSource>,
    source_label: String,
    /// Thumbnails by hash, only for records that are currently loaded
    thumbnails: HashMap<String, Thumbnail>,
    /// Hash of the record shown in the detail view
    selected: Option<String>,
    /// Full-size picture of the selected record
    selected_full: Option<Thumbnail>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background load completed
    Loaded(LoadResult),
    NameChanged(String),
    TagChanged(String),
    DescChanged(String),
    /// Debounce timer for a search elapsed
    SearchElapsed(Ticket),
    /// Search button or Enter: filter right away
    Search,
    ClearSearch,
    Retry,
    DismissError,
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// Card clicked, carries the record hash
    ShowDetail(String),
    CloseDetail,
    ThumbnailLoaded(String, Result<Vec<u8>, String>),
    /// Full picture for the detail view, carries the record hash
    FullImageLoaded(String, Result<Vec<u8>, String>),
}

impl GalleryViewer {
    /// Create a new instance of the application and start loading records
    fn new(config: GalleryConfig) -> (Self, Task<Message>) {
        let client = reqwest::Client::new();
        let source = config.source.build(&client);
        let source_label = source.describe();

        let mut viewer = GalleryViewer {
            gallery: GalleryState::new(),
            inputs: FilterCriteria::default(),
            debouncer: Debouncer::new(config.debounce),
            client,
            source,
            source_label,
            thumbnails: HashMap::new(),
            selected: None,
            selected_full: None,
        };

        let task = viewer.start_load();
        (viewer, task)
    }

    /// Mark the gallery as loading and fetch records in the background
    fn start_load(&mut self) -> Task<Message> {
        Task::perform(self.gallery.start_load(Arc::clone(&self.source)), Message::Loaded)
    }

    /// Fetch thumbnails for records that don't have one yet
    fn load_thumbnails(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();

        for record in self.gallery.all_images() {
            if self.thumbnails.contains_key(&record.hash) {
                continue;
            }
            self.thumbnails.insert(record.hash.clone(), Thumbnail::Loading);

            let hash = record.hash.clone();
            tasks.push(Task::perform(
                fetch_image(self.client.clone(), record.thumbnail_url().to_string()),
                move |result| Message::ThumbnailLoaded(hash.clone(), result.map_err(|err| err.to_string())),
            ));
        }

        Task::batch(tasks)
    }

    /// Apply what is typed in the search inputs
    fn apply_search(&mut self) {
        self.gallery.apply_filter(self.inputs.clone());
    }

    /// Restart the debounce timer after a keystroke
    fn schedule_search(&mut self) -> Task<Message> {
        let ticket = self.debouncer.schedule();
        Task::perform(debounce::wait(self.debouncer.delay(), ticket), Message::SearchElapsed)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(result) => {
                self.gallery.finish_load(result);
                ui::retain_loaded(&mut self.thumbnails, self.gallery.all_images());
                self.load_thumbnails()
            }
            Message::NameChanged(value) => {
                self.inputs.name = value;
                self.schedule_search()
            }
            Message::TagChanged(value) => {
                self.inputs.tag = value;
                self.schedule_search()
            }
            Message::DescChanged(value) => {
                self.inputs.desc = value;
                self.schedule_search()
            }
            Message::SearchElapsed(ticket) => {
                if self.debouncer.fire(ticket) {
                    self.apply_search();
                }
                Task::none()
            }
            Message::Search => {
                self.debouncer.cancel();
                self.apply_search();
                Task::none()
            }
            Message::ClearSearch => {
                self.debouncer.cancel();
                self.inputs = FilterCriteria::default();
                self.gallery.clear_filter();
                Task::none()
            }
            Message::Retry => self.start_load(),
            Message::DismissError => {
                self.gallery.dismiss_error();
                Task::none()
            }
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select the records folder")
                    .pick_folder();

                match folder {
                    Some(path) => self.switch_source(SourceConfig::Directory(path)),
                    None => Task::none(),
                }
            }
            Message::ShowDetail(hash) => self.show_detail(hash),
            Message::CloseDetail => {
                self.selected = None;
                self.selected_full = None;
                Task::none()
            }
            Message::ThumbnailLoaded(hash, result) => {
                // The record may have been dropped by a reload in the meantime
                if let Some(slot) = self.thumbnails.get_mut(&hash) {
                    *slot = Thumbnail::from_fetch(&hash, result);
                }
                Task::none()
            }
            Message::FullImageLoaded(hash, result) => {
                if self.selected.as_deref() == Some(hash.as_str()) {
                    self.selected_full = Some(Thumbnail::from_fetch(&hash, result));
                }
                Task::none()
            }
        }
    }

    /// Open the detail view and download the full picture
    fn show_detail(&mut self, hash: String) -> Task<Message> {
        let Some(record) = self.gallery.find(&hash) else {
            return Task::none();
        };
        let url = record.url.clone();

        self.selected = Some(hash.clone());
        self.selected_full = Some(Thumbnail::Loading);

        Task::perform(fetch_image(self.client.clone(), url), move |result| {
            Message::FullImageLoaded(hash.clone(), result.map_err(|err| err.to_string()))
        })
    }

    /// Read records from somewhere else and reload
    fn switch_source(&mut self, source: SourceConfig) -> Task<Message> {
        self.source = source.build(&self.client);
        self.source_label = self.source.describe();
        self.selected = None;
        self.selected_full = None;
        self.thumbnails.clear();
        log::info!("📁 Switched record source to {}", self.source_label);
        self.start_load()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let body = if self.gallery.is_loading() {
            ui::status::notice("Loading images…")
        } else if self.gallery.filtered_images().is_empty() {
            ui::status::notice("No images match the current search.")
        } else {
            ui::grid(self.gallery.filtered_images(), &self.thumbnails)
        };

        let content = column![
            text("Photo Bed").size(32),
            ui::search_bar::view(&self.inputs, self.gallery.is_loading()),
            ui::status::stats_line(self.gallery.stats(), &self.source_label),
        ]
        .push_maybe(ui::status::error_banner(self.gallery.error_message()))
        .push(body)
        .spacing(16)
        .padding(24);

        let base: Element<Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let selected = self.selected.as_deref().and_then(|hash| self.gallery.find(hash));
        let thumbnail = self.selected.as_ref().and_then(|hash| self.thumbnails.get(hash));

        match ui::detail::view(selected, self.selected_full.as_ref(), thumbnail) {
            Some(panel) => ui::detail::modal(base, panel),
            None => base,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Directory for log files, created on demand
fn get_log_dir() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("photo-bed-viewer");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

/// Start file logging; the handle must stay alive for the whole run
fn start_logger() -> Option<LoggerHandle> {
    let log_dir = get_log_dir()?;

    let logger = match Logger::try_with_env_or_str("info, iced=error, wgpu_hal=error, wgpu_core=error") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Invalid log specification: {}", err);
            return None;
        }
    };

    let handle = logger
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename("photo-bed-viewer")
                .suffix("log")
                .suppress_timestamp(),
        )
        .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
        .duplicate_to_stderr(Duplicate::Warn)
        .start();

    match handle {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {}", err);
            None
        }
    }
}

fn main() -> iced::Result {
    let args = Args::parse();

    let _logger = start_logger();
    log::info!("🎨 Starting Photo Bed Viewer {}", env!("CARGO_PKG_VERSION"));

    let config = GalleryConfig::from(args);

    let result = iced::application("Photo Bed Viewer", GalleryViewer::update, GalleryViewer::view)
        .theme(GalleryViewer::theme)
        .centered()
        .run_with(move || GalleryViewer::new(config));

    log::info!("Shutting down.");
    result
}
