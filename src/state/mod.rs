/// State management module
///
/// This module handles all application state, including:
/// - Image records and display helpers (data.rs)
/// - The gallery collection, filter and stats (gallery.rs)
/// - Debouncing of search-as-you-type (debounce.rs)

pub mod data;
pub mod debounce;
pub mod gallery;
