//! The "Volumes" greentext publishing feature.
//!
//! Raw pasted text goes through [`parse_greentext`] once at creation time and
//! is stored denormalized on the [`Volume`]. [`export_volumes`] turns a set of
//! volumes back into a single plain-text document and [`search_volumes`]
//! powers the admin search box.

mod error;
mod exporter;
mod parser;
mod requests;
mod search;
mod types;

pub use error::VolumeError;
pub use exporter::export_volumes;
pub use parser::{parse_blessing, parse_greentext, validate_parsed, ParsedVolume};
pub use requests::{CreateVolumeRequest, RateVolumeRequest, SearchQuery, UpdateVolumeRequest};
pub use search::{
    excerpt_around, highlight_query, search_volumes, HighlightPart, SearchField, SearchMatch,
    SearchResult, EXCERPT_MAX_LEN,
};
pub use types::{Blessing, CatalogueEntry, Rating, Volume, VolumeStatus};
