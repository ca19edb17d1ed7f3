//! Tone-pair catalog: entry types and the JSON file store

mod entry;
mod store;

pub use entry::{ToneCatalogEntry, ToneEntryDraft, MAX_LABEL_LEN};
pub use store::{CatalogStore, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
