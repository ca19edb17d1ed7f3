// src/catalog/store.rs
//
// JSON file backed tone catalog with create/read/update/delete.
// Every mutation is written through before it returns.

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::entry::{ToneCatalogEntry, ToneEntryDraft};
use crate::error::{Error, Result};

/// Page size used when the caller passes 0
pub const DEFAULT_PAGE_LIMIT: usize = 100;
/// Largest page a caller may request
pub const MAX_PAGE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    next_id: u64,
    entries: Vec<ToneCatalogEntry>,
}

/// Persistent catalog of tone pairs, ordered by id
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    data: CatalogFile,
}

impl CatalogStore {
    /// Open a catalog file; a missing file is an empty catalog
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                CatalogFile::default()
            } else {
                let mut data: CatalogFile = serde_json::from_str(&text)?;
                data.entries.sort_by_key(|e| e.id);
                let max_id = data.entries.iter().map(|e| e.id).max().unwrap_or(0);
                data.next_id = data.next_id.max(max_id + 1);
                data
            }
        } else {
            CatalogFile::default()
        };

        debug!("Opened catalog {} with {} entries", path.display(), data.entries.len());
        Ok(Self { path, data })
    }

    /// `<data dir>/twotone/catalog.json`, falling back to the working directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("twotone"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("catalog.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in id order
    pub fn entries(&self) -> &[ToneCatalogEntry] {
        &self.data.entries
    }

    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }

    /// One page of entries; `limit` 0 means the default, large values are capped
    pub fn list(&self, skip: usize, limit: usize) -> &[ToneCatalogEntry] {
        let limit = match limit {
            0 => DEFAULT_PAGE_LIMIT,
            l => l.min(MAX_PAGE_LIMIT),
        };
        let entries = &self.data.entries;
        let start = skip.min(entries.len());
        let end = start.saturating_add(limit).min(entries.len());
        &entries[start..end]
    }

    pub fn get(&self, id: u64) -> Result<&ToneCatalogEntry> {
        self.data
            .entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(Error::EntryNotFound(id))
    }

    pub fn create(&mut self, draft: ToneEntryDraft) -> Result<ToneCatalogEntry> {
        let draft = draft.validated()?;
        let id = self.data.next_id.max(1);
        let entry = ToneCatalogEntry {
            id,
            label: draft.label,
            tone1_hz: draft.tone1_hz,
            tone2_hz: draft.tone2_hz,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.data.next_id = id + 1;
        self.data.entries.push(entry.clone());
        self.save()?;

        info!(
            "Created tone entry {} '{}' ({} Hz / {} Hz)",
            entry.id, entry.label, entry.tone1_hz, entry.tone2_hz
        );
        Ok(entry)
    }

    pub fn update(&mut self, id: u64, draft: ToneEntryDraft) -> Result<ToneCatalogEntry> {
        let draft = draft.validated()?;
        let entry = self
            .data
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::EntryNotFound(id))?;

        entry.label = draft.label;
        entry.tone1_hz = draft.tone1_hz;
        entry.tone2_hz = draft.tone2_hz;
        entry.updated_at = Some(Utc::now());
        let updated = entry.clone();
        self.save()?;

        info!("Updated tone entry {} '{}'", updated.id, updated.label);
        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> Result<ToneCatalogEntry> {
        let pos = self
            .data
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::EntryNotFound(id))?;
        let removed = self.data.entries.remove(pos);
        self.save()?;

        info!("Deleted tone entry {} '{}'", removed.id, removed.label);
        Ok(removed)
    }

    /// Write the catalog through a sibling temp file and rename it into place
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&tmp_path, text)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
