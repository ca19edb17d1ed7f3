// src/core/analysis/matching.rs
//
// Tolerance-window lookup of a detected tone pair in the catalog.

use crate::catalog::ToneCatalogEntry;
use crate::config::DetectorConfig;

/// Matches detected frequency pairs against catalog entries
#[derive(Debug, Clone)]
pub struct ToneMatcher {
    tolerance_hz: f64,
}

impl ToneMatcher {
    pub fn new(config: &DetectorConfig) -> Self {
        Self::with_tolerance(config.tolerance_hz)
    }

    pub fn with_tolerance(tolerance_hz: f64) -> Self {
        Self { tolerance_hz }
    }

    pub fn tolerance_hz(&self) -> f64 {
        self.tolerance_hz
    }

    /// First entry, in catalog order, with both tones inside the tolerance
    /// (boundary inclusive). Closer entries later in the list do not win.
    pub fn find_match<'a>(
        &self,
        tone1_hz: f64,
        tone2_hz: f64,
        catalog: &'a [ToneCatalogEntry],
    ) -> Option<&'a ToneCatalogEntry> {
        catalog.iter().find(|entry| {
            (tone1_hz - entry.tone1_hz).abs() <= self.tolerance_hz
                && (tone2_hz - entry.tone2_hz).abs() <= self.tolerance_hz
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: u64, tone1_hz: f64, tone2_hz: f64) -> ToneCatalogEntry {
        ToneCatalogEntry {
            id,
            label: format!("Entry {}", id),
            tone1_hz,
            tone2_hz,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_no_match_outside_tolerance() {
        let matcher = ToneMatcher::with_tolerance(2.0);
        let catalog = vec![entry(1, 1000.0, 1500.0), entry(2, 600.0, 900.0)];
        assert!(matcher.find_match(1003.0, 1500.0, &catalog).is_none());
        assert!(matcher.find_match(1000.0, 1497.5, &catalog).is_none());
        assert!(matcher.find_match(1000.0, 1500.0, &[]).is_none());
    }

    #[test]
    fn test_both_tones_must_match_same_entry() {
        let matcher = ToneMatcher::with_tolerance(2.0);
        let catalog = vec![entry(1, 1000.0, 900.0), entry(2, 600.0, 1500.0)];
        assert!(matcher.find_match(1000.0, 1500.0, &catalog).is_none());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let matcher = ToneMatcher::with_tolerance(2.0);
        let catalog = vec![entry(1, 1000.0, 1500.0)];
        let found = matcher.find_match(1002.0, 1498.0, &catalog);
        assert_eq!(found.map(|e| e.id), Some(1));
    }

    #[test]
    fn test_first_in_order_wins() {
        let matcher = ToneMatcher::with_tolerance(2.0);
        let catalog = vec![
            entry(7, 1001.5, 1501.5),
            entry(3, 1000.0, 1500.0),
        ];
        let found = matcher.find_match(1000.0, 1500.0, &catalog);
        assert_eq!(found.map(|e| e.id), Some(7));
    }
}
