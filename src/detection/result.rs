//! Detection result types

use serde::{Deserialize, Serialize};

use crate::catalog::ToneCatalogEntry;

/// Half-open sample interval `[start, end)` holding one sustained tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSegment {
    pub start: usize,
    pub end: usize,
}

impl ToneSegment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start_secs(&self, sample_rate: u32) -> f64 {
        self.start as f64 / sample_rate as f64
    }

    pub fn end_secs(&self, sample_rate: u32) -> f64 {
        self.end as f64 / sample_rate as f64
    }

    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        self.len() as f64 / sample_rate as f64
    }
}

/// Dominant frequency of one segment and how clearly it stands out
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequencyEstimate {
    pub frequency_hz: f64,
    /// Always within [0, 1]
    pub confidence: f64,
}

/// One tone of a detected pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedTone {
    pub segment: ToneSegment,
    pub estimate: FrequencyEstimate,
}

/// Two consecutive tones and their averaged confidence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TonePair {
    pub first: DetectedTone,
    pub second: DetectedTone,
    pub confidence: f64,
}

/// What the sequence stage found in a valid waveform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceOutcome {
    /// Fewer than two qualifying segments
    NoSignal { segments_found: usize },
    /// The first two qualifying segments, estimated
    Detected(TonePair),
}

impl SequenceOutcome {
    pub fn tone1_hz(&self) -> Option<f64> {
        match self {
            SequenceOutcome::Detected(pair) => Some(pair.first.estimate.frequency_hz),
            SequenceOutcome::NoSignal { .. } => None,
        }
    }

    pub fn tone2_hz(&self) -> Option<f64> {
        match self {
            SequenceOutcome::Detected(pair) => Some(pair.second.estimate.frequency_hz),
            SequenceOutcome::NoSignal { .. } => None,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            SequenceOutcome::Detected(pair) => pair.confidence,
            SequenceOutcome::NoSignal { .. } => 0.0,
        }
    }

    pub fn pair(&self) -> Option<&TonePair> {
        match self {
            SequenceOutcome::Detected(pair) => Some(pair),
            SequenceOutcome::NoSignal { .. } => None,
        }
    }
}

/// Overall status of a detection call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionStatus {
    /// No two-tone sequence found
    NoSignal,
    /// Tones found, nothing in the catalog within tolerance
    Unmatched,
    /// Tones found and matched
    Matched,
}

impl DetectionStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            DetectionStatus::NoSignal => "○",
            DetectionStatus::Unmatched => "?",
            DetectionStatus::Matched => "✓",
        }
    }
}

/// Final output of one detection call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub tone1_hz: Option<f64>,
    pub tone2_hz: Option<f64>,
    pub confidence: f64,
    pub matched_entry: Option<ToneCatalogEntry>,
    pub status: DetectionStatus,
    /// Segments backing the two tones, absent with NoSignal
    pub segments: Option<(ToneSegment, ToneSegment)>,
    pub sample_rate: u32,
}

impl DetectionResult {
    /// Result for a clip without a usable tone pair
    pub fn no_signal(sample_rate: u32) -> Self {
        Self {
            tone1_hz: None,
            tone2_hz: None,
            confidence: 0.0,
            matched_entry: None,
            status: DetectionStatus::NoSignal,
            segments: None,
            sample_rate,
        }
    }

    /// Result for a detected pair and an optional catalog match
    pub fn from_pair(pair: &TonePair, matched: Option<ToneCatalogEntry>, sample_rate: u32) -> Self {
        let status = if matched.is_some() {
            DetectionStatus::Matched
        } else {
            DetectionStatus::Unmatched
        };
        Self {
            tone1_hz: Some(pair.first.estimate.frequency_hz),
            tone2_hz: Some(pair.second.estimate.frequency_hz),
            confidence: pair.confidence.clamp(0.0, 1.0),
            matched_entry: matched,
            status,
            segments: Some((pair.first.segment, pair.second.segment)),
            sample_rate,
        }
    }

    pub fn is_match(&self) -> bool {
        self.status == DetectionStatus::Matched
    }

    /// Human readable summary line
    pub fn message(&self) -> String {
        match (&self.status, &self.matched_entry) {
            (DetectionStatus::Matched, Some(entry)) => format!("Match found: {}", entry.label),
            (DetectionStatus::NoSignal, _) => {
                "No two-tone sequence detected in audio file".to_string()
            }
            _ => "Tones detected but no matching entry in catalog".to_string(),
        }
    }
}
