// src/core/detector.rs
//
// Waveform-level facade: sequence detection followed by catalog matching.

use log::debug;

use super::analysis::{SequenceDetector, ToneMatcher};
use crate::catalog::ToneCatalogEntry;
use crate::config::DetectorConfig;
use crate::detection::{DetectionResult, SequenceOutcome};
use crate::error::Result;

/// Stateless two-tone detector; safe to share across threads
#[derive(Debug, Clone)]
pub struct ToneDetector {
    config: DetectorConfig,
    sequence: SequenceDetector,
    matcher: ToneMatcher,
}

impl ToneDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            sequence: SequenceDetector::new(&config),
            matcher: ToneMatcher::new(&config),
            config,
        }
    }

    /// Validate the configuration before building the detector
    pub fn try_new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect a tone pair in mono samples and match it against `catalog`.
    ///
    /// The catalog is only consulted when two tones were found.
    pub fn detect(
        &self,
        samples: &[f32],
        sample_rate: u32,
        catalog: &[ToneCatalogEntry],
    ) -> Result<DetectionResult> {
        let outcome = self.sequence.detect(samples, sample_rate)?;
        Ok(self.resolve(&outcome, sample_rate, catalog))
    }

    /// Turn a sequence outcome into a result, matching when tones exist
    pub fn resolve(
        &self,
        outcome: &SequenceOutcome,
        sample_rate: u32,
        catalog: &[ToneCatalogEntry],
    ) -> DetectionResult {
        let pair = match outcome {
            SequenceOutcome::Detected(pair) => pair,
            SequenceOutcome::NoSignal { .. } => return DetectionResult::no_signal(sample_rate),
        };

        let matched = self
            .matcher
            .find_match(
                pair.first.estimate.frequency_hz,
                pair.second.estimate.frequency_hz,
                catalog,
            )
            .cloned();

        debug!(
            "Matched against {} catalog entries: {}",
            catalog.len(),
            matched
                .as_ref()
                .map(|e| e.label.as_str())
                .unwrap_or("no match")
        );

        DetectionResult::from_pair(pair, matched, sample_rate)
    }
}

impl Default for ToneDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
