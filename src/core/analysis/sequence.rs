// src/core/analysis/sequence.rs
//
// Two-tone sequence detection: normalize, segment, and estimate the first two
// qualifying segments. Anything after the second segment is ignored, so a
// loud burst ahead of the real page is taken as the first tone.

use log::debug;

use super::frequency::FrequencyEstimator;
use super::segmentation::EnergySegmenter;
use crate::config::DetectorConfig;
use crate::core::waveform::Waveform;
use crate::detection::{DetectedTone, SequenceOutcome, ToneSegment, TonePair};
use crate::error::Result;

/// Segmentation plus per-segment frequency estimation
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    segmenter: EnergySegmenter,
    estimator: FrequencyEstimator,
}

impl SequenceDetector {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            segmenter: EnergySegmenter::new(config),
            estimator: FrequencyEstimator::new(config),
        }
    }

    pub fn from_parts(segmenter: EnergySegmenter, estimator: FrequencyEstimator) -> Self {
        Self {
            segmenter,
            estimator,
        }
    }

    /// Normalize raw samples and look for a tone pair.
    ///
    /// Fails for silent, empty or non-finite clips and a zero sample rate.
    pub fn detect(&self, samples: &[f32], sample_rate: u32) -> Result<SequenceOutcome> {
        let waveform = Waveform::normalized(samples, sample_rate)?;
        Ok(self.detect_waveform(&waveform))
    }

    /// Look for a tone pair in an already normalized waveform
    pub fn detect_waveform(&self, waveform: &Waveform) -> SequenceOutcome {
        let sample_rate = waveform.sample_rate();
        let segments = self.segmenter.segment(waveform.samples(), sample_rate);

        let (first, second) = match segments.as_slice() {
            [first, second, ..] => (*first, *second),
            _ => {
                debug!("Found {} segment(s), need two", segments.len());
                return SequenceOutcome::NoSignal {
                    segments_found: segments.len(),
                };
            }
        };

        if segments.len() > 2 {
            debug!("Ignoring {} segment(s) after the first two", segments.len() - 2);
        }

        let first = self.estimate_segment(waveform, first);
        let second = self.estimate_segment(waveform, second);
        let confidence = (first.estimate.confidence + second.estimate.confidence) / 2.0;

        debug!(
            "Tone pair {:.2} Hz / {:.2} Hz, confidence {:.3}",
            first.estimate.frequency_hz, second.estimate.frequency_hz, confidence
        );

        SequenceOutcome::Detected(TonePair {
            first,
            second,
            confidence,
        })
    }

    fn estimate_segment(&self, waveform: &Waveform, segment: ToneSegment) -> DetectedTone {
        let samples = waveform.samples();
        let end = segment.end.min(samples.len());
        let start = segment.start.min(end);
        let estimate = self
            .estimator
            .estimate(&samples[start..end], waveform.sample_rate());
        DetectedTone { segment, estimate }
    }
}
