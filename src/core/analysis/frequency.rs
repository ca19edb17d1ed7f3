// src/core/analysis/frequency.rs
//
// Dominant-frequency estimation for one tone segment.
//
// The band is scanned with a Goertzel bin per candidate frequency. Confidence
// measures how far the peak stands above the mean of the scan, in units of
// five standard deviations. A peak away from the band edges is refined with a
// finer scan around it.

use log::debug;

use crate::config::DetectorConfig;
use crate::core::dsp::{argmax, candidate_frequencies, mean, scan, std_dev};
use crate::detection::FrequencyEstimate;

/// Peak prominence (in standard deviations) that maps to full confidence
const CONFIDENCE_SCALE: f64 = 5.0;
/// Refinement covers this many coarse steps either side of the peak
const REFINE_SPAN_STEPS: f64 = 2.0;
/// Refinement step is the coarse resolution divided by this
const REFINE_DIVISOR: f64 = 4.0;

/// Goertzel band scanner
#[derive(Debug, Clone)]
pub struct FrequencyEstimator {
    min_hz: f64,
    max_hz: f64,
    resolution_hz: f64,
}

impl FrequencyEstimator {
    pub fn new(config: &DetectorConfig) -> Self {
        Self::with_band(
            config.min_frequency_hz,
            config.max_frequency_hz,
            config.resolution_hz,
        )
    }

    /// Scan `[min_hz, max_hz)` in steps of `resolution_hz`
    pub fn with_band(min_hz: f64, max_hz: f64, resolution_hz: f64) -> Self {
        Self {
            min_hz,
            max_hz,
            resolution_hz,
        }
    }

    pub fn band(&self) -> (f64, f64) {
        (self.min_hz, self.max_hz)
    }

    pub fn resolution_hz(&self) -> f64 {
        self.resolution_hz
    }

    /// Estimate the dominant frequency of `samples`.
    ///
    /// Never fails: silence or an empty band give confidence 0.
    pub fn estimate(&self, samples: &[f32], sample_rate: u32) -> FrequencyEstimate {
        let candidates = candidate_frequencies(self.min_hz, self.max_hz, self.resolution_hz);
        let magnitudes = scan(samples, sample_rate, &candidates);

        let peak_idx = match argmax(&magnitudes) {
            Some(idx) => idx,
            None => {
                return FrequencyEstimate {
                    frequency_hz: self.min_hz,
                    confidence: 0.0,
                }
            }
        };
        let peak_freq = candidates[peak_idx];
        let confidence = peak_confidence(&magnitudes, magnitudes[peak_idx]);

        // Peak on a band edge is returned as-is
        let frequency_hz = if peak_idx > 0 && peak_idx < magnitudes.len() - 1 {
            self.refine(samples, sample_rate, peak_freq)
        } else {
            peak_freq
        };

        debug!(
            "Scanned {} candidates over {} samples: peak {:.3} Hz, refined {:.3} Hz, confidence {:.3}",
            candidates.len(),
            samples.len(),
            peak_freq,
            frequency_hz,
            confidence
        );

        FrequencyEstimate {
            frequency_hz,
            confidence,
        }
    }

    /// Finer scan centred on a coarse peak
    fn refine(&self, samples: &[f32], sample_rate: u32, center_hz: f64) -> f64 {
        let span = REFINE_SPAN_STEPS * self.resolution_hz;
        let step = self.resolution_hz / REFINE_DIVISOR;
        let candidates = candidate_frequencies(center_hz - span, center_hz + span, step);
        let magnitudes = scan(samples, sample_rate, &candidates);

        argmax(&magnitudes)
            .map(|idx| candidates[idx])
            .unwrap_or(center_hz)
    }
}

/// Peak prominence over the scan, clamped to [0, 1]; 0 for a flat scan
fn peak_confidence(magnitudes: &[f64], peak_magnitude: f64) -> f64 {
    let std = std_dev(magnitudes);
    if !(std > 0.0) {
        return 0.0;
    }
    let score = (peak_magnitude - mean(magnitudes)) / (CONFIDENCE_SCALE * std);
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
