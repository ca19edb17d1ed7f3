// src/core/waveform.rs
//
// Peak-normalized mono waveform handed to the detection engine.

use crate::core::dsp::peak_amplitude;
use crate::error::{Error, Result};

/// Mono samples scaled so the loudest sample has magnitude 1.0
#[derive(Debug, Clone)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Waveform {
    /// Normalize `samples` by their peak absolute amplitude.
    ///
    /// A silent or empty clip has no peak to divide by and is rejected, as is
    /// any clip holding a NaN or infinite sample.
    pub fn normalized(samples: &[f32], sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidInput("sample rate must be positive".to_string()));
        }

        if let Some(pos) = samples.iter().position(|s| !s.is_finite()) {
            return Err(Error::DegenerateAudio(format!(
                "non-finite sample {} at index {}",
                samples[pos], pos
            )));
        }

        let peak = peak_amplitude(samples);
        if peak <= 0.0 || !peak.is_finite() {
            return Err(Error::DegenerateAudio(format!(
                "clip of {} samples has no usable amplitude (peak {})",
                samples.len(),
                peak
            )));
        }

        Ok(Self {
            samples: samples.iter().map(|s| s / peak).collect(),
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
