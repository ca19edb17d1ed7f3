// src/testgen/mod.rs
//
// Synthetic two-tone page generation for calibration and testing.
// Renders lead silence, tone 1, a gap, tone 2 and trailing silence, and can
// write the result as a 16-bit mono WAV.

use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::path::Path;

use crate::error::{Error, Result};

/// Layout of a synthetic two-tone page
#[derive(Debug, Clone, PartialEq)]
pub struct ToneSequenceSpec {
    pub sample_rate: u32,
    pub lead_silence_secs: f64,
    pub tone1_hz: f64,
    pub tone1_secs: f64,
    pub gap_secs: f64,
    pub tone2_hz: f64,
    pub tone2_secs: f64,
    pub trail_silence_secs: f64,
    /// Peak amplitude of both tones, 0.0-1.0
    pub amplitude: f32,
}

impl Default for ToneSequenceSpec {
    /// 1000 Hz for 1 s, 0.3 s gap, 1500 Hz for 2 s, in a 20 s clip at 8 kHz.
    ///
    /// The long quiet tail keeps tone frames well above the clip-wide
    /// energy threshold.
    fn default() -> Self {
        Self {
            sample_rate: 8000,
            lead_silence_secs: 0.5,
            tone1_hz: 1000.0,
            tone1_secs: 1.0,
            gap_secs: 0.3,
            tone2_hz: 1500.0,
            tone2_secs: 2.0,
            trail_silence_secs: 16.2,
            amplitude: 0.8,
        }
    }
}

impl ToneSequenceSpec {
    pub fn with_tones(tone1_hz: f64, tone2_hz: f64) -> Self {
        Self {
            tone1_hz,
            tone2_hz,
            ..Self::default()
        }
    }

    pub fn total_secs(&self) -> f64 {
        self.lead_silence_secs
            + self.tone1_secs
            + self.gap_secs
            + self.tone2_secs
            + self.trail_silence_secs
    }

    /// Sample index range `[start, end)` of each tone
    pub fn tone_bounds(&self) -> ((usize, usize), (usize, usize)) {
        let sr = self.sample_rate;
        let t1_start = sample_count(self.lead_silence_secs, sr);
        let t1_end = t1_start + sample_count(self.tone1_secs, sr);
        let t2_start = t1_end + sample_count(self.gap_secs, sr);
        let t2_end = t2_start + sample_count(self.tone2_secs, sr);
        ((t1_start, t1_end), (t2_start, t2_end))
    }

    /// Render the page as mono samples
    pub fn render(&self) -> Vec<f32> {
        let sr = self.sample_rate;
        let mut samples = silence(self.lead_silence_secs, sr);
        samples.extend(sine(self.tone1_hz, self.tone1_secs, sr, self.amplitude));
        samples.extend(silence(self.gap_secs, sr));
        samples.extend(sine(self.tone2_hz, self.tone2_secs, sr, self.amplitude));
        samples.extend(silence(self.trail_silence_secs, sr));
        samples
    }

    /// Render and write as a 16-bit mono WAV
    pub fn write_wav<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_wav(path, &self.render(), self.sample_rate)
    }
}

fn sample_count(secs: f64, sample_rate: u32) -> usize {
    (secs.max(0.0) * sample_rate as f64).round() as usize
}

/// Sine tone starting at zero phase
pub fn sine(freq_hz: f64, secs: f64, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let n = sample_count(secs, sample_rate);
    (0..n)
        .map(|i| {
            amplitude * (2.0 * PI * freq_hz * i as f64 / sample_rate as f64).sin() as f32
        })
        .collect()
}

/// Digital silence
pub fn silence(secs: f64, sample_rate: u32) -> Vec<f32> {
    vec![0.0; sample_count(secs, sample_rate)]
}

/// Write mono samples in [-1, 1] as 16-bit PCM
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let wav_error = |e: hound::Error| Error::InvalidInput(format!("failed to write WAV: {}", e));

    let mut writer = WavWriter::create(path, spec).map_err(wav_error)?;
    for &s in samples {
        let value = (s.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
        writer.write_sample(value).map_err(wav_error)?;
    }
    writer.finalize().map_err(wav_error)?;
    Ok(())
}
