// src/core/analysis/segmentation.rs
//
// Short-time energy segmentation. Frames whose median-smoothed energy rises
// above a clip-wide threshold are grouped into runs, and runs long enough to
// be a tone become segments.

use log::debug;

use crate::config::DetectorConfig;
use crate::core::dsp::{frame_energies, mean, median_filter, std_dev};
use crate::detection::ToneSegment;

/// Median filter width applied to the frame energies
const SMOOTHING_WINDOW: usize = 5;
/// Threshold is mean + this many standard deviations
const THRESHOLD_STD_FACTOR: f64 = 2.0;

/// Finds tone-active sample ranges in a waveform
#[derive(Debug, Clone)]
pub struct EnergySegmenter {
    frame_duration_secs: f64,
    min_tone_duration_secs: f64,
}

impl EnergySegmenter {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            frame_duration_secs: config.frame_duration_secs,
            min_tone_duration_secs: config.min_tone_duration_secs,
        }
    }

    /// Frame length in samples for a sample rate
    pub fn frame_length(&self, sample_rate: u32) -> usize {
        (sample_rate as f64 * self.frame_duration_secs).round() as usize
    }

    /// Minimum run length, in frames, for a segment
    pub fn min_tone_frames(&self, sample_rate: u32) -> usize {
        let frame_length = self.frame_length(sample_rate);
        if frame_length == 0 {
            return 0;
        }
        (self.min_tone_duration_secs * sample_rate as f64 / frame_length as f64).round() as usize
    }

    /// Disjoint segments in ascending order of start
    pub fn segment(&self, samples: &[f32], sample_rate: u32) -> Vec<ToneSegment> {
        let frame_length = self.frame_length(sample_rate);
        if frame_length == 0 {
            return Vec::new();
        }

        let energy = frame_energies(samples, frame_length);
        if energy.is_empty() {
            return Vec::new();
        }

        let smoothed = median_filter(&energy, SMOOTHING_WINDOW);
        let threshold = mean(&smoothed) + THRESHOLD_STD_FACTOR * std_dev(&smoothed);
        let active: Vec<bool> = smoothed.iter().map(|&e| e > threshold).collect();

        let min_frames = self.min_tone_frames(sample_rate).max(1);
        let segments = collect_runs(&active, min_frames, frame_length);

        debug!(
            "Segmented {} frames of {} samples: threshold {:.4}, {} active, {} segment(s)",
            energy.len(),
            frame_length,
            threshold,
            active.iter().filter(|&&a| a).count(),
            segments.len()
        );

        segments
    }
}

/// Turn runs of active frames at least `min_frames` long into sample ranges
fn collect_runs(active: &[bool], min_frames: usize, frame_length: usize) -> Vec<ToneSegment> {
    let mut segments = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &is_active) in active.iter().enumerate() {
        match (is_active, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start >= min_frames {
                    segments.push(ToneSegment::new(start * frame_length, i * frame_length));
                }
                run_start = None;
            }
            _ => {}
        }
    }

    // Tone still sounding at the end of the clip
    if let Some(start) = run_start {
        if active.len() - start >= min_frames {
            segments.push(ToneSegment::new(
                start * frame_length,
                active.len() * frame_length,
            ));
        }
    }

    segments
}
