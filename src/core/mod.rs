//! Core decoding and detection modules

pub mod analysis;
pub mod analyzer;
pub mod decoder;
pub mod detector;
pub mod dsp;
pub mod waveform;

pub use analysis::{EnergySegmenter, FrequencyEstimator, SequenceDetector, ToneMatcher};
pub use analyzer::{AnalyzerBuilder, ToneAnalyzer};
pub use decoder::{decode_audio, decode_bytes, extract_mono, AudioData};
pub use detector::ToneDetector;
pub use waveform::Waveform;
