//! twotone - Decode two-tone sequential paging signals
//!
//! Finds the two consecutive tone bursts of a sequential page in a recorded
//! clip, estimates each tone's frequency and matches the pair against a
//! catalog of known tone assignments.
//!
//! ## Pipeline
//!
//! 1. **Segmentation**: 10 ms frame energies, median smoothing and an
//!    adaptive mean + 2σ threshold yield active regions of at least 100 ms
//! 2. **Frequency estimation**: Goertzel scan over 200-3000 Hz in 0.5 Hz
//!    steps, then a finer pass around the peak
//! 3. **Matching**: first catalog entry within ±2 Hz on both tones
//!
//! ## Module Structure
//!
//! - `core` - Decoding, DSP and the detection pipeline
//! - `catalog` - Tone catalog entries and the JSON-backed store
//! - `cli` - Command-line interface
//! - `config` - Detector settings and input limits
//! - `detection` - Detection result types
//! - `testgen` - Synthetic page generation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use twotone::catalog::CatalogStore;
//! use twotone::core::ToneAnalyzer;
//!
//! let store = CatalogStore::open(CatalogStore::default_path())?;
//! let analyzer = ToneAnalyzer::new("page.wav")?;
//! let result = analyzer.analyze(store.entries())?;
//!
//! println!("{}", result.message());
//! ```

// Core analysis functionality
pub mod core;

// Tone catalog
pub mod catalog;

// Command-line interface
pub mod cli;

// Detector configuration
pub mod config;

// Detection result types
pub mod detection;

pub mod error;

// Synthetic signals for calibration and tests
pub mod testgen;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CatalogStore, ToneCatalogEntry, ToneEntryDraft};
pub use config::{DetectorConfig, DetectorConfigBuilder, InputLimits};
pub use core::{
    AnalyzerBuilder, AudioData, EnergySegmenter, FrequencyEstimator, SequenceDetector,
    ToneAnalyzer, ToneDetector, ToneMatcher, Waveform,
};
pub use detection::{
    DetectionResult, DetectionStatus, FrequencyEstimate, SequenceOutcome, ToneSegment, TonePair,
};
pub use error::{Error, Result};
