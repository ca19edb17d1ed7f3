// src/core/analyzer.rs
//
// High-level file API with builder pattern: validate, decode, downmix and
// run the tone detector.

use std::path::{Path, PathBuf};

use super::decoder::{decode_audio, decode_bytes, AudioData};
use super::detector::ToneDetector;
use crate::catalog::ToneCatalogEntry;
use crate::config::{DetectorConfig, InputLimits};
use crate::detection::DetectionResult;
use crate::error::Result;

/// Builder for ToneAnalyzer configuration
pub struct AnalyzerBuilder {
    config: DetectorConfig,
    limits: Option<InputLimits>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
            limits: None,
        }
    }

    pub fn config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tolerance_hz(mut self, tolerance: f64) -> Self {
        self.config.tolerance_hz = tolerance;
        self
    }

    /// Check extension and size before decoding
    pub fn limits(mut self, limits: InputLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn build<P: AsRef<Path>>(self, path: P) -> Result<ToneAnalyzer> {
        let path = path.as_ref();
        self.config.validate()?;
        if let Some(limits) = &self.limits {
            limits.validate_path(path)?;
        }
        let audio = decode_audio(path)?;
        Ok(ToneAnalyzer {
            path: path.to_path_buf(),
            audio,
            detector: ToneDetector::new(self.config),
        })
    }

    /// Build from an uploaded byte stream instead of a file
    pub fn build_from_bytes(
        self,
        name: impl Into<PathBuf>,
        bytes: Vec<u8>,
    ) -> Result<ToneAnalyzer> {
        let path = name.into();
        self.config.validate()?;
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_string);
        let audio = decode_bytes(bytes, ext.as_deref())?;
        Ok(ToneAnalyzer {
            path,
            audio,
            detector: ToneDetector::new(self.config),
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoded audio clip ready for tone detection
pub struct ToneAnalyzer {
    path: PathBuf,
    audio: AudioData,
    detector: ToneDetector,
}

impl ToneAnalyzer {
    /// Create analyzer with default configuration
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        AnalyzerBuilder::new().build(path)
    }

    /// Create a builder for custom configuration
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Detect and match the tone pair in this clip
    pub fn analyze(&self, catalog: &[ToneCatalogEntry]) -> Result<DetectionResult> {
        let mono = self.audio.to_mono();
        self.detector.detect(&mono, self.audio.sample_rate, catalog)
    }

    /// Get raw audio data
    pub fn audio_data(&self) -> &AudioData {
        &self.audio
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
