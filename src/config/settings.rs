// src/config/settings.rs
//
// Detector and input configuration. Values are fixed when a detector is
// constructed and never looked up globally.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Default per-tone match tolerance in Hz
pub const DEFAULT_TOLERANCE_HZ: f64 = 2.0;
/// Default lower edge of the frequency scan band
pub const DEFAULT_MIN_FREQUENCY_HZ: f64 = 200.0;
/// Default upper edge of the frequency scan band (exclusive)
pub const DEFAULT_MAX_FREQUENCY_HZ: f64 = 3000.0;
/// Default step between scanned candidate frequencies
pub const DEFAULT_RESOLUTION_HZ: f64 = 0.5;
/// Energy frame length (10 ms)
pub const DEFAULT_FRAME_DURATION_SECS: f64 = 0.01;
/// Shortest run of active frames accepted as a tone (100 ms)
pub const DEFAULT_MIN_TONE_DURATION_SECS: f64 = 0.1;

/// Detection engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Maximum per-tone deviation for a catalog match
    pub tolerance_hz: f64,
    /// Scan band lower edge (inclusive)
    pub min_frequency_hz: f64,
    /// Scan band upper edge (exclusive)
    pub max_frequency_hz: f64,
    /// Candidate spacing for the coarse scan
    pub resolution_hz: f64,
    /// Energy frame length in seconds
    pub frame_duration_secs: f64,
    /// Minimum tone duration in seconds
    pub min_tone_duration_secs: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            tolerance_hz: DEFAULT_TOLERANCE_HZ,
            min_frequency_hz: DEFAULT_MIN_FREQUENCY_HZ,
            max_frequency_hz: DEFAULT_MAX_FREQUENCY_HZ,
            resolution_hz: DEFAULT_RESOLUTION_HZ,
            frame_duration_secs: DEFAULT_FRAME_DURATION_SECS,
            min_tone_duration_secs: DEFAULT_MIN_TONE_DURATION_SECS,
        }
    }
}

impl DetectorConfig {
    /// Start a builder from the defaults
    pub fn builder() -> DetectorConfigBuilder {
        DetectorConfigBuilder::new()
    }

    /// Check every field is in a usable range
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance_hz.is_finite() || self.tolerance_hz < 0.0 {
            return Err(Error::Config(format!(
                "tolerance must be a non-negative number of Hz, got {}",
                self.tolerance_hz
            )));
        }
        if !(self.min_frequency_hz > 0.0 && self.min_frequency_hz.is_finite()) {
            return Err(Error::Config(format!(
                "minimum scan frequency must be positive, got {}",
                self.min_frequency_hz
            )));
        }
        if !(self.max_frequency_hz > self.min_frequency_hz && self.max_frequency_hz.is_finite()) {
            return Err(Error::Config(format!(
                "scan band {}..{} Hz is empty",
                self.min_frequency_hz, self.max_frequency_hz
            )));
        }
        if !(self.resolution_hz > 0.0 && self.resolution_hz.is_finite()) {
            return Err(Error::Config(format!(
                "resolution must be positive, got {}",
                self.resolution_hz
            )));
        }
        if !(self.frame_duration_secs > 0.0 && self.frame_duration_secs.is_finite()) {
            return Err(Error::Config(format!(
                "frame duration must be positive, got {}",
                self.frame_duration_secs
            )));
        }
        if !(self.min_tone_duration_secs > 0.0 && self.min_tone_duration_secs.is_finite()) {
            return Err(Error::Config(format!(
                "minimum tone duration must be positive, got {}",
                self.min_tone_duration_secs
            )));
        }
        Ok(())
    }
}

/// Fluent builder for DetectorConfig
#[derive(Debug, Clone, Default)]
pub struct DetectorConfigBuilder {
    config: DetectorConfig,
}

impl DetectorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance_hz(mut self, tolerance: f64) -> Self {
        self.config.tolerance_hz = tolerance;
        self
    }

    pub fn frequency_range(mut self, min_hz: f64, max_hz: f64) -> Self {
        self.config.min_frequency_hz = min_hz;
        self.config.max_frequency_hz = max_hz;
        self
    }

    pub fn resolution_hz(mut self, resolution: f64) -> Self {
        self.config.resolution_hz = resolution;
        self
    }

    pub fn frame_duration_secs(mut self, secs: f64) -> Self {
        self.config.frame_duration_secs = secs;
        self
    }

    pub fn min_tone_duration_secs(mut self, secs: f64) -> Self {
        self.config.min_tone_duration_secs = secs;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<DetectorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Limits applied to input files before they reach the decoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub max_file_size_mb: u64,
    /// Lowercase extensions without the leading dot
    pub allowed_extensions: Vec<String>,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
            allowed_extensions: vec!["wav".to_string()],
        }
    }
}

impl InputLimits {
    /// Build limits from a comma separated extension list such as ".wav,flac"
    pub fn new(max_file_size_mb: u64, extensions: &str) -> Self {
        let allowed_extensions = extensions
            .split(',')
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            max_file_size_mb,
            allowed_extensions,
        }
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }

    /// Whether the path carries one of the allowed extensions
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .map_or(false, |ext| self.allowed_extensions.iter().any(|a| *a == ext))
    }

    /// Reject files with the wrong type or over the size limit
    pub fn validate_path(&self, path: &Path) -> Result<()> {
        if !self.accepts_extension(path) {
            return Err(Error::InvalidInput(format!(
                "Invalid file type for {}. Allowed: {}",
                path.display(),
                self.allowed_extensions
                    .iter()
                    .map(|e| format!(".{}", e))
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        let size = std::fs::metadata(path)?.len();
        if size > self.max_file_size_bytes() {
            return Err(Error::InvalidInput(format!(
                "File too large ({} bytes). Max size: {}MB",
                size, self.max_file_size_mb
            )));
        }

        Ok(())
    }
}
