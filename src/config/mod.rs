//! Configuration module for twotone

mod settings;

pub use settings::{
    DetectorConfig, DetectorConfigBuilder, InputLimits, DEFAULT_FRAME_DURATION_SECS,
    DEFAULT_MAX_FREQUENCY_HZ, DEFAULT_MIN_FREQUENCY_HZ, DEFAULT_MIN_TONE_DURATION_SECS,
    DEFAULT_RESOLUTION_HZ, DEFAULT_TOLERANCE_HZ,
};
