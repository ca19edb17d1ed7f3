//! CLI argument parsing

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{
    DetectorConfig, InputLimits, DEFAULT_MAX_FREQUENCY_HZ, DEFAULT_MIN_FREQUENCY_HZ,
    DEFAULT_RESOLUTION_HZ, DEFAULT_TOLERANCE_HZ,
};
use crate::error::Result;
use crate::testgen::ToneSequenceSpec;

#[derive(Parser, Debug)]
#[command(name = "twotone")]
#[command(version, about = "Decode two-tone sequential paging signals in audio files")]
pub struct Args {
    /// Tone catalog file (defaults to the user data directory)
    #[arg(long, global = true, env = "TWOTONE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect and match two-tone pages in audio files or directories
    Detect(DetectArgs),

    /// Manage the tone catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),

    /// Write a synthetic two-tone page as a WAV file
    Synth(SynthArgs),
}

#[derive(ClapArgs, Debug)]
pub struct DetectArgs {
    /// Input files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Maximum per-tone deviation for a catalog match (Hz)
    #[arg(long, env = "TWOTONE_TOLERANCE_HZ", default_value_t = DEFAULT_TOLERANCE_HZ)]
    pub tolerance: f64,

    /// Lower edge of the frequency scan (Hz)
    #[arg(long, env = "TWOTONE_MIN_FREQ_HZ", default_value_t = DEFAULT_MIN_FREQUENCY_HZ)]
    pub min_freq: f64,

    /// Upper edge of the frequency scan (Hz)
    #[arg(long, env = "TWOTONE_MAX_FREQ_HZ", default_value_t = DEFAULT_MAX_FREQUENCY_HZ)]
    pub max_freq: f64,

    /// Frequency scan step (Hz)
    #[arg(long, env = "TWOTONE_RESOLUTION_HZ", default_value_t = DEFAULT_RESOLUTION_HZ)]
    pub resolution: f64,

    /// Largest accepted input file (MB)
    #[arg(long, env = "TWOTONE_MAX_FILE_SIZE_MB", default_value_t = 50)]
    pub max_file_size_mb: u64,

    /// Comma separated list of accepted extensions
    #[arg(long, env = "TWOTONE_EXTENSIONS", default_value = "wav")]
    pub extensions: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl DetectArgs {
    /// Detector configuration from the flags, validated
    pub fn detector_config(&self) -> Result<DetectorConfig> {
        DetectorConfig::builder()
            .tolerance_hz(self.tolerance)
            .frequency_range(self.min_freq, self.max_freq)
            .resolution_hz(self.resolution)
            .build()
    }

    pub fn input_limits(&self) -> InputLimits {
        InputLimits::new(self.max_file_size_mb, &self.extensions)
    }
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List catalog entries
    List {
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one entry
    Show { id: u64 },
    /// Add an entry
    Add(EntryArgs),
    /// Replace an entry's label and tones
    Update {
        id: u64,
        #[command(flatten)]
        entry: EntryArgs,
    },
    /// Remove an entry
    Remove { id: u64 },
}

#[derive(ClapArgs, Debug)]
pub struct EntryArgs {
    /// Display name of the paged unit
    #[arg(long)]
    pub label: String,
    /// First tone (Hz)
    #[arg(long)]
    pub tone1: f64,
    /// Second tone (Hz)
    #[arg(long)]
    pub tone2: f64,
}

#[derive(ClapArgs, Debug)]
pub struct SynthArgs {
    /// Output WAV path
    #[arg(short, long)]
    pub output: PathBuf,
    #[arg(long)]
    pub tone1: f64,
    #[arg(long)]
    pub tone2: f64,
    #[arg(long, default_value_t = 1.0)]
    pub tone1_secs: f64,
    #[arg(long, default_value_t = 2.0)]
    pub tone2_secs: f64,
    /// Silence between the tones (s)
    #[arg(long, default_value_t = 0.3)]
    pub gap_secs: f64,
    #[arg(long, default_value_t = 8000)]
    pub sample_rate: u32,
    /// Total clip length (s); trailing silence fills the rest
    #[arg(long, default_value_t = 20.0)]
    pub total_secs: f64,
}

impl SynthArgs {
    pub fn sequence_spec(&self) -> ToneSequenceSpec {
        let base = ToneSequenceSpec::default();
        let used = base.lead_silence_secs + self.tone1_secs + self.gap_secs + self.tone2_secs;
        ToneSequenceSpec {
            sample_rate: self.sample_rate,
            tone1_hz: self.tone1,
            tone1_secs: self.tone1_secs,
            gap_secs: self.gap_secs,
            tone2_hz: self.tone2,
            tone2_secs: self.tone2_secs,
            trail_silence_secs: (self.total_secs - used).max(0.0),
            ..base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detect_defaults() {
        let args = Args::try_parse_from(["twotone", "detect", "page.wav"]).unwrap();
        match args.command {
            Command::Detect(detect) => {
                assert_eq!(detect.inputs, vec![PathBuf::from("page.wav")]);
                assert_eq!(detect.tolerance, 2.0);
                assert!(!detect.json);
                assert_eq!(detect.detector_config().unwrap(), DetectorConfig::default());
                assert_eq!(detect.input_limits(), InputLimits::default());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_detect_overrides() {
        let args = Args::try_parse_from([
            "twotone",
            "--catalog",
            "/tmp/tones.json",
            "detect",
            "--tolerance",
            "5",
            "--min-freq",
            "300",
            "--json",
            "a.wav",
            "b.wav",
        ])
        .unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("/tmp/tones.json")));
        match args.command {
            Command::Detect(detect) => {
                assert_eq!(detect.inputs.len(), 2);
                let config = detect.detector_config().unwrap();
                assert_eq!(config.tolerance_hz, 5.0);
                assert_eq!(config.min_frequency_hz, 300.0);
                assert!(detect.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invalid_band_rejected() {
        let args = Args::try_parse_from([
            "twotone", "detect", "--min-freq", "3000", "--max-freq", "200", "a.wav",
        ])
        .unwrap();
        match args.command {
            Command::Detect(detect) => assert!(detect.detector_config().is_err()),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_update() {
        let args = Args::try_parse_from([
            "twotone", "catalog", "update", "4", "--label", "Rescue 2", "--tone1", "853.2",
            "--tone2", "960",
        ])
        .unwrap();
        match args.command {
            Command::Catalog(CatalogCommand::Update { id, entry }) => {
                assert_eq!(id, 4);
                assert_eq!(entry.label, "Rescue 2");
                assert_eq!(entry.tone1, 853.2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_detect_requires_input() {
        assert!(Args::try_parse_from(["twotone", "detect"]).is_err());
    }

    #[test]
    fn test_synth_fills_total_length() {
        let args = Args::try_parse_from([
            "twotone", "synth", "-o", "page.wav", "--tone1", "600", "--tone2", "900",
        ])
        .unwrap();
        match args.command {
            Command::Synth(synth) => {
                let spec = synth.sequence_spec();
                assert!((spec.total_secs() - 20.0).abs() < 1e-9);
                assert_eq!(spec.tone1_hz, 600.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
