//! Tone detection algorithms
//!
//! - Energy segmentation (where the tones are)
//! - Goertzel frequency estimation (what each tone is)
//! - Sequence detection (the first two tones of a page)
//! - Catalog matching (which page it is)

mod frequency;
mod matching;
mod segmentation;
mod sequence;

pub use frequency::FrequencyEstimator;
pub use matching::ToneMatcher;
pub use segmentation::EnergySegmenter;
pub use sequence::SequenceDetector;
