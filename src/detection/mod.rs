//! Detection module for twotone

mod result;

pub use result::{
    DetectedTone, DetectionResult, DetectionStatus, FrequencyEstimate, SequenceOutcome,
    ToneSegment, TonePair,
};
