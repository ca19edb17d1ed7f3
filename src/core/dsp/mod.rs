//! Digital Signal Processing utilities

pub mod goertzel;
pub mod stats;

pub use goertzel::{candidate_frequencies, goertzel_magnitude, scan};
pub use stats::{argmax, frame_energies, mean, median, median_filter, peak_amplitude, std_dev};
