//! Single-bin spectral magnitude via the Goertzel recurrence

use std::f64::consts::PI;

/// Magnitude of `target_hz` over the whole slice, normalized by its length.
///
/// The target is snapped to the nearest DFT bin `k = round(N * f / sr)`.
/// An empty slice or zero sample rate gives 0.0.
pub fn goertzel_magnitude(samples: &[f32], sample_rate: u32, target_hz: f64) -> f64 {
    let n = samples.len();
    if n == 0 || sample_rate == 0 {
        return 0.0;
    }

    let k = (n as f64 * target_hz / sample_rate as f64).round();
    let omega = 2.0 * PI * k / n as f64;
    let cos_omega = omega.cos();
    let sin_omega = omega.sin();
    let coeff = 2.0 * cos_omega;

    let mut q1 = 0.0f64;
    let mut q2 = 0.0f64;
    for &x in samples {
        let q0 = coeff * q1 - q2 + x as f64;
        q2 = q1;
        q1 = q0;
    }

    let real = q1 - q2 * cos_omega;
    let imag = q2 * sin_omega;
    (real * real + imag * imag).sqrt() / n as f64
}

/// Magnitudes for each candidate frequency, in order
pub fn scan(samples: &[f32], sample_rate: u32, candidates: &[f64]) -> Vec<f64> {
    candidates
        .iter()
        .map(|&f| goertzel_magnitude(samples, sample_rate, f))
        .collect()
}

/// Candidate grid `start + i * step` for every value below `end`
pub fn candidate_frequencies(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(end > start) {
        return Vec::new();
    }
    let count = ((end - start) / step).ceil() as usize;
    (0..count)
        .map(|i| start + i as f64 * step)
        .filter(|&f| f < end)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, sample_rate: u32, len: usize, amplitude: f32) -> Vec<f32> {
        (0..len)
            .map(|i| {
                amplitude * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin() as f32
            })
            .collect()
    }

    #[test]
    fn test_on_bin_sine_has_half_amplitude() {
        let samples = sine(1000.0, 8000, 8000, 1.0);
        let mag = goertzel_magnitude(&samples, 8000, 1000.0);
        assert!((mag - 0.5).abs() < 1e-3, "magnitude {}", mag);
    }

    #[test]
    fn test_off_bin_is_small() {
        let samples = sine(1000.0, 8000, 8000, 1.0);
        let mag = goertzel_magnitude(&samples, 8000, 1200.0);
        assert!(mag < 1e-3, "magnitude {}", mag);
    }

    #[test]
    fn test_empty_and_silent() {
        assert_eq!(goertzel_magnitude(&[], 8000, 1000.0), 0.0);
        assert_eq!(goertzel_magnitude(&[0.0; 64], 8000, 1000.0), 0.0);
        assert_eq!(goertzel_magnitude(&[0.5; 64], 0, 1000.0), 0.0);
    }

    #[test]
    fn test_candidate_grid_excludes_end() {
        let grid = candidate_frequencies(200.0, 202.0, 0.5);
        assert_eq!(grid, vec![200.0, 200.5, 201.0, 201.5]);
        assert!(candidate_frequencies(10.0, 10.0, 0.5).is_empty());
        assert!(candidate_frequencies(10.0, 20.0, 0.0).is_empty());
    }

    #[test]
    fn test_scan_preserves_order() {
        let samples = sine(500.0, 8000, 800, 1.0);
        let mags = scan(&samples, 8000, &[400.0, 500.0, 600.0]);
        assert_eq!(mags.len(), 3);
        assert!(mags[1] > mags[0] && mags[1] > mags[2]);
    }
}
