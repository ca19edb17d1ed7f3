//! Statistical helpers for energy and magnitude sequences

/// Arithmetic mean, 0.0 for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation (divides by N)
pub fn std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let variance = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64;
    variance.sqrt()
}

/// Compute median of a slice (sorts in place)
pub fn median(data: &mut [f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = data.len() / 2;
    if data.len() % 2 == 0 {
        (data[mid - 1] + data[mid]) / 2.0
    } else {
        data[mid]
    }
}

/// Sliding median with an odd window, zero-padded at both ends.
///
/// Output has the same length as the input. An even window is widened by one.
pub fn median_filter(data: &[f64], window_size: usize) -> Vec<f64> {
    if data.is_empty() || window_size <= 1 {
        return data.to_vec();
    }

    let window_size = window_size | 1;
    let half = window_size / 2;
    let mut window = vec![0.0f64; window_size];

    (0..data.len())
        .map(|i| {
            for (w, slot) in window.iter_mut().enumerate() {
                let idx = i as isize + w as isize - half as isize;
                *slot = if idx >= 0 && (idx as usize) < data.len() {
                    data[idx as usize]
                } else {
                    0.0
                };
            }
            median(&mut window)
        })
        .collect()
}

/// Sum of squared samples for each complete, non-overlapping frame.
/// A trailing partial frame is dropped.
pub fn frame_energies(samples: &[f32], frame_length: usize) -> Vec<f64> {
    if frame_length == 0 {
        return Vec::new();
    }
    samples
        .chunks_exact(frame_length)
        .map(|frame| frame.iter().map(|&s| (s as f64) * (s as f64)).sum())
        .collect()
}

/// Compute peak amplitude
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
}

/// Index of the largest value; the first one wins on ties
pub fn argmax(data: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in data.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&data) - 5.0).abs() < 1e-12);
        assert!((std_dev(&data) - 2.0).abs() < 1e-12);
        assert_eq!(std_dev(&[3.0; 10]), 0.0);
    }

    #[test]
    fn test_median_filter_removes_spike() {
        let data = vec![1.0, 1.0, 9.0, 1.0, 1.0, 1.0];
        let filtered = median_filter(&data, 5);
        assert_eq!(filtered.len(), data.len());
        assert_eq!(filtered[2], 1.0);
    }

    #[test]
    fn test_median_filter_zero_padding() {
        // Edges see two padded zeros
        let data = vec![5.0, 5.0, 5.0];
        let filtered = median_filter(&data, 5);
        assert_eq!(filtered, vec![5.0, 5.0, 5.0]);

        let data = vec![5.0, 5.0];
        let filtered = median_filter(&data, 5);
        assert_eq!(filtered, vec![0.0, 0.0]);
    }

    #[test]
    fn test_median_filter_keeps_step_edge() {
        let data = vec![0.0, 0.0, 0.0, 4.0, 4.0, 4.0, 4.0];
        let filtered = median_filter(&data, 5);
        assert_eq!(filtered[2], 0.0);
        assert_eq!(filtered[3], 4.0);
    }

    #[test]
    fn test_frame_energies_drops_partial_frame() {
        let samples = vec![1.0f32, 1.0, 0.5, 0.5, 2.0];
        let energies = frame_energies(&samples, 2);
        assert_eq!(energies, vec![2.0, 0.5]);
        assert!(frame_energies(&samples, 0).is_empty());
    }

    #[test]
    fn test_argmax_first_on_tie() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_peak_amplitude() {
        assert_eq!(peak_amplitude(&[0.1, -0.7, 0.3]), 0.7);
        assert_eq!(peak_amplitude(&[]), 0.0);
    }
}
