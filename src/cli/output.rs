//! Output formatting for CLI results

use colorful::Colorful;
use serde::Serialize;

use crate::catalog::ToneCatalogEntry;
use crate::detection::{DetectionResult, DetectionStatus};
use crate::error::Error;

/// Outcome of processing one input file
pub struct FileReport {
    pub path: String,
    pub outcome: Result<DetectionResult, Error>,
}

/// Presentation form of a detection: frequencies to 0.1 Hz, confidence to 0.01
#[derive(Debug, Serialize)]
pub struct DetectionResponse<'a> {
    pub file: &'a str,
    pub tone1_detected_hz: Option<f64>,
    pub tone2_detected_hz: Option<f64>,
    pub matched_entry: Option<&'a ToneCatalogEntry>,
    pub confidence: f64,
    pub status: DetectionStatus,
    pub message: String,
}

/// Presentation form of a failed file
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub file: &'a str,
    pub error: String,
    pub bad_input: bool,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl<'a> DetectionResponse<'a> {
    pub fn new(file: &'a str, result: &'a DetectionResult) -> Self {
        Self {
            file,
            tone1_detected_hz: result.tone1_hz.map(|f| round_to(f, 1)),
            tone2_detected_hz: result.tone2_hz.map(|f| round_to(f, 1)),
            matched_entry: result.matched_entry.as_ref(),
            confidence: round_to(result.confidence, 2),
            status: result.status,
            message: result.message(),
        }
    }
}

/// Format one file's outcome for terminal output
pub fn format_report(report: &FileReport, verbose: bool) -> String {
    let mut output = String::new();

    let result = match &report.outcome {
        Ok(result) => result,
        Err(err) => {
            output.push_str(&format!(
                "{} {}\n  {}\n",
                "✗".red(),
                report.path.as_str().bold(),
                err.to_string().as_str().red()
            ));
            return output;
        }
    };

    let symbol = result.status.symbol();
    let symbol = match result.status {
        DetectionStatus::Matched => symbol.green(),
        DetectionStatus::Unmatched => symbol.yellow(),
        DetectionStatus::NoSignal => symbol.cyan(),
    };
    output.push_str(&format!("{} {}\n", symbol, report.path.as_str().bold()));

    if let (Some(t1), Some(t2)) = (result.tone1_hz, result.tone2_hz) {
        output.push_str(&format!(
            "  Tones: {:.1} Hz / {:.1} Hz (confidence: {:.0}%)\n",
            t1,
            t2,
            result.confidence * 100.0
        ));
    }

    let message = result.message();
    let message = match result.status {
        DetectionStatus::Matched => message.as_str().green(),
        DetectionStatus::Unmatched => message.as_str().yellow(),
        DetectionStatus::NoSignal => message.as_str().cyan(),
    };
    output.push_str(&format!("  {}\n", message));

    if verbose {
        if let Some((first, second)) = &result.segments {
            let sr = result.sample_rate;
            for (name, seg) in [("Tone 1", first), ("Tone 2", second)] {
                output.push_str(&format!(
                    "    {}: {:.2}s - {:.2}s ({:.2}s)\n",
                    name,
                    seg.start_secs(sr),
                    seg.end_secs(sr),
                    seg.duration_secs(sr)
                ));
            }
        }
        if let Some(entry) = &result.matched_entry {
            output.push_str(&format!(
                "    Catalog #{}: {:.1} Hz / {:.1} Hz\n",
                entry.id, entry.tone1_hz, entry.tone2_hz
            ));
        }
    }

    output
}

/// Format all reports as a JSON array
pub fn format_json(reports: &[FileReport]) -> serde_json::Result<String> {
    let values = reports
        .iter()
        .map(|report| match &report.outcome {
            Ok(result) => serde_json::to_value(DetectionResponse::new(&report.path, result)),
            Err(err) => serde_json::to_value(ErrorResponse {
                file: &report.path,
                error: err.to_string(),
                bad_input: err.is_bad_input(),
            }),
        })
        .collect::<serde_json::Result<Vec<_>>>()?;
    serde_json::to_string_pretty(&values)
}

/// Format a summary for multiple files
pub fn format_summary(reports: &[FileReport]) -> String {
    let count = |status: DetectionStatus| {
        reports
            .iter()
            .filter(|r| matches!(&r.outcome, Ok(res) if res.status == status))
            .count()
    };
    let matched = count(DetectionStatus::Matched);
    let unmatched = count(DetectionStatus::Unmatched);
    let no_signal = count(DetectionStatus::NoSignal);
    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Summary:".bold()));
    output.push_str(&format!("  {} files analyzed\n", reports.len()));

    if matched > 0 {
        output.push_str(&format!("  {}\n", format!("✓ {} matched", matched).as_str().green()));
    }
    if unmatched > 0 {
        output.push_str(&format!("  {}\n", format!("? {} unmatched", unmatched).as_str().yellow()));
    }
    if no_signal > 0 {
        output.push_str(&format!("  {}\n", format!("○ {} no signal", no_signal).as_str().cyan()));
    }
    if failed > 0 {
        output.push_str(&format!("  {}\n", format!("✗ {} failed", failed).as_str().red()));
    }

    output
}

/// One catalog entry per line
pub fn format_entry(entry: &ToneCatalogEntry) -> String {
    format!(
        "{:>5}  {:<32} {:>8.1} Hz  {:>8.1} Hz",
        entry.id, entry.label, entry.tone1_hz, entry.tone2_hz
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{DetectedTone, FrequencyEstimate, ToneSegment, TonePair};
    use chrono::Utc;

    fn matched_result() -> DetectionResult {
        let pair = TonePair {
            first: DetectedTone {
                segment: ToneSegment::new(4000, 12000),
                estimate: FrequencyEstimate { frequency_hz: 999.46, confidence: 0.93 },
            },
            second: DetectedTone {
                segment: ToneSegment::new(14400, 30400),
                estimate: FrequencyEstimate { frequency_hz: 1499.75, confidence: 0.88 },
            },
            confidence: 0.905,
        };
        let entry = ToneCatalogEntry {
            id: 2,
            label: "Station 7".to_string(),
            tone1_hz: 1000.0,
            tone2_hz: 1500.0,
            created_at: Utc::now(),
            updated_at: None,
        };
        DetectionResult::from_pair(&pair, Some(entry), 8000)
    }

    #[test]
    fn test_response_rounding() {
        let result = matched_result();
        let response = DetectionResponse::new("page.wav", &result);
        assert_eq!(response.tone1_detected_hz, Some(999.5));
        assert_eq!(response.tone2_detected_hz, Some(1499.8));
        assert_eq!(response.confidence, 0.91);
        assert_eq!(response.message, "Match found: Station 7");
    }

    #[test]
    fn test_format_json() {
        let reports = vec![
            FileReport {
                path: "page.wav".to_string(),
                outcome: Ok(matched_result()),
            },
            FileReport {
                path: "broken.wav".to_string(),
                outcome: Err(Error::AudioDecode("corrupt".to_string())),
            },
        ];
        let json = format_json(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["file"], "page.wav");
        assert_eq!(value[0]["status"], "matched");
        assert_eq!(value[0]["matched_entry"]["label"], "Station 7");
        assert_eq!(value[1]["bad_input"], true);
    }

    #[test]
    fn test_format_report_mentions_tones() {
        let report = FileReport {
            path: "page.wav".to_string(),
            outcome: Ok(matched_result()),
        };
        let text = format_report(&report, true);
        assert!(text.contains("page.wav"));
        assert!(text.contains("999.5 Hz"));
        assert!(text.contains("Station 7"));
        assert!(text.contains("Tone 2"));
    }

    #[test]
    fn test_summary_counts() {
        let reports = vec![
            FileReport {
                path: "a.wav".to_string(),
                outcome: Ok(DetectionResult::no_signal(8000)),
            },
            FileReport {
                path: "b.wav".to_string(),
                outcome: Ok(matched_result()),
            },
        ];
        let summary = format_summary(&reports);
        assert!(summary.contains("2 files analyzed"));
        assert!(summary.contains("1 matched"));
        assert!(summary.contains("1 no signal"));
    }
}
