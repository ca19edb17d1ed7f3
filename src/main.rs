// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use colorful::Colorful;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use twotone::catalog::{CatalogStore, ToneEntryDraft};
use twotone::cli::{
    format_entry, format_json, format_report, format_summary, Args, CatalogCommand, Command,
    DetectArgs, EntryArgs, FileReport, SynthArgs,
};
use twotone::config::InputLimits;
use twotone::core::ToneAnalyzer;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let catalog_path = args
        .catalog
        .clone()
        .unwrap_or_else(CatalogStore::default_path);

    match &args.command {
        Command::Detect(detect) => run_detect(detect, &catalog_path, args.verbose),
        Command::Catalog(command) => run_catalog(command, &catalog_path),
        Command::Synth(synth) => run_synth(synth),
    }
}

fn run_detect(detect: &DetectArgs, catalog_path: &Path, verbose: bool) -> Result<()> {
    let config = detect.detector_config()?;
    let limits = detect.input_limits();
    let store = CatalogStore::open(catalog_path)
        .with_context(|| format!("Failed to open catalog {}", catalog_path.display()))?;

    let files = collect_audio_files(&detect.inputs, &limits);
    if files.is_empty() {
        println!("{}", "No audio files found!".red());
        return Ok(());
    }

    let progress = if !detect.json && files.len() > 1 {
        let bar = ProgressBar::new(files.len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
        {
            bar.set_style(style);
        }
        Some(bar)
    } else {
        None
    };

    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| {
            let outcome = ToneAnalyzer::builder()
                .config(config.clone())
                .limits(limits.clone())
                .build(path)
                .and_then(|analyzer| analyzer.analyze(store.entries()));

            match &outcome {
                Ok(result) => info!("{}: {}", path.display(), result.message()),
                Err(e) => warn!("{}: {}", path.display(), e),
            }
            if let Some(bar) = &progress {
                bar.inc(1);
            }

            FileReport {
                path: path.display().to_string(),
                outcome,
            }
        })
        .collect();

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    if detect.json {
        println!("{}", format_json(&reports)?);
    } else {
        for report in &reports {
            print!("{}", format_report(report, verbose));
        }
        if reports.len() > 1 {
            print!("{}", format_summary(&reports));
        }
    }

    if reports.iter().any(|r| r.outcome.is_err()) {
        std::process::exit(1);
    }
    Ok(())
}

/// Expand directories and keep files the limits accept, in argument order
fn collect_audio_files(inputs: &[PathBuf], limits: &InputLimits) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| limits.accepts_extension(p))
                .collect();
            found.sort();
            files.extend(found);
        } else if input.is_file() && !limits.accepts_extension(input) {
            warn!("Skipping {}: unsupported extension", input.display());
        } else {
            // Missing paths are reported as failures by the analyzer
            files.push(input.clone());
        }
    }

    files
}

fn run_catalog(command: &CatalogCommand, catalog_path: &Path) -> Result<()> {
    let mut store = CatalogStore::open(catalog_path)
        .with_context(|| format!("Failed to open catalog {}", catalog_path.display()))?;

    match command {
        CatalogCommand::List { skip, limit, json } => {
            let page = store.list(*skip, *limit);
            if *json {
                println!("{}", serde_json::to_string_pretty(page)?);
            } else if page.is_empty() {
                println!("{}", "Catalog is empty".yellow());
            } else {
                for entry in page {
                    println!("{}", format_entry(entry));
                }
            }
        }
        CatalogCommand::Show { id } => {
            let entry = store.get(*id)?;
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        CatalogCommand::Add(entry) => {
            let created = store.create(draft(entry))?;
            println!("{} {}", "Added".green(), format_entry(&created));
        }
        CatalogCommand::Update { id, entry } => {
            let updated = store.update(*id, draft(entry))?;
            println!("{} {}", "Updated".green(), format_entry(&updated));
        }
        CatalogCommand::Remove { id } => {
            let removed = store.delete(*id)?;
            println!("{} {}", "Removed".green(), format_entry(&removed));
        }
    }

    Ok(())
}

fn draft(entry: &EntryArgs) -> ToneEntryDraft {
    ToneEntryDraft::new(entry.label.as_str(), entry.tone1, entry.tone2)
}

fn run_synth(synth: &SynthArgs) -> Result<()> {
    let spec = synth.sequence_spec();
    spec.write_wav(&synth.output)
        .with_context(|| format!("Failed to write {}", synth.output.display()))?;
    println!(
        "Wrote {} ({:.1} Hz / {:.1} Hz, {:.1}s)",
        synth.output.display().to_string().cyan(),
        spec.tone1_hz,
        spec.tone2_hz,
        spec.total_secs()
    );
    Ok(())
}
