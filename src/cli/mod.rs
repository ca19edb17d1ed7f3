// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::{Args, CatalogCommand, Command, DetectArgs, EntryArgs, SynthArgs};
pub use output::{
    format_entry, format_json, format_report, format_summary, DetectionResponse, ErrorResponse,
    FileReport,
};
