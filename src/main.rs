#![forbid(unsafe_code)]
//! # text_insight CLI
//!
//! Command-line front end for the `text_insight` crate. Reads English text
//! from a file, a directory of `.txt` files, or stdin, and prints word
//! counts, top keywords, a frequency chart and a sentiment label.
//!
//! ## Example
//! ```bash
//! echo "What a wonderful, wonderful day" | text_insight
//! text_insight path/to/notes --export-format json
//! ```
//!
//! Set `RUST_LOG=debug` to see per-stage pipeline logs.

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process;
use text_insight::{
    AnalysisOptions, ExportFormat, analyze_path, analyze_stdin, input, print_failed_files,
    render_report,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File or directory to analyze; reads stdin when omitted or "-"
    path: Option<PathBuf>,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Output format (txt, json, csv, tsv)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Rows of the frequency table in txt output (0 = all)
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// If set, analyze all files together and output one combined result
    #[arg(long, default_value_t = false)]
    combine: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let options = AnalysisOptions {
        export_format: cli.export_format,
        combine: cli.combine,
        top: cli.top,
        stopwords: cli.stopwords,
    };

    let batch = match cli.path.as_deref() {
        Some(path) if path.as_os_str() != "-" => analyze_path(path, &options),
        _ => input::read_stdin().and_then(|text| analyze_stdin(&text, &options)),
    };

    let report = match batch {
        Ok(report) => report,
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    };

    match render_report(&report, &options) {
        Ok(out) => println!("{}", out.trim_end()),
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }

    if !report.failed_files.is_empty() {
        print_failed_files(&report.failed_files);
        process::exit(1);
    }
}
