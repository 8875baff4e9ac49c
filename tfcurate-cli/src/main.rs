//! # tfcurate CLI - Transcription-Factor List Curation
//!
//! A command-line interface for deriving curated TF gene lists from
//! motif-annotation tables and a literature-curated reference list.
//!
//! ## Usage
//!
//! ```bash
//! # Derive the mouse and human lists from ./resources
//! tfcurate
//!
//! # Resources and outputs in separate directories
//! tfcurate -r data/resources -o derived
//!
//! # Human pipeline only, keeping the intermediate motif-derived list
//! tfcurate -s hs --write-motif-derived
//! ```
//!
//! ## Options
//!
//! - `-r, --resources <DIR>`: Input directory (default: resources)
//! - `-o, --out-dir <DIR>`: Output directory (default: same as resources)
//! - `-s, --species <SPECIES>`: hs, mm, or all (default: all)
//! - `--write-motif-derived`: Also persist the full human motif-derived list
//! - `-q, --quiet`: Suppress progress messages
//!
//! ## Inputs
//!
//! The resources directory must contain the motif-annotation tables
//! (`motifs-v9-nr.hgnc-m0.001-o0.0.tbl`, `motifs-v9-nr.mgi-m0.001-o0.0.tbl`)
//! and the curated human TF list (`lambert2018.txt`). Acquiring these files
//! is a manual prerequisite; tfcurate performs no downloads.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use tfcurate_core::TfListDeriver;
use tfcurate_core::config::{CurationConfig, SpeciesSelection};

/// Main entry point for the tfcurate CLI application.
///
/// Parses command-line arguments, configures the deriver, runs the selected
/// species pipelines, and reports a summary to stderr.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("tfcurate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derives curated transcription-factor gene lists for GRN inference")
        .arg(
            Arg::new("resources")
                .short('r')
                .long("resources")
                .value_name("DIR")
                .help("Directory with motif tables and the curated TF list")
                .default_value("resources"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Output directory (default: same as resources)"),
        )
        .arg(
            Arg::new("species")
                .short('s')
                .long("species")
                .value_name("SPECIES")
                .help("Species to process: hs, mm, or all")
                .default_value("all"),
        )
        .arg(
            Arg::new("write-motif-derived")
                .long("write-motif-derived")
                .help("Also write the full human motif-derived TF list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let species = match matches.get_one::<String>("species").unwrap().as_str() {
        "hs" | "human" => SpeciesSelection::Human,
        "mm" | "mouse" => SpeciesSelection::Mouse,
        "all" | "both" => SpeciesSelection::Both,
        _ => return Err("Invalid species selection (expected hs, mm, or all)".into()),
    };

    let config = CurationConfig {
        resources_dir: PathBuf::from(matches.get_one::<String>("resources").unwrap()),
        output_dir: matches.get_one::<String>("out-dir").map(PathBuf::from),
        species,
        write_motif_derived: matches.get_flag("write-motif-derived"),
        quiet: matches.get_flag("quiet"),
    };
    let quiet = config.quiet;

    let deriver = TfListDeriver::new(config);
    let reports = deriver.derive_all()?;

    if !quiet {
        for report in &reports {
            eprintln!("{report}");
        }
        eprintln!(
            "Curation complete! Wrote {} gene list(s) for {} species.",
            reports.iter().map(|r| r.outputs.len()).sum::<usize>(),
            reports.len()
        );
    }

    Ok(())
}
