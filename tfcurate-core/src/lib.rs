//! # tfcurate - Transcription-Factor List Curation
//!
//! Derives curated lists of transcription-factor (TF) gene symbols for human
//! and mouse from motif-annotation tables and a literature-curated reference
//! list. The resulting plain-text gene lists feed downstream
//! gene-regulatory-network inference pipelines.
//!
//! ## Overview
//!
//! Three data-preparation steps share only file-path configuration:
//!
//! - **Mouse TF extraction**: read the mouse motif-annotation table, extract
//!   the unique `gene_name` values (MGI symbols), write them one per line.
//! - **Human TF extraction**: the same operation on the human table (HGNC
//!   symbols), kept in memory.
//! - **Curated reconciliation**: read the literature-curated human TF list
//!   (Lambert et al. 2018) and write the symbols that are also supported by
//!   the motif-derived set.
//!
//! Matching is exact and case-sensitive; no symbol normalization is
//! performed. Unique extraction preserves first-occurrence order, so
//! repeated runs over unchanged inputs produce byte-identical outputs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tfcurate_core::{TfListDeriver, config::CurationConfig};
//!
//! let deriver = TfListDeriver::new(CurationConfig {
//!     resources_dir: "resources".into(),
//!     ..Default::default()
//! });
//!
//! for report in deriver.derive_all()? {
//!     println!("{}", report);
//! }
//! # Ok::<(), tfcurate_core::types::TfCurateError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Run configuration (paths, species selection)
//! - [`constants`]: Fixed resource and output file names
//! - [`types`]: Core data types and the error enum
//! - [`motif`]: Motif-annotation table reader
//! - [`curated`]: Curated gene-list reader
//! - [`reconcile`]: Set intersection of curated and motif-derived symbols
//! - [`output`]: Plain-text gene-list writers
//! - [`engine`]: Driver composing the per-species pipelines
//! - [`results`]: Per-species run summaries
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, TfCurateError>`](types::TfCurateError).
//! Any missing file, malformed table, or absent `gene_name` column is a
//! fatal, unrecovered error; re-running after fixing inputs is safe because
//! every output file is fully overwritten.

pub mod config;
pub mod constants;
pub mod curated;
pub mod engine;
pub mod motif;
pub mod output;
pub mod reconcile;
pub mod results;
pub mod types;

pub use engine::TfListDeriver;
