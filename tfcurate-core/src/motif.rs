//! Motif-annotation table reader.
//!
//! Motif-annotation tables are tab-separated files with a header row, one
//! row per motif-to-gene annotation. Multiple motifs can annotate the same
//! gene, so the `gene_name` column is not unique per row; extraction
//! deduplicates it into a [`GeneSet`].
//!
//! Only the `gene_name` column is accessed. Every other column (motif
//! identifiers, similarity q-values, orthology scores) is carried by the
//! table format but irrelevant to list derivation and ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::constants::GENE_NAME_COLUMN;
use crate::types::{GeneSet, TfCurateError};

/// One row of a motif-annotation table, reduced to the gene symbol.
///
/// Unknown columns are ignored during deserialization.
#[derive(Debug, Deserialize)]
struct MotifRow {
    gene_name: String,
}

/// Extracts the unique gene symbols from a motif-annotation table.
///
/// `source` is only used for error reporting; the table content comes from
/// `reader`. Symbols are returned in first-occurrence order.
///
/// # Errors
///
/// Returns [`TfCurateError::EmptyTable`] when the input has no header row,
/// [`TfCurateError::MissingColumn`] when the header lacks `gene_name`, and
/// [`TfCurateError::MalformedTable`] when a record cannot be parsed.
pub fn extract_gene_names<R: Read>(reader: R, source: &Path) -> Result<GeneSet, TfCurateError> {
    let mut table = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);

    let headers = table.headers()?.clone();
    if headers.is_empty() {
        return Err(TfCurateError::EmptyTable(source.to_path_buf()));
    }
    if !headers.iter().any(|name| name == GENE_NAME_COLUMN) {
        return Err(TfCurateError::MissingColumn {
            column: GENE_NAME_COLUMN.to_string(),
            path: source.to_path_buf(),
        });
    }

    let mut genes = GeneSet::new();
    for row in table.deserialize::<MotifRow>() {
        genes.insert(row?.gene_name);
    }
    Ok(genes)
}

/// Reads a motif-annotation table from disk and extracts its unique gene
/// symbols.
///
/// # Errors
///
/// Returns [`TfCurateError::IoError`] when the file cannot be opened, plus
/// every error condition of [`extract_gene_names`].
///
/// # Examples
///
/// ```rust,no_run
/// use tfcurate_core::motif::read_motif_annotations;
///
/// let tfs = read_motif_annotations("resources/motifs-v9-nr.mgi-m0.001-o0.0.tbl")?;
/// println!("{} unique mouse TFs", tfs.len());
/// # Ok::<(), tfcurate_core::types::TfCurateError>(())
/// ```
pub fn read_motif_annotations<P: AsRef<Path>>(path: P) -> Result<GeneSet, TfCurateError> {
    let file = File::open(path.as_ref())?;
    extract_gene_names(file, path.as_ref())
}
