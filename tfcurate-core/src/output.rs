//! Plain-text gene-list writers.
//!
//! Derived gene lists are serialized one symbol per line with a trailing
//! newline after the final entry. Writing to a path truncates any existing
//! file; there is no atomic-rename step, since a failed run is recovered by
//! re-running against the immutable inputs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::{GeneSet, TfCurateError};

/// Writes a gene set to `writer`, one symbol per line.
///
/// # Errors
///
/// Returns [`TfCurateError::IoError`] when writing fails.
///
/// # Examples
///
/// ```rust
/// use tfcurate_core::output::write_gene_list;
/// use tfcurate_core::types::GeneSet;
///
/// let genes: GeneSet = ["TP53", "GATA1"].iter().map(|s| s.to_string()).collect();
/// let mut buffer = Vec::new();
/// write_gene_list(&mut buffer, &genes)?;
/// assert_eq!(buffer, b"TP53\nGATA1\n");
/// # Ok::<(), tfcurate_core::types::TfCurateError>(())
/// ```
pub fn write_gene_list<W: Write>(writer: &mut W, genes: &GeneSet) -> Result<(), TfCurateError> {
    for symbol in genes.iter() {
        writeln!(writer, "{symbol}")?;
    }
    Ok(())
}

/// Writes a gene set to a file, overwriting any existing content.
///
/// # Errors
///
/// Returns [`TfCurateError::IoError`] when the file cannot be created or
/// written.
pub fn write_gene_list_file<P: AsRef<Path>>(path: P, genes: &GeneSet) -> Result<(), TfCurateError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_gene_list(&mut writer, genes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn gene_set(symbols: &[&str]) -> GeneSet {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_symbol_per_line_with_trailing_newline() {
        let mut buffer = Vec::new();
        write_gene_list(&mut buffer, &gene_set(&["A", "B", "C"])).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "A\nB\nC\n");
    }

    #[test]
    fn empty_set_writes_empty_output() {
        let mut buffer = Vec::new();
        write_gene_list(&mut buffer, &GeneSet::new()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn existing_file_is_fully_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tfs.txt");

        write_gene_list_file(&path, &gene_set(&["OLD1", "OLD2", "OLD3"])).unwrap();
        write_gene_list_file(&path, &gene_set(&["NEW"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW\n");
    }

    #[test]
    fn unwritable_destination_is_fatal() {
        let err = write_gene_list_file("no/such/dir/tfs.txt", &gene_set(&["A"])).unwrap_err();
        assert!(matches!(err, TfCurateError::IoError(_)));
    }
}
