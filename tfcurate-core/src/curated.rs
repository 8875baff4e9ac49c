//! Curated gene-list reader.
//!
//! Curated TF lists are newline-delimited text files of gene symbols, one
//! per line, assembled by manual literature review (Lambert et al. 2018 for
//! human). Unlike motif tables they carry no guaranteed uniqueness, and
//! their order is meaningful as a stable iteration order for downstream
//! intersection output.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::types::TfCurateError;

/// Reads a newline-delimited gene list, trimming surrounding whitespace and
/// skipping empty lines.
///
/// Duplicates and ordering are preserved as-is; deduplication is the
/// concern of the consumer (see [`crate::reconcile`]).
///
/// # Errors
///
/// Returns [`TfCurateError::IoError`] when a line cannot be read.
pub fn parse_gene_lines<R: Read>(reader: R) -> Result<Vec<String>, TfCurateError> {
    let mut symbols = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let symbol = line.trim();
        if !symbol.is_empty() {
            symbols.push(symbol.to_string());
        }
    }
    Ok(symbols)
}

/// Reads a curated gene list from disk.
///
/// # Errors
///
/// Returns [`TfCurateError::IoError`] when the file is missing or
/// unreadable.
///
/// # Examples
///
/// ```rust,no_run
/// use tfcurate_core::curated::read_curated_list;
///
/// let curated = read_curated_list("resources/lambert2018.txt")?;
/// println!("{} curated symbols", curated.len());
/// # Ok::<(), tfcurate_core::types::TfCurateError>(())
/// ```
pub fn read_curated_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TfCurateError> {
    parse_gene_lines(File::open(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lines_are_trimmed_and_blanks_skipped() {
        let input = "  TP53 \nSTAT3\n\n   \nGATA1\t\n";
        let symbols = parse_gene_lines(Cursor::new(input)).unwrap();
        assert_eq!(symbols, vec!["TP53", "STAT3", "GATA1"]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let input = "B\nA\nB\nC\n";
        let symbols = parse_gene_lines(Cursor::new(input)).unwrap();
        assert_eq!(symbols, vec!["B", "A", "B", "C"]);
    }

    #[test]
    fn missing_trailing_newline_is_tolerated() {
        let symbols = parse_gene_lines(Cursor::new("TP53\nSTAT3")).unwrap();
        assert_eq!(symbols, vec!["TP53", "STAT3"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let symbols = parse_gene_lines(Cursor::new("")).unwrap();
        assert!(symbols.is_empty());
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = read_curated_list("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, TfCurateError::IoError(_)));
    }
}
