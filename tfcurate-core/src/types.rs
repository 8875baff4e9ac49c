use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Species covered by the motif-annotation resources.
///
/// Each species uses its own gene-symbol nomenclature: HGNC for human and
/// MGI for mouse. Symbols from different nomenclatures are never compared.
///
/// # Examples
///
/// ```rust
/// use tfcurate_core::types::Species;
///
/// assert_eq!(Species::Human.nomenclature(), "HGNC");
/// assert_eq!(Species::Mouse.nomenclature(), "MGI");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    /// Homo sapiens, HGNC gene symbols
    Human,
    /// Mus musculus, MGI gene symbols
    Mouse,
}

impl Species {
    /// Gene-symbol nomenclature authority for this species
    #[must_use]
    pub const fn nomenclature(self) -> &'static str {
        match self {
            Self::Human => "HGNC",
            Self::Mouse => "MGI",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Mouse => write!(f, "mouse"),
        }
    }
}

/// A set of unique gene symbols in first-occurrence order.
///
/// Motif-annotation tables map many motifs to the same gene, so the raw
/// `gene_name` column contains duplicates. `GeneSet` keeps each symbol once,
/// in the order it was first seen, which makes every derived output file
/// deterministic without sorting.
///
/// Membership tests are exact and case-sensitive.
///
/// # Examples
///
/// ```rust
/// use tfcurate_core::types::GeneSet;
///
/// let set: GeneSet = ["Gata1", "Sox2", "Gata1"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("Sox2"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneSet {
    symbols: Vec<String>,
    index: HashSet<String>,
}

impl GeneSet {
    /// Create an empty gene set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symbol, returning `true` if it was not already present
    pub fn insert(&mut self, symbol: String) -> bool {
        if self.index.contains(&symbol) {
            return false;
        }
        self.index.insert(symbol.clone());
        self.symbols.push(symbol);
        true
    }

    /// Exact, case-sensitive membership test
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains(symbol)
    }

    /// Number of unique symbols
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over symbols in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Symbols in first-occurrence order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.symbols
    }
}

impl FromIterator<String> for GeneSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl<'a> IntoIterator for &'a GeneSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Error types that can occur during TF list derivation
#[derive(Error, Debug)]
pub enum TfCurateError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing a motif-annotation table
    #[error("Malformed motif table: {0}")]
    MalformedTable(#[from] csv::Error),
    /// The motif-annotation table header lacks the gene-symbol column
    #[error("Column '{column}' not found in {path}")]
    MissingColumn {
        /// Name of the expected column
        column: String,
        /// Table the column was expected in
        path: PathBuf,
    },
    /// The motif-annotation table has no header row at all
    #[error("Empty motif table: {0}")]
    EmptyTable(PathBuf),
}
