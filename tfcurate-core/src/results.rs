use std::fmt;
use std::path::PathBuf;

use crate::types::Species;

/// A gene list written to disk during a derivation run.
#[derive(Debug, Clone)]
pub struct WrittenList {
    /// Destination the list was written to
    pub path: PathBuf,
    /// Number of unique symbols in the list
    pub symbols: usize,
}

/// Summary of one species' TF list derivation.
///
/// # Examples
///
/// ```rust,no_run
/// use tfcurate_core::{TfListDeriver, config::CurationConfig};
///
/// let deriver = TfListDeriver::new(CurationConfig::default());
/// for report in deriver.derive_all()? {
///     eprintln!("{}", report);
/// }
/// # Ok::<(), tfcurate_core::types::TfCurateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CurationReport {
    /// Species this report covers.
    pub species: Species,

    /// Number of unique TF symbols extracted from the motif table.
    pub unique_motif_tfs: usize,

    /// Number of entries in the curated reference list (with duplicates),
    /// `None` for species without a curated list.
    pub curated_total: Option<usize>,

    /// Gene lists written to disk for this species.
    pub outputs: Vec<WrittenList>,
}

impl fmt::Display for CurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} unique motif-derived TFs",
            self.species,
            self.species.nomenclature(),
            self.unique_motif_tfs
        )?;
        if let Some(curated) = self.curated_total {
            write!(f, ", {} curated entries", curated)?;
        }
        for written in &self.outputs {
            write!(
                f,
                "; wrote {} ({} symbols)",
                written.path.display(),
                written.symbols
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_display_mentions_counts_and_outputs() {
        let report = CurationReport {
            species: Species::Human,
            unique_motif_tfs: 1721,
            curated_total: Some(1639),
            outputs: vec![WrittenList {
                path: PathBuf::from("hs_hgnc_curated_tfs.txt"),
                symbols: 1553,
            }],
        };

        let text = report.to_string();
        assert!(text.contains("human (HGNC)"));
        assert!(text.contains("1721 unique motif-derived TFs"));
        assert!(text.contains("1639 curated entries"));
        assert!(text.contains("hs_hgnc_curated_tfs.txt (1553 symbols)"));
    }

    #[test]
    fn report_display_without_curated_list() {
        let report = CurationReport {
            species: Species::Mouse,
            unique_motif_tfs: 1500,
            curated_total: None,
            outputs: vec![],
        };

        let text = report.to_string();
        assert!(text.contains("mouse (MGI)"));
        assert!(!text.contains("curated"));
    }
}
