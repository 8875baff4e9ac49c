//! Driver composing the per-species derivation pipelines.
//!
//! [`TfListDeriver`] wires the configured file paths through the readers,
//! the reconciler, and the writers. The mouse and human pipelines are
//! independent and run in parallel when both species are selected; they
//! share no state beyond the filesystem.

use std::path::PathBuf;

use crate::config::{CurationConfig, SpeciesSelection};
use crate::constants::{
    CURATED_HUMAN_LIST, HUMAN_CURATED_TF_OUTPUT, HUMAN_MOTIF_TABLE, HUMAN_MOTIF_TF_OUTPUT,
    MOUSE_MOTIF_TABLE, MOUSE_TF_OUTPUT,
};
use crate::curated::read_curated_list;
use crate::motif::read_motif_annotations;
use crate::output::write_gene_list_file;
use crate::reconcile::intersect_with_motif_set;
use crate::results::{CurationReport, WrittenList};
use crate::types::{GeneSet, Species, TfCurateError};

/// Derives TF gene lists according to a [`CurationConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use tfcurate_core::{TfListDeriver, config::CurationConfig};
///
/// let deriver = TfListDeriver::new(CurationConfig {
///     resources_dir: "resources".into(),
///     ..Default::default()
/// });
/// let reports = deriver.derive_all()?;
/// # Ok::<(), tfcurate_core::types::TfCurateError>(())
/// ```
#[derive(Debug)]
pub struct TfListDeriver {
    /// Run configuration
    pub config: CurationConfig,
}

impl TfListDeriver {
    /// Create a deriver for the given configuration
    #[must_use]
    pub fn new(config: CurationConfig) -> Self {
        Self { config }
    }

    /// Runs the selected species pipelines and returns one report per
    /// species, mouse first when both are selected.
    ///
    /// All output files are fully overwritten; re-running over unchanged
    /// inputs is idempotent.
    ///
    /// # Errors
    ///
    /// Any missing input file, unreadable table, or absent `gene_name`
    /// column aborts the run with a [`TfCurateError`]. A pipeline that
    /// failed mid-write may leave a partial output behind; the next
    /// successful run replaces it.
    pub fn derive_all(&self) -> Result<Vec<CurationReport>, TfCurateError> {
        match self.config.species {
            SpeciesSelection::Mouse => Ok(vec![self.derive_mouse()?]),
            SpeciesSelection::Human => Ok(vec![self.derive_human()?]),
            SpeciesSelection::Both => {
                let (mouse, human) = rayon::join(|| self.derive_mouse(), || self.derive_human());
                Ok(vec![mouse?, human?])
            }
        }
    }

    /// Mouse pipeline: unique MGI symbols from the mouse motif table,
    /// written to [`MOUSE_TF_OUTPUT`].
    ///
    /// # Errors
    ///
    /// Fails when the motif table is missing or malformed, or the output
    /// file cannot be written.
    pub fn derive_mouse(&self) -> Result<CurationReport, TfCurateError> {
        let motif_derived = read_motif_annotations(self.resource_path(MOUSE_MOTIF_TABLE))?;
        let destination = self.output_path(MOUSE_TF_OUTPUT);
        write_gene_list_file(&destination, &motif_derived)?;

        Ok(CurationReport {
            species: Species::Mouse,
            unique_motif_tfs: motif_derived.len(),
            curated_total: None,
            outputs: vec![WrittenList {
                path: destination,
                symbols: motif_derived.len(),
            }],
        })
    }

    /// Human pipeline: unique HGNC symbols from the human motif table,
    /// reconciled against the curated reference list and written to
    /// [`HUMAN_CURATED_TF_OUTPUT`].
    ///
    /// When `write_motif_derived` is set, the full motif-derived set is
    /// additionally written to [`HUMAN_MOTIF_TF_OUTPUT`] before
    /// reconciliation.
    ///
    /// # Errors
    ///
    /// Fails when either input file is missing or malformed, or an output
    /// file cannot be written.
    pub fn derive_human(&self) -> Result<CurationReport, TfCurateError> {
        let motif_derived = read_motif_annotations(self.resource_path(HUMAN_MOTIF_TABLE))?;

        let mut outputs = Vec::new();
        if self.config.write_motif_derived {
            let destination = self.output_path(HUMAN_MOTIF_TF_OUTPUT);
            write_gene_list_file(&destination, &motif_derived)?;
            outputs.push(WrittenList {
                path: destination,
                symbols: motif_derived.len(),
            });
        }

        let curated = read_curated_list(self.resource_path(CURATED_HUMAN_LIST))?;
        let confirmed: GeneSet = intersect_with_motif_set(&curated, &motif_derived);

        let destination = self.output_path(HUMAN_CURATED_TF_OUTPUT);
        write_gene_list_file(&destination, &confirmed)?;
        outputs.push(WrittenList {
            path: destination,
            symbols: confirmed.len(),
        });

        Ok(CurationReport {
            species: Species::Human,
            unique_motif_tfs: motif_derived.len(),
            curated_total: Some(curated.len()),
            outputs,
        })
    }

    fn resource_path(&self, name: &str) -> PathBuf {
        self.config.resources_dir.join(name)
    }

    fn output_path(&self, name: &str) -> PathBuf {
        self.config.effective_output_dir().join(name)
    }
}
