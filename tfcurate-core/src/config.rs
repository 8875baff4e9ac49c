use std::path::PathBuf;

/// Which species pipelines to run.
///
/// The mouse and human derivations are independent; running one never
/// requires the other species' resource files to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesSelection {
    /// Only the human pipeline (motif extraction + curated reconciliation)
    Human,
    /// Only the mouse pipeline (motif extraction)
    Mouse,
    /// Both pipelines, run in parallel
    Both,
}

/// Configuration settings for a TF list derivation run.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use tfcurate_core::config::CurationConfig;
///
/// let config = CurationConfig::default();
/// ```
///
/// ## Custom resource and output locations
///
/// ```rust
/// use tfcurate_core::config::{CurationConfig, SpeciesSelection};
///
/// let config = CurationConfig {
///     resources_dir: "data/resources".into(),
///     output_dir: Some("derived".into()),
///     species: SpeciesSelection::Human,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CurationConfig {
    /// Directory containing the motif-annotation tables and the curated
    /// human TF list.
    ///
    /// See [`crate::constants`] for the fixed file names expected here.
    ///
    /// **Default**: `resources`
    pub resources_dir: PathBuf,

    /// Directory the derived gene lists are written to.
    ///
    /// Existing output files are fully overwritten on every run.
    ///
    /// **Default**: `None` (write next to the inputs in `resources_dir`)
    pub output_dir: Option<PathBuf>,

    /// Species pipelines to run.
    ///
    /// **Default**: [`SpeciesSelection::Both`]
    pub species: SpeciesSelection,

    /// Also persist the full human motif-derived TF list.
    ///
    /// The upstream script computed this list but never wrote it to disk
    /// because its output path was reassigned before use. When `true`, the
    /// list is written to `hs_hgnc_tfs.txt` alongside the curated
    /// intersection.
    ///
    /// **Default**: `false`
    pub write_motif_derived: bool,

    /// Suppress the per-species summary printed to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from("resources"),
            output_dir: None,
            species: SpeciesSelection::Both,
            write_motif_derived: false,
            quiet: false,
        }
    }
}

impl CurationConfig {
    /// Directory output files are written to (falls back to the resources
    /// directory when no explicit output directory is configured).
    #[must_use]
    pub fn effective_output_dir(&self) -> &PathBuf {
        self.output_dir.as_ref().unwrap_or(&self.resources_dir)
    }
}
