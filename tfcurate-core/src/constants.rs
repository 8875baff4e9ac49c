/// Version string for tfcurate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column holding the TF gene symbol in motif-annotation tables
pub const GENE_NAME_COLUMN: &str = "gene_name";

/// Human motif-annotation table (HGNC symbols, motif collection v9)
pub const HUMAN_MOTIF_TABLE: &str = "motifs-v9-nr.hgnc-m0.001-o0.0.tbl";

/// Mouse motif-annotation table (MGI symbols, motif collection v9)
pub const MOUSE_MOTIF_TABLE: &str = "motifs-v9-nr.mgi-m0.001-o0.0.tbl";

/// Literature-curated human TF list (Lambert et al. 2018)
pub const CURATED_HUMAN_LIST: &str = "lambert2018.txt";

/// Output file for unique mouse motif-derived TF symbols
pub const MOUSE_TF_OUTPUT: &str = "mm_mgi_tfs.txt";

/// Output file for curated human TF symbols confirmed by motif annotations
pub const HUMAN_CURATED_TF_OUTPUT: &str = "hs_hgnc_curated_tfs.txt";

/// Optional output file for the full human motif-derived TF set
pub const HUMAN_MOTIF_TF_OUTPUT: &str = "hs_hgnc_tfs.txt";
