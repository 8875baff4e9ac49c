#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;

/// Fixed fixture content for the mouse motif-annotation table.
pub const MOUSE_TABLE: &str = "#motif_id\tgene_name\tdescription\n\
                               M001\tGata1\tzinc finger\n\
                               M002\tSox2\tHMG box\n\
                               M003\tGata1\tzinc finger\n\
                               M004\tPou5f1\tPOU domain\n";

/// Fixed fixture content for the human motif-annotation table.
pub const HUMAN_TABLE: &str = "#motif_id\tgene_name\tdescription\n\
                               M101\tTP53\tp53 family\n\
                               M102\tSTAT3\tSTAT family\n\
                               M103\tTP53\tp53 family\n\
                               M104\tKLF4\tzinc finger\n";

/// Fixed fixture content for the curated human TF list.
pub const CURATED_LIST: &str = "TP53\nNOTAF\nKLF4\nTP53\n";

/// Writes the standard fixture files into a resources directory.
pub fn write_fixtures(dir: &Path) {
    fs::write(dir.join("motifs-v9-nr.mgi-m0.001-o0.0.tbl"), MOUSE_TABLE).unwrap();
    fs::write(dir.join("motifs-v9-nr.hgnc-m0.001-o0.0.tbl"), HUMAN_TABLE).unwrap();
    fs::write(dir.join("lambert2018.txt"), CURATED_LIST).unwrap();
}

/// Runs the tfcurate CLI against a resources directory with extra arguments.
pub fn run_tfcurate(resources: &Path, extra_args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tfcurate")?;
    cmd.arg("-r").arg(resources);
    for arg in extra_args {
        cmd.arg(arg);
    }
    cmd.assert().success();
    Ok(())
}
