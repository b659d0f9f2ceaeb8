use std::{fs::File, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use lib_colalign::{
    alignment::{Alignment, consensus::MajorityConsensus},
    alphabet::{GappedNucleicAlphabet, Letter, NucleicAlphabet, QLetter},
    feature::FeatureSet,
};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

pub fn init_logging() {
    // Fails if another test already installed the logger.
    SimpleLogger::init(LevelFilter::Trace, Config::default()).ok();
}

pub fn dna() -> Arc<dyn NucleicAlphabet> {
    Arc::new(GappedNucleicAlphabet::dna())
}

/// Reads a feature table from the `test_files` directory in the repo root.
pub fn read_features(file_name: &str) -> Result<FeatureSet> {
    // working directory of tests is this crate, the test files are in "../test_files"
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "..", "test_files", file_name]
        .iter()
        .collect();
    let file = File::open(&path).with_context(|| format!("Opening {path:?}"))?;
    Ok(FeatureSet::read_plain(file)?)
}

pub fn alignment_from_rows(id: &str, labels: &[&str], rows: &[&str]) -> Result<Alignment> {
    let mut alignment = Alignment::new(
        id,
        labels.iter().map(ToString::to_string).collect(),
        Vec::new(),
        dna(),
        MajorityConsensus::default(),
    )?;
    let rows: Vec<Vec<QLetter>> = rows
        .iter()
        .map(|row| row.bytes().map(|ascii| QLetter::from(Letter(ascii))).collect())
        .collect();
    alignment.append_each(&rows)?;
    Ok(alignment)
}

pub fn rows(alignment: &Alignment) -> Result<Vec<String>> {
    (0..alignment.row_count())
        .map(|row| Ok(alignment.extract_row(row)?.to_string()))
        .collect()
}
