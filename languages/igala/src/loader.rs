use std::path::Path;

use nmt_core::table::{CorpusError, TranslationTable};

use crate::corpus::IgalaCorpus;

pub struct CorpusLoader;

impl CorpusLoader {
    /// Load the embedded demo corpus.
    pub fn load_embedded() -> Result<TranslationTable, CorpusError> {
        let json = include_str!("../data/igala_eng.json");
        tracing::info!("Loading embedded Igala-English corpus...");
        let corpus = IgalaCorpus::from_json(json)?;
        tracing::info!("Loaded {} sentence pairs", corpus.entry_count());
        corpus.into_table()
    }

    /// Load a corpus from a file path.
    pub fn load_from_file(path: &Path) -> Result<TranslationTable, CorpusError> {
        tracing::info!("Loading Igala-English corpus from: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let corpus = IgalaCorpus::from_json(&json)?;
        tracing::info!("Loaded {} sentence pairs from file", corpus.entry_count());
        corpus.into_table()
    }
}
