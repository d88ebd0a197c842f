use nmt_core::table::{CorpusError, TranslationTable};
use nmt_types::TranslationEntry;
use serde::Deserialize;

// JSON structure of the parallel corpus files
#[derive(Debug, Deserialize)]
struct CorpusJson {
    pairs: Vec<PairJson>,
}

#[derive(Debug, Deserialize)]
struct PairJson {
    igala: String,
    english: String,
}

/// Parsed Igala-English parallel corpus.
pub struct IgalaCorpus {
    entries: Vec<TranslationEntry>,
}

impl IgalaCorpus {
    /// Parse a corpus from its JSON representation. Source sentences are
    /// trimmed so they match the trimmed queries used at lookup time.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let parsed: CorpusJson = serde_json::from_str(json)?;

        let entries = parsed
            .pairs
            .into_iter()
            .map(|pair| TranslationEntry {
                igala: pair.igala.trim().to_string(),
                english: pair.english,
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Build the read-only lookup table.
    pub fn into_table(self) -> Result<TranslationTable, CorpusError> {
        TranslationTable::from_entries(self.entries)
    }
}
