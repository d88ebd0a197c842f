use std::collections::HashMap;

use nmt_types::TranslationEntry;

/// Static Igala -> English mapping, loaded once and read-only for the
/// lifetime of the process.
pub struct TranslationTable {
    entries: Vec<TranslationEntry>,
    index: HashMap<String, usize>,
}

impl TranslationTable {
    /// Build a table from corpus entries, preserving corpus order for the
    /// sample listing. Source sentences must be unique.
    pub fn from_entries(entries: Vec<TranslationEntry>) -> Result<Self, CorpusError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.igala.clone(), i).is_some() {
                return Err(CorpusError::DuplicateSource(entry.igala.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Exact-match lookup of a trimmed source sentence.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.index
            .get(source)
            .map(|&i| self.entries[i].english.as_str())
    }

    pub fn contains(&self, source: &str) -> bool {
        self.index.contains_key(source)
    }

    /// Source sentences in corpus order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.igala.as_str())
    }

    /// All pairs in corpus order.
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("duplicate source sentence: {0}")]
    DuplicateSource(String),

    #[error("invalid corpus format: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(igala: &str, english: &str) -> TranslationEntry {
        TranslationEntry {
            igala: igala.to_string(),
            english: english.to_string(),
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let table = TranslationTable::from_entries(vec![
            entry("Ugane ki do̩mo̩ le̩", "Let there be light"),
            entry("Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀", "Amono is a farmer's child"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup("Ugane ki do̩mo̩ le̩"),
            Some("Let there be light")
        );
        assert!(table.lookup("hello world").is_none());
        assert!(table.contains("Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀"));
    }

    #[test]
    fn sources_keep_corpus_order() {
        let table = TranslationTable::from_entries(vec![
            entry("b", "2"),
            entry("a", "1"),
            entry("c", "3"),
        ])
        .unwrap();

        let sources: Vec<&str> = table.sources().collect();
        assert_eq!(sources, vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_source_is_rejected() {
        let result = TranslationTable::from_entries(vec![
            entry("a", "1"),
            entry("a", "2"),
        ]);

        assert!(matches!(result, Err(CorpusError::DuplicateSource(s)) if s == "a"));
    }
}
