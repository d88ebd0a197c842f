use std::sync::Arc;

use nmt_types::{RenderModel, TranslateSignal, TranslateStatus};
use uuid::Uuid;

use crate::table::TranslationTable;
use crate::text::word_count;

/// Per-session mutable record: the active input text and the most recent
/// committed lookup outcome.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub current_input: String,
    pub last_result: Option<String>,
    pub last_status: TranslateStatus,
}

/// Translation lookup session. Owns the immutable table plus one
/// `SessionState` and maps user interactions to render projections.
pub struct Session {
    id: Uuid,
    table: Arc<TranslationTable>,
    state: SessionState,
}

impl Session {
    pub fn new(table: Arc<TranslationTable>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, entries = table.len(), "session started");

        Self {
            id,
            table,
            state: SessionState::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Manual translate request with the raw text-area contents.
    ///
    /// Empty (after trimming) input and lookup misses both clear the last
    /// result but leave `current_input` untouched: only a successful lookup
    /// commits new input text.
    pub fn submit_manual_input(&mut self, text: &str) -> TranslateSignal {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            self.state.last_result = None;
            self.state.last_status = TranslateStatus::Empty;
            return TranslateSignal::MissingInput;
        }

        match self.table.lookup(trimmed) {
            Some(translation) => {
                let translation = translation.to_string();
                self.state.current_input = text.to_string();
                self.state.last_result = Some(translation.clone());
                self.state.last_status = TranslateStatus::Success;
                TranslateSignal::Success { translation }
            }
            None => {
                tracing::debug!(session = %self.id, "no corpus entry for input");
                self.state.last_result = None;
                self.state.last_status = TranslateStatus::NotFound;
                TranslateSignal::NotFound
            }
        }
    }

    /// Sample sentence picked from the corpus list. The presentation layer
    /// only offers known sentences, so this always succeeds; an unknown
    /// sentence degrades to the manual-input path instead of panicking.
    pub fn select_sample(&mut self, sentence: &str) -> TranslateSignal {
        match self.table.lookup(sentence) {
            Some(translation) => {
                let translation = translation.to_string();
                self.state.current_input = sentence.to_string();
                self.state.last_result = Some(translation.clone());
                self.state.last_status = TranslateStatus::Success;
                TranslateSignal::Success { translation }
            }
            None => self.submit_manual_input(sentence),
        }
    }

    /// Project the committed state into display data. Pure and idempotent:
    /// repeated calls replay the last transition's outcome unchanged.
    pub fn render(&self) -> RenderModel {
        RenderModel {
            status: self.state.last_status,
            input_text: self.state.current_input.clone(),
            result_text: self.state.last_result.clone(),
            input_token_count: word_count(&self.state.current_input),
            output_token_count: self
                .state
                .last_result
                .as_deref()
                .map(word_count)
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmt_types::TranslationEntry;

    fn entry(igala: &str, english: &str) -> TranslationEntry {
        TranslationEntry {
            igala: igala.to_string(),
            english: english.to_string(),
        }
    }

    fn demo_table() -> Arc<TranslationTable> {
        let entries = vec![
            entry("Ugane ki do̩mo̩ le̩", "Let there be light"),
            entry("Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀", "Amono is a farmer's child"),
            entry(
                "Tak O̩jo̩ la do̩ eju o̩lulu ko̩ ane̩.",
                "And God called the firmament Heaven.",
            ),
        ];
        Arc::new(TranslationTable::from_entries(entries).unwrap())
    }

    #[test]
    fn every_table_key_translates() {
        let table = demo_table();
        for entry in table.entries().to_vec() {
            let mut session = Session::new(table.clone());
            let signal = session.submit_manual_input(&entry.igala);
            assert_eq!(
                signal,
                TranslateSignal::Success {
                    translation: entry.english.clone()
                }
            );
            assert_eq!(session.render().result_text, Some(entry.english));
        }
    }

    #[test]
    fn unknown_sentence_yields_not_found() {
        let mut session = Session::new(demo_table());

        let signal = session.submit_manual_input("hello world");
        assert_eq!(signal, TranslateSignal::NotFound);

        let model = session.render();
        assert_eq!(model.status, TranslateStatus::NotFound);
        assert!(model.result_text.is_none());
        assert_eq!(model.output_token_count, 0);
    }

    #[test]
    fn blank_input_yields_missing_input() {
        let mut session = Session::new(demo_table());

        assert_eq!(
            session.submit_manual_input(""),
            TranslateSignal::MissingInput
        );
        assert_eq!(
            session.submit_manual_input("   "),
            TranslateSignal::MissingInput
        );
        assert_eq!(session.render().status, TranslateStatus::Empty);
    }

    #[test]
    fn select_sample_always_succeeds() {
        let table = demo_table();
        for source in table.sources().map(str::to_string).collect::<Vec<_>>() {
            let mut session = Session::new(table.clone());
            let signal = session.select_sample(&source);
            assert_eq!(signal.status(), TranslateStatus::Success);

            let model = session.render();
            assert_eq!(model.input_text, source);
            assert_eq!(
                model.result_text.as_deref(),
                table.lookup(&source),
            );
        }
    }

    #[test]
    fn render_is_idempotent() {
        let mut session = Session::new(demo_table());
        session.select_sample("Ugane ki do̩mo̩ le̩");

        assert_eq!(session.render(), session.render());

        session.submit_manual_input("hello world");
        assert_eq!(session.render(), session.render());
    }

    #[test]
    fn token_counts_track_state() {
        let mut session = Session::new(demo_table());

        let model = session.render();
        assert_eq!(model.input_token_count, 0);
        assert_eq!(model.output_token_count, 0);

        session.submit_manual_input("Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀");
        let model = session.render();
        assert_eq!(model.input_token_count, word_count(&model.input_text));
        assert_eq!(
            model.output_token_count,
            word_count(model.result_text.as_deref().unwrap())
        );
    }

    #[test]
    fn let_there_be_light_scenario() {
        let mut session = Session::new(demo_table());
        session.select_sample("Ugane ki do̩mo̩ le̩");

        let model = session.render();
        assert_eq!(model.status, TranslateStatus::Success);
        assert_eq!(model.input_text, "Ugane ki do̩mo̩ le̩");
        assert_eq!(model.result_text.as_deref(), Some("Let there be light"));
        assert_eq!(model.input_token_count, 4);
        assert_eq!(model.output_token_count, 4);
    }

    #[test]
    fn miss_keeps_previous_input_and_clears_result() {
        let mut session = Session::new(demo_table());
        session.select_sample("Ugane ki do̩mo̩ le̩");

        session.submit_manual_input("hello world");

        let model = session.render();
        assert_eq!(model.status, TranslateStatus::NotFound);
        // current_input is not overwritten with the failed text
        assert_eq!(model.input_text, "Ugane ki do̩mo̩ le̩");
        assert!(model.result_text.is_none());
    }

    #[test]
    fn blank_input_keeps_previous_input_and_clears_result() {
        let mut session = Session::new(demo_table());
        session.select_sample("Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀");

        session.submit_manual_input("  ");

        let model = session.render();
        assert_eq!(model.status, TranslateStatus::Empty);
        assert_eq!(model.input_text, "Ámọ̀nọ̀ jẹ ọmọ ọlọ́kọ̀");
        assert!(model.result_text.is_none());
    }

    #[test]
    fn surrounding_whitespace_still_matches() {
        let mut session = Session::new(demo_table());

        let signal = session.submit_manual_input("  Ugane ki do̩mo̩ le̩\n");
        assert_eq!(signal.status(), TranslateStatus::Success);
        // the input is committed as typed, not trimmed
        assert_eq!(session.render().input_text, "  Ugane ki do̩mo̩ le̩\n");
        assert_eq!(session.render().input_token_count, 4);
    }
}
