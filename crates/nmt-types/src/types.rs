use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    UiEvent(UiEvent),
    /// Manual translate request carrying the raw text-area contents
    TranslateRequest(String),
    /// Sample sentence picked from the corpus list
    SelectSample(String),
    /// Latest session projection for the UI to display
    ShowRender(RenderModel),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Close,
}

/// One corpus pair, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub igala: String,
    pub english: String,
}

/// Outcome of the last committed session transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslateStatus {
    #[default]
    Empty,
    NotFound,
    Success,
}

/// Signal emitted by a single translate or sample-select operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateSignal {
    MissingInput,
    NotFound,
    Success { translation: String },
}

impl TranslateSignal {
    pub fn status(&self) -> TranslateStatus {
        match self {
            TranslateSignal::MissingInput => TranslateStatus::Empty,
            TranslateSignal::NotFound => TranslateStatus::NotFound,
            TranslateSignal::Success { .. } => TranslateStatus::Success,
        }
    }
}

/// Side-effect-free projection of session state into display-ready fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub status: TranslateStatus,
    pub input_text: String,
    pub result_text: Option<String>,
    /// Whitespace word count of the active input
    pub input_token_count: usize,
    /// Whitespace word count of the result, 0 if absent
    pub output_token_count: usize,
}
