use nmt_types::RenderModel;
use ratatui::widgets::ListState;

/// Which pane owns key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Samples,
}

/// UI-side state, separate from the session owned by the backend. The
/// editor buffer lives here; the backend only ever sees submitted text.
pub struct UiState {
    pub input: String,
    /// Latest projection received from the backend
    pub render: Option<RenderModel>,
    pub samples: Vec<String>,
    pub sample_state: ListState,
    pub focus: Focus,
    pub show_all_samples: bool,
    /// A translate request is in flight
    pub translating: bool,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(samples: Vec<String>) -> Self {
        let mut sample_state = ListState::default();
        if !samples.is_empty() {
            sample_state.select(Some(0));
        }

        Self {
            input: String::new(),
            render: None,
            samples,
            sample_state,
            focus: Focus::Editor,
            show_all_samples: false,
            translating: false,
            should_quit: false,
        }
    }

    pub fn next_sample(&mut self) {
        if self.samples.is_empty() {
            return;
        }
        let i = match self.sample_state.selected() {
            Some(i) => {
                if i >= self.samples.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.sample_state.select(Some(i));
    }

    pub fn previous_sample(&mut self) {
        if self.samples.is_empty() {
            return;
        }
        let i = match self.sample_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.samples.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.sample_state.select(Some(i));
    }

    pub fn selected_sample(&self) -> Option<&str> {
        self.sample_state
            .selected()
            .and_then(|i| self.samples.get(i))
            .map(String::as_str)
    }
}
