use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{Focus, UiState};

/// Outcome of one input event that the backend must hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Submit(String),
    PickSample(String),
    Quit,
}

pub fn handle_event(state: &mut UiState, event: &Event) -> Option<UiAction> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, *key),
        Event::Paste(text) if state.focus == Focus::Editor => {
            state.input.push_str(text);
            None
        }
        _ => None,
    }
}

fn handle_key(state: &mut UiState, key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Esc => {
            state.should_quit = true;
            return Some(UiAction::Quit);
        }
        KeyCode::Tab => {
            state.focus = match state.focus {
                Focus::Editor => Focus::Samples,
                Focus::Samples => Focus::Editor,
            };
            return None;
        }
        _ => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => {
                state.should_quit = true;
                Some(UiAction::Quit)
            }
            KeyCode::Char('e') => {
                state.show_all_samples = !state.show_all_samples;
                None
            }
            _ => None,
        };
    }

    match state.focus {
        Focus::Editor => handle_editor_key(state, key),
        Focus::Samples => handle_samples_key(state, key),
    }
}

fn handle_editor_key(state: &mut UiState, key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Enter => {
            state.translating = true;
            Some(UiAction::Submit(state.input.clone()))
        }
        KeyCode::Backspace => {
            state.input.pop();
            None
        }
        KeyCode::Char(c) => {
            state.input.push(c);
            None
        }
        _ => None,
    }
}

fn handle_samples_key(state: &mut UiState, key: KeyEvent) -> Option<UiAction> {
    match key.code {
        KeyCode::Enter => {
            let sentence = state.selected_sample().map(str::to_string)?;
            // mirror the picked sentence into the editor, like the original
            // text area follows a sample button click
            state.input = sentence.clone();
            state.translating = true;
            Some(UiAction::PickSample(sentence))
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_sample();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_sample();
            None
        }
        _ => None,
    }
}
