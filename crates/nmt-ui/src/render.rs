use nmt_config::model::ModelInfoConfig;
use nmt_types::{RenderModel, TranslateStatus, TranslationEntry};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::state::{Focus, UiState};

const INPUT_PLACEHOLDER: &str = "E̩gba abakwane̩ ejodudu O̩jo̩ nyi efojale kpai ane̩-ile̩.";

const DEMO_BANNER: &str =
    "Pre-computed translations for fast deployment. The full model lives on the Hugging Face Hub.";

const ABOUT_TEXT: &str = "Fine-tuned NLLB-200 for Igala, a low-resource Nigerian language \
not included in NLLB's original 200 languages. Trained on a parallel Igala-English corpus \
using Yoruba as a linguistic proxy. Best suited for formal and literary text; unseen \
sentences need the full model.";

pub struct RenderContext<'a> {
    pub entries: &'a [TranslationEntry],
    pub model_info: &'a ModelInfoConfig,
    pub demo_mode: bool,
    pub preview_chars: usize,
}

pub fn render(f: &mut Frame, state: &mut UiState, ctx: &RenderContext<'_>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(40)])
        .split(f.area());

    render_sidebar(f, columns[0], ctx);
    render_main(f, columns[1], state, ctx);

    if state.show_all_samples {
        render_samples_overlay(f, state, ctx);
    }
}

fn render_main(f: &mut Frame, area: Rect, state: &mut UiState, ctx: &RenderContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_input_pane(f, rows[0], state);

    let result = result_panel(state.render.as_ref(), state.translating)
        .block(pane_block("English Translation", false));
    f.render_widget(result, rows[1]);

    render_samples(f, rows[2], state, ctx);

    let help = Paragraph::new(
        "Tab to switch focus, Enter to translate or pick a sample, Ctrl+E to view all samples, Esc to quit",
    )
    .style(Style::default().fg(Color::Gray));
    f.render_widget(help, rows[3]);
}

fn render_input_pane(f: &mut Frame, area: Rect, state: &UiState) {
    let focused = state.focus == Focus::Editor;

    let body = if state.input.is_empty() {
        Paragraph::new(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(state.input.as_str())
    };

    f.render_widget(
        body.block(pane_block("Igala Input", focused))
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// The translation pane contents. The main view and the expanded overlay
/// both render through here, so the two views can never disagree.
pub fn result_panel(model: Option<&RenderModel>, translating: bool) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = if translating {
        vec![Line::from(Span::styled(
            "Translating...",
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        match model {
            None => vec![Line::from(Span::styled(
                "Enter Igala text and press Enter, or pick a sample sentence.",
                Style::default().fg(Color::DarkGray),
            ))],
            Some(model) => result_lines(model),
        }
    };

    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn result_lines(model: &RenderModel) -> Vec<Line<'static>> {
    match model.status {
        TranslateStatus::Empty => vec![warning("Please enter some text to translate")],
        TranslateStatus::NotFound => vec![
            warning("This sentence is not in the demo corpus."),
            warning("Try one of the sample sentences below, or use the full model."),
        ],
        TranslateStatus::Success => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Translation Complete",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];

            if let Some(result) = &model.result_text {
                lines.push(Line::from(result.clone()));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Input tokens: {}", model.input_token_count),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                format!("Output tokens: {}", model.output_token_count),
                Style::default().fg(Color::Gray),
            )));

            lines
        }
    }
}

fn render_samples(f: &mut Frame, area: Rect, state: &mut UiState, ctx: &RenderContext<'_>) {
    let focused = state.focus == Focus::Samples;

    let items: Vec<ListItem<'_>> = state
        .samples
        .iter()
        .map(|sample| ListItem::new(preview(sample, ctx.preview_chars)))
        .collect();

    let list = List::new(items)
        .block(pane_block("Sample Sentences", focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut state.sample_state);
}

fn render_sidebar(f: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let mut lines = Vec::new();

    if ctx.demo_mode {
        lines.push(Line::from(Span::styled(
            "Demo Mode",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(DEMO_BANNER));
        lines.push(Line::from(""));
    }

    lines.push(metric("Base Model", &ctx.model_info.base_model));
    lines.push(metric("Parameters", &ctx.model_info.parameters));
    lines.push(metric(
        "Training Data",
        &format!("{} sentence pairs", ctx.model_info.training_pairs),
    ));
    lines.push(metric("Corpus Size", &ctx.model_info.corpus_size));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "About This Project",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(ABOUT_TEXT));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Full model: {}", ctx.model_info.model_hub_url),
        Style::default().fg(Color::DarkGray),
    )));

    let sidebar = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Model Information"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(sidebar, area);
}

fn render_samples_overlay(f: &mut Frame, state: &UiState, ctx: &RenderContext<'_>) {
    let area = popup_area(f.area(), 80, 80);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("All Samples with Translations");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(inner);

    // Second invocation of the shared result panel
    let detail = result_panel(state.render.as_ref(), state.translating)
        .block(pane_block("Current Translation", false));
    f.render_widget(detail, sections[0]);

    let mut lines = Vec::new();
    for (i, entry) in ctx.entries.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. Igala: {}", i + 1, entry.igala),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("   English: {}", entry.english),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), sections[1]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn metric(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}

fn warning(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow),
    ))
}

/// Truncated preview label for a sample sentence, safe on multi-byte text.
fn preview(sentence: &str, max_chars: usize) -> String {
    if sentence.chars().count() <= max_chars {
        sentence.to_string()
    } else {
        let truncated: String = sentence.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
