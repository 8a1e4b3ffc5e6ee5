pub mod status_bar;
pub mod todo_insert;
pub mod todo_list;

use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest the centered template frame gets
const TEMPLATE_MAX_WIDTH: u16 = 80;
const INPUT_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Template
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_template(f, state, chunks[0]);
    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

/// Centered frame with the app title, holding the input box and the list.
fn render_template(f: &mut Frame, state: &mut AppState, area: Rect) {
    let width = area.width.min(TEMPLATE_MAX_WIDTH);
    let frame_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Todo List ",
            Style::default()
                .fg(state.theme.title)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(state.theme.background));
    let inner = block.inner(frame_area);
    f.render_widget(block, frame_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(1)])
        .split(inner);

    todo_insert::render(f, state, chunks[0]);
    todo_list::render(f, state, chunks[1]);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let key_style = Style::default().fg(state.theme.checkbox).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);

    let entries = [
        ("j / ↓, k / ↑", "Move selection"),
        ("g / G", "First / last task"),
        ("PgUp / PgDn", "Move by a page"),
        ("Space / x", "Toggle done"),
        ("d / Del", "Remove task"),
        ("i / a / Tab", "Focus input box"),
        ("Enter", "Add task (input box)"),
        ("Esc / Tab", "Back to list (input box)"),
        ("Ctrl+W", "Delete word (input box)"),
        ("Click [ ] / ✕", "Toggle / remove"),
        ("q / Esc", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    lines.extend(entries.iter().map(|(keys, desc)| {
        Line::from(vec![
            Span::styled(format!("  {keys:<16}"), key_style),
            Span::styled(*desc, desc_style),
        ])
    }));

    let area = f.area();
    let width = 50.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help (? to close) ")
            .style(Style::default().bg(state.theme.status_bar_bg)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
