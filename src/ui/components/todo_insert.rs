use crate::app::mode::Mode;
use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "What needs to be done?";
const SUBMIT_MARKER: &str = " [+]";

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    state.input_area = area;
    let focused = state.mode == Mode::Insert;

    let border_style = if focused {
        Style::default().fg(state.theme.input_active)
    } else {
        Style::default().fg(state.theme.placeholder)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(SUBMIT_MARKER.len() as u16),
        ])
        .split(inner);
    let text_area = chunks[0];

    if state.input_buffer.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default().fg(state.theme.placeholder),
        ));
        f.render_widget(placeholder, text_area);
    } else {
        let cursor_column = state.input_buffer[..state.input_cursor_pos].width() as u16;
        let scroll = cursor_column.saturating_sub(text_area.width.saturating_sub(1));

        let input = Paragraph::new(state.input_buffer.as_str())
            .style(Style::default().fg(state.theme.foreground))
            .scroll((0, scroll));
        f.render_widget(input, text_area);
    }

    let submit_style = if focused {
        Style::default()
            .fg(state.theme.input_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(state.theme.placeholder)
    };
    f.render_widget(Paragraph::new(Span::styled(SUBMIT_MARKER, submit_style)), chunks[1]);

    if focused {
        let cursor_column = state.input_buffer[..state.input_cursor_pos].width() as u16;
        let visible_column = cursor_column.min(text_area.width.saturating_sub(1));
        f.set_cursor_position((text_area.x + visible_column, text_area.y));
    }
}
