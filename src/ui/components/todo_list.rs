use crate::app::AppState;
use crate::todo::TodoItem;
use crate::ui::theme::Theme;
use crate::utils::unicode::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Leading columns of a row that act as the checkbox
pub const CHECKBOX_COLUMNS: u16 = 4;
/// Trailing columns of a row that act as the remove button
pub const REMOVE_COLUMNS: u16 = 3;

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(state.theme.placeholder));
    let inner = block.inner(area);
    f.render_widget(block, area);
    state.list_area = inner;

    if state.store.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " Nothing to do",
            Style::default().fg(state.theme.placeholder),
        ));
        f.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = state
        .store
        .items()
        .iter()
        .map(|todo| ListItem::new(render_row(todo, inner.width, &state.theme)))
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(state.theme.selected_bg));

    f.render_stateful_widget(list, inner, &mut state.list_state);
}

/// One row: checkbox, text padded to fill the width, remove marker.
fn render_row<'a>(todo: &'a TodoItem, width: u16, theme: &Theme) -> Line<'a> {
    let text_width = width.saturating_sub(CHECKBOX_COLUMNS + 1 + REMOVE_COLUMNS) as usize;
    let text = truncate_to_width(&todo.text, text_width);
    let padding = " ".repeat(text_width.saturating_sub(text.width()));

    let (checkbox, text_style) = if todo.checked {
        (
            " [x]",
            Style::default()
                .fg(theme.checked)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (" [ ]", Style::default().fg(theme.foreground))
    };

    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(theme.checkbox)),
        Span::raw(" "),
        Span::styled(text, text_style),
        Span::raw(padding),
        Span::styled(" ✕ ", Style::default().fg(theme.remove)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_row_layout_fills_width() {
        let todo = TodoItem::new(1, "Task 1");
        let line = render_row(&todo, 20, &Theme::default());

        assert_eq!(line_text(&line), " [ ] Task 1       ✕ ");
        assert_eq!(line.width(), 20);
    }

    #[test]
    fn test_row_truncates_long_text() {
        let todo = TodoItem::new(1, "Prepare the quarterly report");
        let line = render_row(&todo, 16, &Theme::default());

        assert_eq!(line_text(&line), " [ ] Prepare  ✕ ");
    }

    #[test]
    fn test_checked_row_is_struck_through() {
        let mut todo = TodoItem::new(1, "Done");
        todo.checked = true;
        let line = render_row(&todo, 20, &Theme::default());

        assert!(line_text(&line).starts_with(" [x] Done"));
        assert!(line.spans[2].style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_row_with_emoji_presentation_text() {
        let todo = TodoItem::new(1, "☺\u{FE0F}".repeat(6));
        let line = render_row(&todo, 12, &Theme::default());

        assert_eq!(line.width(), 12);
        assert!(line_text(&line).ends_with(" ✕ "));
    }

    #[test]
    fn test_row_with_control_chars() {
        let todo = TodoItem::new(1, "a\u{7}b\u{7}c\u{7}d\u{7}e");
        let line = render_row(&todo, 12, &Theme::default());

        assert_eq!(line.width(), 12);
        assert!(line_text(&line).starts_with(" [ ] a"));
    }

    #[test]
    fn test_row_narrower_than_chrome() {
        let todo = TodoItem::new(1, "Task 1");
        let line = render_row(&todo, 5, &Theme::default());
        assert_eq!(line_text(&line), " [ ]  ✕ ");
    }
}
