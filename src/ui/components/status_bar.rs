use crate::app::mode::Mode;
use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if let Some(message) = state.visible_status_message() {
        render_status_message(f, message, area);
        return;
    }

    let nav_hint = match state.mode {
        Mode::Navigate => "? help  q quit",
        Mode::Insert => "Enter add  Esc back",
    };

    let left_content = format!(
        " {} | {} items, {} done | {}",
        state.mode,
        state.store.len(),
        state.store.checked_count(),
        nav_hint
    );
    let version_text = format!("v{VERSION} ");

    let padding = area
        .width
        .saturating_sub(left_content.width() as u16 + version_text.width() as u16);

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{}{:padding$}{}",
        left_content,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

fn render_status_message(f: &mut Frame, message: &str, area: Rect) {
    let display_message = format!(" {message} ");

    let style = Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(0, 100, 0))
        .add_modifier(Modifier::BOLD);

    let padding = area.width.saturating_sub(display_message.width() as u16);
    let status_line = format!(
        "{}{:padding$}",
        display_message,
        "",
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoStore;
    use crate::ui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn status_row(state: &AppState, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, state, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_status_message_with_multibyte_chars_fills_row() {
        let mut state = AppState::new(TodoStore::with_seed(1), Theme::default());
        state.set_status_message("Added “oat milk” ✓".to_string());

        let mut terminal = Terminal::new(TestBackend::new(30, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, &state, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        assert_eq!(buffer[(29, 0)].bg, Color::Rgb(0, 100, 0));
        assert!(status_row(&state, 30).starts_with(" Added “oat milk” ✓"));
    }

    #[test]
    fn test_version_stays_right_aligned() {
        let state = AppState::new(TodoStore::with_seed(3), Theme::default());
        let row = status_row(&state, 80);

        assert!(row.starts_with(" NAVIGATE | 3 items, 0 done"));
        assert!(row.ends_with(&format!("v{VERSION} ")));
    }
}
