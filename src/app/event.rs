use super::mode::Mode;
use super::state::AppState;
use crate::ui::components::todo_list::{CHECKBOX_COLUMNS, REMOVE_COLUMNS};
use crate::utils::unicode::{
    next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::trace;

/// Rows moved per mouse wheel notch
const SCROLL_STEP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClickZone {
    Checkbox,
    Content,
    Remove,
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    trace!(?key, mode = %state.mode, "key event");

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            state.show_help = false;
        }
        return;
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::Insert => handle_insert_mode(key, state),
    }
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_cursor_up(),
        KeyCode::Char('g') | KeyCode::Home => state.move_cursor_to_top(),
        KeyCode::Char('G') | KeyCode::End => state.move_cursor_to_bottom(),
        KeyCode::PageUp => state.page_up(),
        KeyCode::PageDown => state.page_down(),
        KeyCode::Char(' ') | KeyCode::Char('x') => state.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => state.remove_selected(),
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => state.mode = Mode::Insert,
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc | KeyCode::Tab => state.mode = Mode::Navigate,
        KeyCode::Enter => state.submit_input(),
        KeyCode::Backspace => {
            if state.input_cursor_pos > 0 {
                let prev = prev_char_boundary(&state.input_buffer, state.input_cursor_pos);
                state.input_buffer.drain(prev..state.input_cursor_pos);
                state.input_cursor_pos = prev;
            }
        }
        KeyCode::Delete => {
            if state.input_cursor_pos < state.input_buffer.len() {
                let next = next_char_boundary(&state.input_buffer, state.input_cursor_pos);
                state.input_buffer.drain(state.input_cursor_pos..next);
            }
        }
        KeyCode::Left if ctrl => {
            state.input_cursor_pos = prev_word_boundary(&state.input_buffer, state.input_cursor_pos);
        }
        KeyCode::Right if ctrl => {
            state.input_cursor_pos = next_word_boundary(&state.input_buffer, state.input_cursor_pos);
        }
        KeyCode::Left => {
            state.input_cursor_pos = prev_char_boundary(&state.input_buffer, state.input_cursor_pos);
        }
        KeyCode::Right => {
            state.input_cursor_pos = next_char_boundary(&state.input_buffer, state.input_cursor_pos);
        }
        KeyCode::Home => state.input_cursor_pos = 0,
        KeyCode::End => state.input_cursor_pos = state.input_buffer.len(),
        KeyCode::Char('w') if ctrl => {
            let start = prev_word_boundary(&state.input_buffer, state.input_cursor_pos);
            state.input_buffer.drain(start..state.input_cursor_pos);
            state.input_cursor_pos = start;
        }
        KeyCode::Char(c) if !ctrl => {
            state.input_buffer.insert(state.input_cursor_pos, c);
            state.input_cursor_pos += c.len_utf8();
        }
        _ => {}
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) {
    if state.show_help {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            for _ in 0..SCROLL_STEP {
                state.move_cursor_up();
            }
        }
        MouseEventKind::ScrollDown => {
            for _ in 0..SCROLL_STEP {
                state.move_cursor_down();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);

            if state.input_area.contains(position) {
                state.mode = Mode::Insert;
                return;
            }

            if let Some((index, zone)) = map_click_to_item(state, position) {
                state.mode = Mode::Navigate;
                match zone {
                    ClickZone::Checkbox => state.toggle_at(index),
                    ClickZone::Remove => state.remove_at(index),
                    ClickZone::Content => state.move_cursor_to(index),
                }
            }
        }
        _ => {}
    }
}

fn map_click_to_item(state: &AppState, position: Position) -> Option<(usize, ClickZone)> {
    let area = state.list_area;
    if !area.contains(position) {
        return None;
    }

    let index = state.list_state.offset() + (position.y - area.y) as usize;
    if index >= state.store.len() {
        return None;
    }

    let column = position.x - area.x;
    let zone = if column < CHECKBOX_COLUMNS {
        ClickZone::Checkbox
    } else if column >= area.width.saturating_sub(REMOVE_COLUMNS) {
        ClickZone::Remove
    } else {
        ClickZone::Content
    };

    Some((index, zone))
}
