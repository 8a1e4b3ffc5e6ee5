use super::mode::Mode;
use crate::todo::{TodoId, TodoItem, TodoStore};
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::time::Instant;
use tracing::debug;

/// Seconds a status message stays on screen
const STATUS_MESSAGE_SECS: u64 = 3;

pub struct AppState {
    pub store: TodoStore,
    pub cursor_position: usize,
    pub list_state: ListState,
    pub mode: Mode,
    pub input_buffer: String,
    /// Byte offset into `input_buffer`, always on a char boundary
    pub input_cursor_pos: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
    /// Input box area from the last render, for click handling
    pub input_area: Rect,
    /// List rows area from the last render, for click handling and paging
    pub list_area: Rect,
}

impl AppState {
    pub fn new(store: TodoStore, theme: Theme) -> Self {
        let mut state = Self {
            store,
            cursor_position: 0,
            list_state: ListState::default(),
            mode: Mode::default(),
            input_buffer: String::new(),
            input_cursor_pos: 0,
            should_quit: false,
            show_help: false,
            theme,
            status_message: None,
            input_area: Rect::default(),
            list_area: Rect::default(),
        };
        state.sync_list_state();
        state
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.store.items().get(self.cursor_position)
    }

    fn selected_id(&self) -> Option<TodoId> {
        self.selected_item().map(|item| item.id)
    }

    pub fn sync_list_state(&mut self) {
        if self.store.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.cursor_position));
        }
    }

    pub fn clamp_cursor(&mut self) {
        if !self.store.is_empty() {
            self.cursor_position = self.cursor_position.min(self.store.len() - 1);
        } else {
            self.cursor_position = 0;
        }
        self.sync_list_state();
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
        self.sync_list_state();
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_position + 1 < self.store.len() {
            self.cursor_position += 1;
        }
        self.sync_list_state();
    }

    pub fn move_cursor_to(&mut self, index: usize) {
        self.cursor_position = index;
        self.clamp_cursor();
    }

    pub fn move_cursor_to_top(&mut self) {
        self.move_cursor_to(0);
    }

    pub fn move_cursor_to_bottom(&mut self) {
        self.move_cursor_to(self.store.len().saturating_sub(1));
    }

    /// Rows in one screenful of the list, at least one.
    pub fn page_size(&self) -> usize {
        (self.list_area.height as usize).max(1)
    }

    pub fn page_up(&mut self) {
        self.move_cursor_to(self.cursor_position.saturating_sub(self.page_size()));
    }

    pub fn page_down(&mut self) {
        self.move_cursor_to(self.cursor_position.saturating_add(self.page_size()));
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle(id);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.remove(id);
            self.clamp_cursor();
        }
    }

    pub fn toggle_at(&mut self, index: usize) {
        self.move_cursor_to(index);
        self.toggle_selected();
    }

    pub fn remove_at(&mut self, index: usize) {
        self.move_cursor_to(index);
        self.remove_selected();
    }

    /// Add the input box text as a new task. Blank input is rejected here,
    /// the store itself accepts any text.
    pub fn submit_input(&mut self) {
        let text = self.input_buffer.trim();
        if text.is_empty() {
            self.set_status_message("Cannot add an empty task".to_string());
            return;
        }

        let id = self.store.insert(text.to_string());
        debug!(id, "task added from input box");

        self.input_buffer.clear();
        self.input_cursor_pos = 0;
        self.move_cursor_to_bottom();
        self.set_status_message(format!("Added task #{id}"));
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, time)) = &self.status_message
            && time.elapsed().as_secs() > STATUS_MESSAGE_SECS
        {
            self.status_message = None;
        }
    }

    pub fn visible_status_message(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, time)| time.elapsed().as_secs() <= STATUS_MESSAGE_SECS)
            .map(|(message, _)| message.as_str())
    }
}
