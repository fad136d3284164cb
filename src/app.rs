use std::sync::Arc;

use chrono::{Local, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{Event, Message, Reducer, State};

pub struct App<Tz: TimeZone = Local> {
    reducer: Reducer<Tz>,
    state: Arc<State>,
    selected: Option<usize>,
    pub status: String,
    pub should_quit: bool,
}

impl<Tz: TimeZone> App<Tz> {
    pub fn new(reducer: Reducer<Tz>) -> Self {
        Self {
            reducer,
            state: State::initial(),
            selected: None,
            status: String::new(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &Arc<State> {
        &self.state
    }

    /// Feed one message through the reducer. Returns whether the state changed.
    pub fn apply(&mut self, message: &Message) -> bool {
        let previous = Arc::clone(&self.state);
        let next = self.reducer.reduce(Arc::clone(&previous), message);
        if Arc::ptr_eq(&previous, &next) {
            tracing::trace!(kind = message.kind(), "message left state unchanged");
            return false;
        }

        let following = match self.selected {
            None => true,
            Some(idx) => idx + 1 >= previous.events.len(),
        };
        self.state = next;
        let len = self.state.events.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            _ if following => Some(len - 1),
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
        self.status = format!("{} applied", message.kind());
        true
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected.and_then(|idx| self.state.events.get(idx))
    }

    pub fn select_next(&mut self) {
        let len = self.state.events.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.state.events.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map(|idx| idx.saturating_sub(1)).unwrap_or(0));
    }

    pub fn select_first(&mut self) {
        if !self.state.events.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        self.selected = self.state.events.len().checked_sub(1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => {}
        }
    }
}
