//! View state folded from the message stream

use std::sync::Arc;

use serde::Serialize;

use super::event::Event;
use super::message::Call;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub current_network: Option<String>,
    /// Always empty until call tracking lands
    pub calls: Vec<Call>,
    /// Append-only, except that `INIT` starts a new log
    pub events: Vec<Event>,
}

impl State {
    /// No network, no calls, no events
    pub fn initial() -> Arc<State> {
        Arc::new(State::default())
    }

    /// Copy of this state with `event` appended
    pub(crate) fn with_event(&self, event: Event) -> State {
        let mut events = Vec::with_capacity(self.events.len() + 1);
        events.extend_from_slice(&self.events);
        events.push(event);
        State {
            current_network: self.current_network.clone(),
            calls: self.calls.clone(),
            events,
        }
    }
}
