//! Folds messages into the timeline state
//!
//! `reduce` never fails. A message that changes nothing hands back the very
//! same `Arc`, so callers can detect no-ops with `Arc::ptr_eq`.

use std::sync::Arc;

use chrono::{Local, TimeZone};

use super::event::Event;
use super::message::{Message, Payload};
use super::network::chain_id_to_network;
use super::state::State;
use super::time::format_time;

#[derive(Debug, Clone)]
pub struct Reducer<Tz: TimeZone = Local> {
    zone: Tz,
}

impl Default for Reducer<Local> {
    fn default() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> Reducer<Tz> {
    /// Event times are rendered in `zone`.
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn reduce(&self, state: Arc<State>, message: &Message) -> Arc<State> {
        match &message.payload {
            Payload::Replay { messages } => self.reduce_all(state, messages),
            Payload::Init => self.init(message),
            Payload::NetworkChanged { chain_id } => {
                self.network_changed(state, *chain_id, message.timestamp)
            }
            Payload::BlockNumberChanged {
                chain_id,
                block_number,
            } => self.block_number_changed(&state, *chain_id, *block_number, message.timestamp),
            // Call tracking is not wired up yet; these leave the state alone.
            Payload::CallsChanged { .. } => state,
            Payload::MulticallSuccess { .. } => state,
            Payload::MulticallError { .. } => state,
            Payload::Unknown => {
                tracing::trace!("ignoring message with unknown type");
                state
            }
        }
    }

    /// Apply `messages` in order, starting from `state`.
    pub fn reduce_all<'a, I>(&self, state: Arc<State>, messages: I) -> Arc<State>
    where
        I: IntoIterator<Item = &'a Message>,
    {
        messages
            .into_iter()
            .fold(state, |acc, message| self.reduce(acc, message))
    }

    fn time(&self, timestamp: i64) -> String {
        format_time(timestamp, &self.zone)
    }

    fn init(&self, message: &Message) -> Arc<State> {
        tracing::debug!(timestamp = message.timestamp, "timeline reset");
        Arc::new(State {
            events: vec![Event::Init {
                time: self.time(message.timestamp),
            }],
            ..State::default()
        })
    }

    fn network_changed(
        &self,
        state: Arc<State>,
        chain_id: Option<u64>,
        timestamp: i64,
    ) -> Arc<State> {
        let Some(chain_id) = chain_id else {
            if state.current_network.is_none() {
                return state;
            }
            tracing::debug!("network disconnected");
            let mut next = state.with_event(Event::NetworkDisconnected {
                time: self.time(timestamp),
            });
            next.current_network = None;
            return Arc::new(next);
        };

        let network = chain_id_to_network(chain_id);
        if state.current_network.as_deref() == Some(network.as_str()) {
            return state;
        }

        tracing::debug!(chain_id, network = %network, "network connected");
        let mut next = state.with_event(Event::NetworkConnected {
            network,
            time: self.time(timestamp),
        });
        // The connected network is only recorded in the event, never in
        // `current_network`.
        next.current_network = None;
        Arc::new(next)
    }

    fn block_number_changed(
        &self,
        state: &State,
        chain_id: u64,
        block_number: u64,
        timestamp: i64,
    ) -> Arc<State> {
        tracing::debug!(chain_id, block_number, "block found");
        Arc::new(state.with_event(Event::BlockFound {
            network: chain_id_to_network(chain_id),
            time: self.time(timestamp),
            block_number,
        }))
    }
}
