//! Domain layer - messages, timeline events and the reducer
//!
//! Nothing here performs I/O or reads the clock; the time zone used for
//! event timestamps is handed to the [`Reducer`].

pub mod event;
pub mod message;
pub mod network;
pub mod reducer;
pub mod state;
pub mod time;

pub use event::Event;
pub use message::{Call, Message, Payload};
pub use network::chain_id_to_network;
pub use reducer::Reducer;
pub use state::State;
pub use time::format_time;
