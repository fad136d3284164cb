//! Messages delivered to the devtools panel
//!
//! Every message carries a millisecond timestamp and a payload tagged by
//! `payload.type`, e.g.
//!
//! ```json
//! { "timestamp": 1700000000000, "payload": { "type": "NETWORK_CHANGED", "chainId": 1 } }
//! ```

use alloy_primitives::{Address, Bytes};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A single contract read batched into a multicall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub address: Address,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Milliseconds since the unix epoch
    #[serde(default)]
    pub timestamp: i64,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Payload {
    /// Previously recorded messages, applied in order
    Replay { messages: Vec<Message> },
    Init,
    NetworkChanged { chain_id: Option<u64> },
    BlockNumberChanged { chain_id: u64, block_number: u64 },
    // The three variants below are not reduced yet. Their fields parse
    // leniently so a payload of unexpected shape never rejects a feed.
    CallsChanged {
        #[serde(default, deserialize_with = "lenient")]
        calls: Vec<Call>,
    },
    MulticallSuccess {
        #[serde(default, deserialize_with = "lenient")]
        chain_id: Option<u64>,
        #[serde(default, deserialize_with = "lenient")]
        block_number: Option<u64>,
        #[serde(default, deserialize_with = "lenient")]
        multicall_address: Option<Address>,
        #[serde(default, deserialize_with = "lenient")]
        duration: Option<f64>,
        #[serde(default, deserialize_with = "lenient")]
        calls: Vec<Call>,
        #[serde(default)]
        data: serde_json::Value,
    },
    MulticallError {
        #[serde(default, deserialize_with = "lenient")]
        chain_id: Option<u64>,
        #[serde(default, deserialize_with = "lenient")]
        block_number: Option<u64>,
        #[serde(default, deserialize_with = "lenient")]
        multicall_address: Option<Address>,
        #[serde(default, deserialize_with = "lenient")]
        duration: Option<f64>,
        #[serde(default, deserialize_with = "lenient")]
        calls: Vec<Call>,
        /// Either a message string or an error object
        #[serde(default)]
        error: serde_json::Value,
    },
    /// Any tag this build does not know about. Not written back out, since
    /// the original tag is gone.
    #[serde(other, skip_serializing)]
    Unknown,
}

/// Falls back to `T::default()` when the value has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl Message {
    pub fn new(timestamp: i64, payload: Payload) -> Self {
        Self { timestamp, payload }
    }

    pub fn replay(messages: Vec<Message>) -> Self {
        let timestamp = messages.last().map(|m| m.timestamp).unwrap_or_default();
        Self::new(timestamp, Payload::Replay { messages })
    }

    pub fn init(timestamp: i64) -> Self {
        Self::new(timestamp, Payload::Init)
    }

    pub fn network_changed(chain_id: Option<u64>, timestamp: i64) -> Self {
        Self::new(timestamp, Payload::NetworkChanged { chain_id })
    }

    pub fn block_number_changed(chain_id: u64, block_number: u64, timestamp: i64) -> Self {
        Self::new(
            timestamp,
            Payload::BlockNumberChanged {
                chain_id,
                block_number,
            },
        )
    }

    /// Wire tag of the payload, used in logs
    pub fn kind(&self) -> &'static str {
        match self.payload {
            Payload::Replay { .. } => "REPLAY",
            Payload::Init => "INIT",
            Payload::NetworkChanged { .. } => "NETWORK_CHANGED",
            Payload::BlockNumberChanged { .. } => "BLOCK_NUMBER_CHANGED",
            Payload::CallsChanged { .. } => "CALLS_CHANGED",
            Payload::MulticallSuccess { .. } => "MULTICALL_SUCCESS",
            Payload::MulticallError { .. } => "MULTICALL_ERROR",
            Payload::Unknown => "UNKNOWN",
        }
    }
}
