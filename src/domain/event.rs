//! Timeline entries produced by the reducer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Event {
    Init {
        time: String,
    },
    NetworkDisconnected {
        time: String,
    },
    NetworkConnected {
        network: String,
        time: String,
    },
    BlockFound {
        network: String,
        time: String,
        block_number: u64,
    },
}

impl Event {
    pub fn time(&self) -> &str {
        match self {
            Event::Init { time }
            | Event::NetworkDisconnected { time }
            | Event::NetworkConnected { time, .. }
            | Event::BlockFound { time, .. } => time.as_str(),
        }
    }

    pub fn network(&self) -> Option<&str> {
        match self {
            Event::NetworkConnected { network, .. } | Event::BlockFound { network, .. } => {
                Some(network.as_str())
            }
            Event::Init { .. } | Event::NetworkDisconnected { .. } => None,
        }
    }

    /// Short heading shown in the timeline list
    pub fn title(&self) -> &'static str {
        match self {
            Event::Init { .. } => "Session started",
            Event::NetworkDisconnected { .. } => "Network disconnected",
            Event::NetworkConnected { .. } => "Network connected",
            Event::BlockFound { .. } => "Block found",
        }
    }

    /// Label/value pairs rendered by the preview table
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("Time", self.time().to_string())];
        if let Some(network) = self.network() {
            rows.push(("Network", network.to_string()));
        }
        if let Event::BlockFound { block_number, .. } = self {
            rows.push(("Block number", block_number.to_string()));
        }
        rows
    }
}
