//! Timeline state for a multicall devtools panel
//!
//! Messages describing network changes, new blocks and multicall activity
//! are folded by [`domain::Reducer`] into an immutable [`domain::State`],
//! which the terminal UI renders as a timeline.

pub mod app;
pub mod config;
pub mod domain;
pub mod feed;
pub mod logging;
pub mod ui;
