//! Concurrent move-quality evaluation for tic-tac-toe.
//!
//! One [`PathQualityQuery`] per request fans out an evaluation worker per
//! empty cell, supervises those workers one-for-one (restart on transient
//! calculation faults, escalate on anything else) and replies to the caller
//! with a single ranked move list or a single failure.

mod board;
mod common;
mod config;
mod logging;
pub mod protocol;
mod query;
mod search;
mod worker;

pub use board::*;
pub use common::*;
pub use config::*;
pub use logging::init_logging;
pub use protocol::*;
pub use query::*;
pub use search::*;
pub use worker::*;
