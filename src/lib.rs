//! pokego - Poke running processes to reload their configuration
//!
//! Two independent, single-shot pokes:
//! - `http`: POST to a reload endpoint and check the status code
//! - `sighup`: find processes by name and send them SIGHUP
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 dispatcher                   │
//! ├──────────────────────┬──────────────────────┤
//! │   http::poke_http    │ process::poke_process │
//! ├──────────────────────┼──────────────────────┤
//! │       reqwest        │  sysinfo  │   kill(2) │
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! Nothing is shared between the two handlers and no state outlives a call.

pub mod cli;
pub mod duration;
pub mod error;
pub mod http;
pub mod process;

pub use error::PokeError;
pub use http::{poke_http, ReloadTarget};
pub use process::{poke_process, poke_process_by_name, DeliveryTally, MatchMode};
