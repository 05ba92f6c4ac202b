//! vocabtape - terminal vocabulary trainer
//!
//! Paste a JSON deck of vocabulary rows, pick two fields to show side by
//! side and cover one of them with a striped tape. Peek row by row, mark
//! each answer as known or unknown, and pick up where you left off next
//! time: every change is saved immediately.

mod opener;

pub mod app;
pub mod config;
pub mod paths;
pub mod secret;
pub mod session;
pub mod storage;
pub mod store;
pub mod tui;
pub mod vocab;

pub use app::App;
pub use config::Config;
pub use store::{ApplyOutcome, Store};
