//! Business logic services
//!
//! Orchestration that talks to the outside world only through the port
//! traits.
//!
//! - [`formatter`] - Filter staged files and run the formatting goal

pub mod formatter;

pub use formatter::{Outcome, Plan, StagedFormatter, resolve_root};
