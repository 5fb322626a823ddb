//! Domain models for spotless-staged
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`PassMode`] - How qualifying files are handed to the formatter
//! - [`WhitespacePolicy`] - Which whitespace differences do not count as changes
//! - [`Platform`] - Which wrapper script to look for
//! - [`FileSelection`] - Candidate files split into qualifying and skipped
//! - [`FormatSettings`] - Resolved settings for one run

mod pass_mode;
mod platform;
mod selection;
mod settings;
mod whitespace;

pub use pass_mode::{PassMode, SEPARATOR_CLASS, match_pattern};
pub use platform::Platform;
pub use selection::{FileSelection, SkipReason, SkippedFile};
pub use settings::{DEFAULT_GOAL, FormatSettings};
pub use whitespace::WhitespacePolicy;
