//! Command implementations

mod format;
mod install_hook;

pub use format::{FormatOptions, format};
pub use install_hook::install_hook;
