//! spotless-staged - run `spotless:apply` on the files a commit actually changes
//!
//! Called from a git pre-commit hook with the staged files as arguments.
//! Files whose staged diff is only end-of-line whitespace are skipped; the
//! rest go to the Maven wrapper's Spotless goal in a single invocation.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::process::ExitCode;

mod cli;
mod commands;

/// Main entry point for the spotless-staged CLI
fn main() -> ExitCode {
    cli::run()
}
