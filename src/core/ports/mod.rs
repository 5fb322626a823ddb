//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the filter-and-invoke logic
//! and the two executables it drives: git and the build wrapper.
//!
//! Implementations live in the `adapters` module.

mod build_tool;
mod vcs;

pub use build_tool::{ApplyRequest, BuildTool, WrapperLookup};
pub use vcs::VersionControl;

#[cfg(test)]
pub use build_tool::MockBuildTool;
#[cfg(test)]
pub use vcs::MockVersionControl;
