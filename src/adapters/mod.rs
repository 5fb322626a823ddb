//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Repository queries and hook installation
//! - `maven/` - Locating and running the Maven wrapper

pub mod git;
pub mod maven;
