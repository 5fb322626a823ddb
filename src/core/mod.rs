//! Core domain logic for spotless-staged
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`PassMode`, `FileSelection`, `FormatSettings`)
//! - `services/` - Filter-and-invoke orchestration
//! - `ports/` - Trait definitions for git and the build wrapper

pub mod models;
pub mod ports;
pub mod services;
