//! Placement domain models.
//!
//! Core data types for describing a placement problem: the worker roster
//! and the project requirement profile. Both are plain records built in
//! builder style and immutable for the duration of an optimizer run — the
//! external data-management layer owns their lifecycle.

mod project;
mod worker;

pub use project::ProjectRequirement;
pub use worker::Worker;
