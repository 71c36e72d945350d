//! Centralized constants for the kvforms validators.
//!
//! User-facing messages, limits and allow-lists live here.
//! Change a value in one place and it applies everywhere.

pub mod bmc;
pub mod form;
pub mod limits;
pub mod messages;
