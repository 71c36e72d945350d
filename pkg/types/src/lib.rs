//! Shared data types for the kvforms validators.

pub mod config;
pub mod entity;
pub mod field;
pub mod settings;
pub mod validation;
