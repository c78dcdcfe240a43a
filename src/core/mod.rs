//! Core domain logic
//!
//! Input safety screening, release classification, release metadata,
//! and application configuration.

pub mod config;
pub mod metadata;
pub mod release;
pub mod safety;
pub mod style_guide;
