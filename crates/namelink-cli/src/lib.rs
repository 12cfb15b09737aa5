//! CLI library components for the name matcher.

pub mod config;
pub mod logging;
