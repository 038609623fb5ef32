//! CLI library components for the flat table builder.

pub mod commands;
pub mod logging;
