//! CLI library components for the Genbank switcheroo.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
