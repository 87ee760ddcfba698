//! CLI subcommand implementations

pub mod cultures;
pub mod generate;
pub mod plan;
pub mod preview;
