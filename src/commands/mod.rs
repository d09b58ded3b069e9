//! CLI subcommands

pub mod list;
pub mod new;
pub mod portfolio;
pub mod show;
