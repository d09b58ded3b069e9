//! Display helpers shared by the CLI and the HTTP API

mod date;

pub use date::*;
