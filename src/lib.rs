pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{toml_config::DocsLayout, CliConfig};
pub use crate::core::checker::{CheckOutcome, TimeoutChecker};
pub use crate::utils::error::{CheckError, Result};
