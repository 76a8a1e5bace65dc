pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;
use toml_config::{CheckerConfig, DocsLayout};

#[derive(Debug, Clone, Parser)]
#[command(name = "timeout-checker")]
#[command(about = "Checks that documented resource timeouts match their definitions")]
pub struct CliConfig {
    /// Path to the resource or data source definition (`*_resource.go`, `*_data_source.go`)
    pub source_file: Option<PathBuf>,

    /// Repository root containing `website/docs`
    pub repo_root: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub extra_args: Vec<String>,

    /// TOML file overriding the repository layout
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Both positional arguments, or `None` when either is missing.
    pub fn targets(&self) -> Option<(PathBuf, PathBuf)> {
        Some((self.source_file.clone()?, self.repo_root.clone()?))
    }

    /// Layout from `--config`, falling back to the built-in convention.
    pub fn load_layout(&self) -> Result<DocsLayout> {
        let config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading layout from {}", path.display());
                CheckerConfig::from_file(path)?
            }
            None => CheckerConfig::default(),
        };
        config.validate()?;
        Ok(config.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_repo_root_has_no_targets() {
        let config = CliConfig::parse_from(["timeout-checker", "widget_resource.go"]);
        assert!(config.targets().is_none());
    }

    #[test]
    fn test_extra_positional_arguments_are_ignored() {
        let config = CliConfig::try_parse_from([
            "timeout-checker",
            "widget_resource.go",
            "/repo",
            "unused",
            "also-unused",
        ])
        .unwrap();

        let (source, root) = config.targets().unwrap();
        assert_eq!(source, PathBuf::from("widget_resource.go"));
        assert_eq!(root, PathBuf::from("/repo"));
        assert_eq!(config.extra_args, vec!["unused", "also-unused"]);
    }

    #[test]
    fn test_positional_arguments() {
        let config =
            CliConfig::parse_from(["timeout-checker", "-v", "widget_resource.go", "/repo"]);
        let (source, root) = config.targets().unwrap();
        assert_eq!(source, PathBuf::from("widget_resource.go"));
        assert_eq!(root, PathBuf::from("/repo"));
        assert!(config.verbose);
        assert_eq!(config.load_layout().unwrap(), DocsLayout::default());
    }
}
