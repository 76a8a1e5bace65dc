use crate::domain::ports::LayoutProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const RESOURCE_SUFFIX: &str = "_resource.go";
pub const DATA_SOURCE_SUFFIX: &str = "_data_source.go";
pub const RESOURCE_DOCS_DIR: &str = "website/docs/r";
pub const DATA_SOURCE_DOCS_DIR: &str = "website/docs/d";
pub const DOC_EXTENSION: &str = ".html.markdown";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub layout: DocsLayout,
}

/// Repository layout; every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsLayout {
    pub resource_suffix: String,
    pub data_source_suffix: String,
    pub resource_docs_dir: String,
    pub data_source_docs_dir: String,
    pub doc_extension: String,
}

impl Default for DocsLayout {
    fn default() -> Self {
        Self {
            resource_suffix: RESOURCE_SUFFIX.to_string(),
            data_source_suffix: DATA_SOURCE_SUFFIX.to_string(),
            resource_docs_dir: RESOURCE_DOCS_DIR.to_string(),
            data_source_docs_dir: DATA_SOURCE_DOCS_DIR.to_string(),
            doc_extension: DOC_EXTENSION.to_string(),
        }
    }
}

impl LayoutProvider for DocsLayout {
    fn resource_suffix(&self) -> &str {
        &self.resource_suffix
    }

    fn data_source_suffix(&self) -> &str {
        &self.data_source_suffix
    }

    fn resource_docs_dir(&self) -> &str {
        &self.resource_docs_dir
    }

    fn data_source_docs_dir(&self) -> &str {
        &self.data_source_docs_dir
    }

    fn doc_extension(&self) -> &str {
        &self.doc_extension
    }
}

impl CheckerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CheckError::Config {
            message: format!("Unable to read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CheckError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DOCS_ROOT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use once_cell::sync::Lazy;
        use regex::Regex;

        static ENV_VAR: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for DocsLayout {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("layout.resource_suffix", &self.resource_suffix)?;
        validation::validate_non_empty_string(
            "layout.data_source_suffix",
            &self.data_source_suffix,
        )?;
        validation::validate_path("layout.resource_docs_dir", &self.resource_docs_dir)?;
        validation::validate_path("layout.data_source_docs_dir", &self.data_source_docs_dir)?;
        validation::validate_relative_path("layout.resource_docs_dir", &self.resource_docs_dir)?;
        validation::validate_relative_path(
            "layout.data_source_docs_dir",
            &self.data_source_docs_dir,
        )?;
        validation::validate_non_empty_string("layout.doc_extension", &self.doc_extension)?;

        // 兩個後綴若互為結尾，檔案種類就無法判定
        if self.resource_suffix.ends_with(&self.data_source_suffix)
            || self.data_source_suffix.ends_with(&self.resource_suffix)
        {
            return Err(CheckError::InvalidConfigValue {
                field: "layout.data_source_suffix".to_string(),
                value: self.data_source_suffix.clone(),
                reason: format!(
                    "Suffix overlaps with resource suffix '{}'",
                    self.resource_suffix
                ),
            });
        }

        Ok(())
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> Result<()> {
        self.layout.validate()
    }
}
