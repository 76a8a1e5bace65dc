use crate::core::locator::find_file;
use crate::core::naming::DocTarget;
use crate::core::parser::RecordParser;
use crate::core::report::Comparison;
use crate::domain::ports::LayoutProvider;
use crate::utils::error::Result;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

pub const SOURCE_LABEL: &str = "Def";
pub const DOCS_LABEL: &str = "Docs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Not a resource or data source definition; nothing was opened.
    Skipped,
    Match,
    Mismatch,
}

impl CheckOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            CheckOutcome::Skipped | CheckOutcome::Match => 0,
            CheckOutcome::Mismatch => 1,
        }
    }
}

pub struct TimeoutChecker<L: LayoutProvider> {
    layout: L,
}

impl<L: LayoutProvider> TimeoutChecker<L> {
    pub fn new(layout: L) -> Self {
        Self { layout }
    }

    /// Compares the timeouts of `source_file` with its documentation page under `repo_root`.
    ///
    /// Status lines and the comparison table go to `out`. Errors are returned
    /// before anything is rendered.
    pub fn run<W: Write>(
        &self,
        source_file: &Path,
        repo_root: &Path,
        out: &mut W,
    ) -> Result<CheckOutcome> {
        writeln!(out, "Checking Timeouts for Resource/ Data Source Documentation")?;

        let Some(target) = DocTarget::resolve(source_file, repo_root, &self.layout) else {
            tracing::info!("Skipping {}", source_file.display());
            writeln!(
                out,
                "'{}' is probably not a resource or data source definition.",
                source_file.display()
            )?;
            return Ok(CheckOutcome::Skipped);
        };
        tracing::debug!(
            "{} '{}' documented as {} under {}",
            target.kind,
            target.resource_name,
            target.doc_file_name,
            target.search_root.display()
        );

        let source_timeouts = RecordParser::definition().parse_file(source_file)?;
        tracing::debug!("Definition timeouts: {:?}", source_timeouts);

        let doc_path = find_file(&target.search_root, &target.doc_file_name)?;
        writeln!(out, "Found matching documentation file {}", doc_path.display())?;

        let doc_timeouts = RecordParser::documentation().parse_file(&doc_path)?;
        tracing::debug!("Documentation timeouts: {:?}", doc_timeouts);

        let comparison = Comparison::new(source_timeouts, doc_timeouts);
        comparison.render(out, SOURCE_LABEL, DOCS_LABEL)?;

        if comparison.is_match() {
            writeln!(out, "{}", "* Documentation Matches! *".green())?;
            Ok(CheckOutcome::Match)
        } else {
            tracing::info!(
                "Mismatched timeouts for {}: {:?}",
                target.resource_name,
                comparison.mismatched_fields()
            );
            writeln!(out, "{}", "* Documentation Does Not Match! *".red())?;
            Ok(CheckOutcome::Mismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::DocsLayout;
    use crate::utils::error::CheckError;

    #[test]
    fn test_unrecognized_file_is_skipped_without_opening() {
        let checker = TimeoutChecker::new(DocsLayout::default());
        let mut out = Vec::new();

        // 檔案與目錄都不存在，若有開檔就會回傳錯誤
        let outcome = checker
            .run(
                Path::new("/nonexistent/helpers.go"),
                Path::new("/nonexistent"),
                &mut out,
            )
            .unwrap();

        assert_eq!(outcome, CheckOutcome::Skipped);
        assert_eq!(outcome.exit_code(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("is probably not a resource or data source definition"));
    }

    #[test]
    fn test_unreadable_source_is_an_error_not_a_mismatch() {
        let checker = TimeoutChecker::new(DocsLayout::default());
        let mut out = Vec::new();

        let err = checker
            .run(
                Path::new("/nonexistent/widget_resource.go"),
                Path::new("/nonexistent"),
                &mut out,
            )
            .unwrap_err();

        assert!(matches!(err, CheckError::FileAccess { .. }));
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('+'));
    }
}
