use crate::domain::ports::LayoutProvider;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Resource,
    DataSource,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Resource => f.write_str("resource"),
            ResourceKind::DataSource => f.write_str("data source"),
        }
    }
}

/// Where the documentation page of a definition file is expected to live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTarget {
    pub kind: ResourceKind,
    pub resource_name: String,
    pub doc_file_name: String,
    pub search_root: PathBuf,
}

impl DocTarget {
    /// Returns `None` when the file name ends in neither definition suffix.
    pub fn resolve<L: LayoutProvider + ?Sized>(
        source_file: &Path,
        repo_root: &Path,
        layout: &L,
    ) -> Option<Self> {
        let base_name = source_file.file_name()?.to_str()?;

        let (kind, resource_name, docs_dir) =
            if let Some(name) = base_name.strip_suffix(layout.resource_suffix()) {
                (ResourceKind::Resource, name, layout.resource_docs_dir())
            } else if let Some(name) = base_name.strip_suffix(layout.data_source_suffix()) {
                (ResourceKind::DataSource, name, layout.data_source_docs_dir())
            } else {
                return None;
            };

        Some(Self {
            kind,
            resource_name: resource_name.to_string(),
            doc_file_name: format!("{}{}", resource_name, layout.doc_extension()),
            search_root: repo_root.join(docs_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::DocsLayout;

    #[test]
    fn test_resource_file() {
        let target = DocTarget::resolve(
            Path::new("internal/widget/widget_resource.go"),
            Path::new("/repo"),
            &DocsLayout::default(),
        )
        .unwrap();

        assert_eq!(target.kind, ResourceKind::Resource);
        assert_eq!(target.resource_name, "widget");
        assert_eq!(target.doc_file_name, "widget.html.markdown");
        assert_eq!(target.search_root, PathBuf::from("/repo/website/docs/r/"));
    }

    #[test]
    fn test_data_source_file() {
        let target = DocTarget::resolve(
            Path::new("widget_data_source.go"),
            Path::new("/repo"),
            &DocsLayout::default(),
        )
        .unwrap();

        assert_eq!(target.kind, ResourceKind::DataSource);
        assert_eq!(target.doc_file_name, "widget.html.markdown");
        assert_eq!(target.search_root, PathBuf::from("/repo/website/docs/d"));
    }

    #[test]
    fn test_unrecognized_file() {
        let layout = DocsLayout::default();
        for name in ["widget.go", "widget_resource_test.go", "widget_resource.go.bak", "README.md"] {
            assert!(DocTarget::resolve(Path::new(name), Path::new("/repo"), &layout).is_none());
        }
    }

    #[test]
    fn test_suffix_only_checked_on_base_name() {
        let target = DocTarget::resolve(
            Path::new("/src/old_resource.go/gadget_data_source.go"),
            Path::new("/repo"),
            &DocsLayout::default(),
        )
        .unwrap();
        assert_eq!(target.kind, ResourceKind::DataSource);
        assert_eq!(target.resource_name, "gadget");
    }
}
