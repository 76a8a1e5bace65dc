/// Describes where a repository keeps its definitions and their documentation pages.
pub trait LayoutProvider {
    /// Base-name suffix of resource definitions, e.g. `_resource.go`.
    fn resource_suffix(&self) -> &str;
    /// Base-name suffix of data source definitions, e.g. `_data_source.go`.
    fn data_source_suffix(&self) -> &str;
    /// Resource docs directory relative to the repository root.
    fn resource_docs_dir(&self) -> &str;
    /// Data source docs directory relative to the repository root.
    fn data_source_docs_dir(&self) -> &str;
    /// Appended to the resource name to build the docs file name, e.g. `.html.markdown`.
    fn doc_extension(&self) -> &str;
}
