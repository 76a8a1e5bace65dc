pub mod checker;
pub mod extractor;
pub mod locator;
pub mod naming;
pub mod parser;
pub mod report;
