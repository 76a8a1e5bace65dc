use crate::core::extractor::extract_duration;
use crate::domain::model::{DurationRecord, SourceFormat};
use crate::utils::error::{CheckError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scans a definition or documentation file for its four timeout declarations.
#[derive(Debug, Clone, Copy)]
pub struct RecordParser {
    format: SourceFormat,
}

impl RecordParser {
    pub fn new(format: SourceFormat) -> Self {
        Self { format }
    }

    pub fn definition() -> Self {
        Self::new(SourceFormat::Definition)
    }

    pub fn documentation() -> Self {
        Self::new(SourceFormat::Documentation)
    }

    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<DurationRecord> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| self.access_error(path, source))?;

        tracing::debug!("Scanning {} file {}", self.format, path.display());
        self.parse_reader(BufReader::new(file))
            .map_err(|source| self.access_error(path, source))
    }

    /// 逐行掃描；同一欄位後出現的行覆蓋先前的值
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> std::io::Result<DurationRecord> {
        let mut record = DurationRecord::default();

        for chunk in reader.split(b'\n') {
            let chunk = chunk?;
            let text = String::from_utf8_lossy(&chunk);
            let line = text.strip_suffix('\r').unwrap_or(&text[..]);

            if let Some(field) = self.format.field_for_line(line) {
                let value = extract_duration(line);
                tracing::trace!("{} timeout {} from line '{}'", field, value.as_secs(), line);
                record.set(field, value);
            }
        }

        Ok(record)
    }

    fn access_error(&self, path: &Path, source: std::io::Error) -> CheckError {
        CheckError::FileAccess {
            format: self.format,
            path: path.to_path_buf(),
            source,
        }
    }
}
