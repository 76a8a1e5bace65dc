use std::fmt;
use std::time::Duration;

/// One of the four configurable timeouts of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutField {
    Create = 0,
    Read = 1,
    Update = 2,
    Delete = 3,
}

impl TimeoutField {
    pub const ALL: [TimeoutField; 4] = [
        TimeoutField::Create,
        TimeoutField::Read,
        TimeoutField::Update,
        TimeoutField::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeoutField::Create => "Create",
            TimeoutField::Read => "Read",
            TimeoutField::Update => "Update",
            TimeoutField::Delete => "Delete",
        }
    }
}

impl fmt::Display for TimeoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two textual formats that declare timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Resource / data source definition (`Create: schema.DefaultTimeout(...)`).
    Definition,
    /// Markdown documentation page (`` `create` - (Default `30 minutes`) ``).
    Documentation,
}

const DEFINITION_MARKERS: [&str; 4] = ["Create:", "Read:", "Update:", "Delete:"];
const DOCUMENTATION_MARKERS: [&str; 4] = ["`create`", "`read`", "`update`", "`delete`"];

impl SourceFormat {
    /// Markers in `TimeoutField::ALL` order.
    pub fn markers(self) -> &'static [&'static str; 4] {
        match self {
            SourceFormat::Definition => &DEFINITION_MARKERS,
            SourceFormat::Documentation => &DOCUMENTATION_MARKERS,
        }
    }

    pub fn marker(self, field: TimeoutField) -> &'static str {
        self.markers()[field as usize]
    }

    /// First field whose marker is contained in `line`.
    pub fn field_for_line(self, line: &str) -> Option<TimeoutField> {
        TimeoutField::ALL
            .into_iter()
            .zip(self.markers())
            .find(|(_, marker)| line.contains(**marker))
            .map(|(field, _)| field)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Definition => f.write_str("Go"),
            SourceFormat::Documentation => f.write_str("Markdown"),
        }
    }
}

/// Create/Read/Update/Delete timeouts declared in a single file.
/// A zero duration means the timeout was not found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationRecord {
    pub create: Duration,
    pub read: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl DurationRecord {
    pub fn get(&self, field: TimeoutField) -> Duration {
        match field {
            TimeoutField::Create => self.create,
            TimeoutField::Read => self.read,
            TimeoutField::Update => self.update,
            TimeoutField::Delete => self.delete,
        }
    }

    pub(crate) fn set(&mut self, field: TimeoutField, value: Duration) {
        match field {
            TimeoutField::Create => self.create = value,
            TimeoutField::Read => self.read = value,
            TimeoutField::Update => self.update = value,
            TimeoutField::Delete => self.delete = value,
        }
    }
}

/// Formats a duration the way Go's `time.Duration` prints it (`30m0s`, `2h0m0s`, `0s`).
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    if total == 0 {
        return "0s".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
