use crate::domain::model::{format_duration, DurationRecord, TimeoutField};
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub field: TimeoutField,
    pub source: Duration,
    pub docs: Duration,
}

impl ComparisonRow {
    pub fn matches(&self) -> bool {
        self.source == self.docs
    }
}

/// Side-by-side view of the timeouts declared in a definition and in its docs.
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    source: DurationRecord,
    docs: DurationRecord,
}

impl Comparison {
    pub fn new(source: DurationRecord, docs: DurationRecord) -> Self {
        Self { source, docs }
    }

    pub fn rows(&self) -> impl Iterator<Item = ComparisonRow> + '_ {
        TimeoutField::ALL.into_iter().map(move |field| ComparisonRow {
            field,
            source: self.source.get(field),
            docs: self.docs.get(field),
        })
    }

    pub fn is_match(&self) -> bool {
        self.source == self.docs
    }

    pub fn mismatched_fields(&self) -> Vec<TimeoutField> {
        self.rows()
            .filter(|row| !row.matches())
            .map(|row| row.field)
            .collect()
    }

    /// Writes a bordered table with one row per field; mismatching rows are red.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        source_label: &str,
        docs_label: &str,
    ) -> std::io::Result<()> {
        let header = [String::new(), source_label.to_string(), docs_label.to_string()];
        let rows: Vec<([String; 3], bool)> = self
            .rows()
            .map(|row| {
                (
                    [
                        row.field.to_string(),
                        format_duration(row.source),
                        format_duration(row.docs),
                    ],
                    row.matches(),
                )
            })
            .collect();

        let mut widths = header.each_ref().map(|cell| cell.chars().count());
        for (cells, _) in &rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{}+", border);

        writeln!(out, "{}", border)?;
        writeln!(out, "{}", format_row(&header, &widths, false))?;
        writeln!(out, "{}", border)?;
        for (cells, matches) in &rows {
            writeln!(out, "{}", format_row(cells, &widths, !matches))?;
        }
        writeln!(out, "{}", border)?;

        Ok(())
    }
}

// 先補齊寬度再上色，避免 ANSI 控制碼影響對齊
fn format_row(cells: &[String; 3], widths: &[usize; 3], highlight: bool) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padded = format!("{:<width$}", cell, width = *width);
            if highlight {
                padded.red().bold().to_string()
            } else {
                padded
            }
        })
        .collect();

    format!("| {} |", rendered.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(create: u64, read: u64, update: u64, delete: u64) -> DurationRecord {
        DurationRecord {
            create: Duration::from_secs(create * 60),
            read: Duration::from_secs(read * 60),
            update: Duration::from_secs(update * 60),
            delete: Duration::from_secs(delete * 60),
        }
    }

    #[test]
    fn test_equal_records_match() {
        let comparison = Comparison::new(record(30, 5, 30, 60), record(30, 5, 30, 60));
        assert!(comparison.is_match());
        assert!(comparison.mismatched_fields().is_empty());
    }

    #[test]
    fn test_single_field_difference_is_mismatch() {
        let comparison = Comparison::new(record(30, 120, 30, 30), record(30, 90, 30, 30));
        assert!(!comparison.is_match());
        assert_eq!(comparison.mismatched_fields(), vec![TimeoutField::Read]);
    }

    fn strip_ansi(text: &str) -> String {
        use once_cell::sync::Lazy;
        use regex::Regex;

        static ANSI: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());
        ANSI.replace_all(text, "").into_owned()
    }

    #[test]
    fn test_render_table_layout() {
        let comparison = Comparison::new(record(30, 120, 0, 10), record(30, 90, 0, 10));

        let mut out = Vec::new();
        comparison.render(&mut out, "Def", "Docs").unwrap();
        // 是否上色取決於終端環境，版面只比對純文字
        let text = strip_ansi(&String::from_utf8(out).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "+--------+--------+---------+");
        assert_eq!(lines[1], "|        | Def    | Docs    |");
        assert_eq!(lines[3], "| Create | 30m0s  | 30m0s   |");
        assert_eq!(lines[4], "| Read   | 2h0m0s | 1h30m0s |");
        assert_eq!(lines[5], "| Update | 0s     | 0s      |");
        assert_eq!(lines[6], "| Delete | 10m0s  | 10m0s   |");
        assert_eq!(lines[0], lines[7]);
    }

    #[test]
    fn test_mismatched_row_is_highlighted() {
        colored::control::set_override(true);
        let comparison = Comparison::new(record(30, 120, 30, 30), record(30, 90, 30, 30));

        let mut out = Vec::new();
        let rendered = comparison.render(&mut out, "Def", "Docs");
        colored::control::unset_override();
        rendered.unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let red_bold = "\x1b[1;31m";

        assert!(lines[4].contains(red_bold), "Read row not highlighted: {:?}", lines[4]);
        assert!(strip_ansi(lines[4]).contains("2h0m0s"));
        for index in [1, 3, 5, 6] {
            assert!(
                !lines[index].contains('\x1b'),
                "row {} highlighted: {:?}",
                index,
                lines[index]
            );
        }
    }
}
