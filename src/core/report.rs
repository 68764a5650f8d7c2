// logtally - core/report.rs
//
// Text rendering for the count table and the per-level detail list.
// Core layer: pure formatting returning strings; the app layer prints.
//
// User-facing strings are the product's Ukrainian literals; the level
// tokens themselves stay uppercase English as they appear in log files.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants::LEVEL_COLUMN_WIDTH;

/// Fixed two-line header of the count table.
const COUNTS_HEADER: &str = "Рівень логування | Кількість";
const COUNTS_RULE: &str = "-----------------|----------";

/// Render the per-level count table.
///
/// One row per observed level in map order (ascending by token), with
/// the level column left-aligned to `LEVEL_COLUMN_WIDTH` characters.
/// Every line, including the last row, is newline-terminated.
pub fn render_counts(counts: &LevelCounts) -> String {
    let mut out = String::new();
    out.push_str(COUNTS_HEADER);
    out.push('\n');
    out.push_str(COUNTS_RULE);
    out.push('\n');
    for (level, count) in counts {
        out.push_str(&format!(
            "{:<width$} | {count}\n",
            level.token(),
            width = LEVEL_COLUMN_WIDTH
        ));
    }
    out
}

/// Heading printed above the detail list.
///
/// Echoes the raw requested level uppercased, even when it is not one
/// of the four valid tokens (the list below it is then empty).
pub fn details_heading(requested: &str) -> String {
    format!("Деталі логів для рівня '{}':", requested.to_uppercase())
}

/// Render detail lines, one `<date> <time> - <message>` per record,
/// in the order given.
pub fn render_details(records: &[&LogRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{} {} - {}\n",
            record.date, record.time, record.message
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::count_by_level;
    use crate::core::model::{Level, LogRecord};

    fn make_record(level: Level, message: &str) -> LogRecord {
        LogRecord {
            date: "2024-01-01".to_string(),
            time: "10:00:00".to_string(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_counts_table_rows_sorted_by_token() {
        // Input order ERROR, INFO, DEBUG; rows must come out DEBUG,
        // ERROR, INFO.
        let records = vec![
            make_record(Level::Error, "e"),
            make_record(Level::Info, "i"),
            make_record(Level::Debug, "d"),
        ];
        let table = render_counts(&count_by_level(&records));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Рівень логування | Кількість");
        assert_eq!(lines[1], "-----------------|----------");
        assert_eq!(lines[2], "DEBUG            | 1");
        assert_eq!(lines[3], "ERROR            | 1");
        assert_eq!(lines[4], "INFO             | 1");
        assert_eq!(lines.len(), 5);
    }

    /// The level column is padded to exactly 16 characters.
    #[test]
    fn test_counts_table_column_width() {
        let records = vec![
            make_record(Level::Warning, "w1"),
            make_record(Level::Warning, "w2"),
        ];
        let table = render_counts(&count_by_level(&records));
        let row = table.lines().nth(2).unwrap();
        assert_eq!(row, "WARNING          | 2");
        let (level_column, _) = row.split_once('|').unwrap();
        assert_eq!(level_column.len(), 17, "16-char field plus separator space");
    }

    #[test]
    fn test_counts_table_empty_input_is_header_only() {
        let table = render_counts(&LevelCounts::new());
        assert_eq!(table, "Рівень логування | Кількість\n-----------------|----------\n");
    }

    #[test]
    fn test_details_heading_uppercases_request() {
        assert_eq!(details_heading("error"), "Деталі логів для рівня 'ERROR':");
    }

    /// Invalid requests are echoed back uppercased; no error is raised.
    #[test]
    fn test_details_heading_echoes_invalid_request() {
        assert_eq!(details_heading("bogus"), "Деталі логів для рівня 'BOGUS':");
    }

    #[test]
    fn test_details_lines_format_and_order() {
        let first = make_record(Level::Error, "Connection failed");
        let second = make_record(Level::Error, "Retry failed");
        let rendered = render_details(&[&first, &second]);
        assert_eq!(
            rendered,
            "2024-01-01 10:00:00 - Connection failed\n2024-01-01 10:00:00 - Retry failed\n"
        );
    }

    #[test]
    fn test_details_empty_input_renders_nothing() {
        assert_eq!(render_details(&[]), "");
    }
}
