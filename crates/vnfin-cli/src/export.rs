//! Rendering of normalized statements for the terminal and for download.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use vnfin::{StatementError, StatementRow, StatementTable};

/// UTF-8 byte order mark, for spreadsheet tools that sniff the encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors that can occur while rendering a statement.
#[derive(Debug, Error)]
pub(crate) enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// DataFrame construction error.
    #[error(transparent)]
    Statement(#[from] StatementError),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Polars table for the terminal.
    Table,

    /// Comma-separated values with a header row.
    Csv,

    /// Array of objects keyed by column header.
    Json,
}

impl OutputFormat {
    /// Get the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Table => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Render `table` in `format`. The BOM only applies to CSV.
pub(crate) fn render(
    table: &StatementTable,
    format: OutputFormat,
    bom: bool,
) -> Result<Vec<u8>, ExportError> {
    match format {
        OutputFormat::Table => Ok(format!("{}\n", table.to_dataframe()?).into_bytes()),
        OutputFormat::Csv => to_csv(table, bom),
        OutputFormat::Json => {
            let mut out = to_json(table)?.into_bytes();
            out.push(b'\n');
            Ok(out)
        }
    }
}

/// Collapse line breaks in a label and trim it.
pub(crate) fn clean_name(name: &str) -> String {
    name.replace(['\n', '\r'], " ").trim().to_string()
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the statement as CSV: header first, then one record per row.
pub(crate) fn to_csv(table: &StatementTable, bom: bool) -> Result<Vec<u8>, ExportError> {
    let buf = if bom { UTF8_BOM.to_vec() } else { Vec::new() };
    let mut wtr = csv::Writer::from_writer(buf);

    wtr.write_record(table.header())?;
    for row in table.rows() {
        let record = std::iter::once(clean_name(&row.name))
            .chain(row.values.iter().map(|&v| format_value(v)));
        wtr.write_record(record)?;
    }

    wtr.into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// Write the statement as a pretty-printed JSON array, keys in column order.
pub(crate) fn to_json(table: &StatementTable) -> Result<String, ExportError> {
    let header = table.header();
    let records: Vec<Record<'_>> = table
        .rows()
        .iter()
        .map(|row| Record {
            header: &header,
            row,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// One row serialized as an object keyed by the table header.
struct Record<'a> {
    header: &'a [String],
    row: &'a StatementRow,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.header.len()))?;
        let mut keys = self.header.iter();
        if let Some(name_key) = keys.next() {
            map.serialize_entry(name_key, &self.row.name)?;
        }
        for (key, value) in keys.zip(&self.row.values) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vnfin::{FiscalPeriod, PeriodKind};

    fn sample_table() -> StatementTable {
        let periods = vec![
            FiscalPeriod::year_end(2024).unwrap(),
            FiscalPeriod::year_end(2023).unwrap(),
        ];
        let rows = vec![
            StatementRow::new("A. Tổng cộng tài sản\r\n ", Some(0), vec![Some(1250.5), Some(0.0)]),
            StatementRow::new("I. Tiền mặt, vàng bạc", Some(1), vec![Some(3.0), Some(2.0)]),
        ];
        StatementTable::new(PeriodKind::Annual, periods, rows).unwrap()
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("  a.\nTiền\r"), "a. Tiền");
        assert_eq!(clean_name(" - Góp vốn"), "- Góp vốn");
    }

    #[test]
    fn test_csv_export() {
        let csv = String::from_utf8(to_csv(&sample_table(), false).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Năm 2024,Năm 2023");
        assert_eq!(lines[1], "A. Tổng cộng tài sản,1250.5,0");
        assert_eq!(lines[2], "\"I. Tiền mặt, vàng bạc\",3,2");
    }

    #[test]
    fn test_csv_export_with_bom() {
        let bytes = to_csv(&sample_table(), true).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        assert!(bytes[UTF8_BOM.len()..].starts_with(b"Name,"));
    }

    #[test]
    fn test_json_export_keeps_column_order() {
        let json = to_json(&sample_table()).unwrap();
        let name = json.find("\"Name\"").unwrap();
        let newest = json.find("\"Năm 2024\"").unwrap();
        let oldest = json.find("\"Năm 2023\"").unwrap();
        assert!(name < newest && newest < oldest);

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["Năm 2023"], serde_json::json!(2.0));
    }

    #[test]
    fn test_render_table() {
        let out = String::from_utf8(render(&sample_table(), OutputFormat::Table, true).unwrap())
            .unwrap();
        assert!(out.contains("Name"));
        assert!(out.contains("Năm 2024"));
        assert!(!out.starts_with('\u{feff}'));
    }

    #[test]
    fn test_extension() {
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
