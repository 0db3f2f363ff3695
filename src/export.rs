//! Export serialization: JSON and spreadsheet-friendly CSV.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::task::Task;

/// UTF-8 byte-order mark so spreadsheet tools detect the CSV encoding
const UTF8_BOM: &str = "\u{FEFF}";

/// CSV column headers, in the product locale
const CSV_HEADER: [&str; 6] = [
    "العنوان",
    "الوصف",
    "التاريخ",
    "الأولوية",
    "الحالة",
    "الوسوم",
];

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(Error::InvalidArgument(format!(
                "unknown export format '{other}' (expected json or csv)"
            ))),
        }
    }
}

/// A rendered export: file name plus content bytes
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Serialize the task collection in the requested format.
///
/// An empty collection is rejected rather than producing an empty file.
pub fn export_tasks(tasks: &[Task], format: ExportFormat) -> Result<ExportFile> {
    if tasks.is_empty() {
        return Err(Error::NothingToExport);
    }

    match format {
        ExportFormat::Json => Ok(ExportFile {
            filename: "tasks-export.json",
            bytes: serde_json::to_vec_pretty(tasks)?,
        }),
        ExportFormat::Csv => Ok(ExportFile {
            filename: "tasks-export.csv",
            bytes: render_csv(tasks).into_bytes(),
        }),
    }
}

fn render_csv(tasks: &[Task]) -> String {
    let mut rows = Vec::with_capacity(tasks.len() + 1);
    rows.push(CSV_HEADER.join(","));

    for task in tasks {
        let row = [
            quote_field(&task.title),
            quote_field(&task.description),
            task.due_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            task.priority.to_string(),
            task.status.to_string(),
            task.tag_labels().join("|"),
        ];
        rows.push(row.join(","));
    }

    format!("{UTF8_BOM}{}", rows.join("\n"))
}

/// Standard CSV quoting: wrap the field and double any embedded quotes.
fn quote_field(value: &str) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    format!("\"{}\"", value.replace('"', "\"\""))
}
