use std::path::{Path, PathBuf};

use crate::domain::{Record, ResultTable};

use super::ExportError;

/// Attachment name offered to browsers downloading an export.
pub const ATTACHMENT_FILENAME: &str = "all_carrier_data.csv";

/// Writes result sets to one well-known CSV path, replacing the previous export.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvExporter { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn export(&self, records: &[Record]) -> Result<PathBuf, ExportError> {
        let table = ResultTable::from_records(records);
        let mut writer = csv::Writer::from_path(&self.path)?;

        // No columns means no records; leave the file empty.
        if !table.columns.is_empty() {
            writer.write_record(table.columns.iter().map(|label| label.as_str()))?;
            for row in &table.rows {
                writer.write_record(row)?;
            }
        }
        writer.flush()?;

        log::info!(
            "Exported {} records to {}",
            table.rows.len(),
            self.path.display()
        );

        Ok(self.path.clone())
    }
}
