use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::SinkError;
use crate::model::summary::SummaryRow;
use crate::repository::traits::SummarySink;

/// Keeps summary rows as a JSON array on disk. Rows are only ever appended.
#[derive(Clone, Debug)]
pub struct FileSummarySink {
    file_path: PathBuf,
}

impl FileSummarySink {
    pub fn new(file_path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let sink = Self {
            file_path: file_path.into(),
        };

        if let Some(dir) = sink.file_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| sink.io_error(e))?;
        }
        if !sink.file_path.exists() {
            sink.write_rows(&[])?;
        }

        Ok(sink)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn rows(&self) -> Result<Vec<SummaryRow>, SinkError> {
        self.read_rows()
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.file_path.clone(),
            source,
        }
    }

    fn read_rows(&self) -> Result<Vec<SummaryRow>, SinkError> {
        let file = File::open(&self.file_path).map_err(|e| self.io_error(e))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| SinkError::Parse {
            path: self.file_path.clone(),
            source,
        })
    }

    fn write_rows(&self, rows: &[SummaryRow]) -> Result<(), SinkError> {
        let file = File::create(&self.file_path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, rows).map_err(|source| SinkError::Parse {
            path: self.file_path.clone(),
            source,
        })?;
        writer.flush().map_err(|e| self.io_error(e))
    }
}

impl SummarySink for FileSummarySink {
    fn append(&self, rows: &[SummaryRow]) -> Result<usize, SinkError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut stored = self.read_rows()?;
        stored.extend_from_slice(rows);
        self.write_rows(&stored)?;

        info!(path = %self.file_path.display(), appended = rows.len(), total = stored.len(), "appended summary rows");
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::summary::Segment;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn row(day: u32, segment: Segment, orders: u64) -> SummaryRow {
        let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        SummaryRow {
            day: date,
            segment,
            orders,
            gross_sales: 10.0 * orders as f64,
            discounts: 0.0,
            returns: 0.0,
            net_sales: 10.0 * orders as f64,
            shipping: 0.0,
            duties: 0.0,
            additional_charges: 0.0,
            taxes: 0.0,
            total_sales: 10.0 * orders as f64,
            item_quantity: orders as i64,
            returned_quantity: 0,
            week_end: crate::period::end_of_week(date),
            month_end: crate::period::end_of_month(date),
        }
    }

    #[test]
    fn test_new_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("summary.json");
        let sink = FileSummarySink::new(&path).unwrap();

        assert!(path.exists());
        assert!(sink.rows().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_existing_rows_first() {
        let dir = tempdir().unwrap();
        let sink = FileSummarySink::new(dir.path().join("summary.json")).unwrap();

        let first = vec![row(2, Segment::New, 1), row(1, Segment::Returning, 2)];
        let second = vec![row(3, Segment::New, 4)];
        assert_eq!(sink.append(&first).unwrap(), 2);
        assert_eq!(sink.append(&second).unwrap(), 1);
        assert_eq!(sink.append(&[]).unwrap(), 0);

        let stored = sink.rows().unwrap();
        assert_eq!(stored, vec![first[0].clone(), first[1].clone(), second[0].clone()]);

        // Reopening does not reset the file.
        let reopened = FileSummarySink::new(sink.path()).unwrap();
        assert_eq!(reopened.rows().unwrap().len(), 3);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.json");
        fs::write(&path, "not json").unwrap();

        let sink = FileSummarySink::new(&path).unwrap();
        assert!(matches!(sink.append(&[row(1, Segment::New, 1)]), Err(SinkError::Parse { .. })));
    }
}
