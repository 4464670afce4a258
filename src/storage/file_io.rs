//! File I/O utilities for line-delimited records
//!
//! Every data file holds one comma-separated record per line. Fields are
//! written verbatim (no quoting), so a field must never contain a comma.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::ShelfError;

/// Create an empty file (and its parent directories) if it doesn't exist
pub fn ensure_file<P: AsRef<Path>>(path: P) -> Result<(), ShelfError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ShelfError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ShelfError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read every non-blank record of a line file
///
/// A missing file reads as empty. Lines that are not valid UTF-8 are skipped
/// with a warning; I/O failures are returned.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<StringRecord>, ShelfError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| ShelfError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) if is_blank(&record) => continue,
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => {
                return Err(ShelfError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable line");
            }
        }
    }

    Ok(records)
}

/// Replace a line file with the given records (write to temp, then rename)
pub fn write_records_atomic<P, I>(path: P, records: I) -> Result<(), ShelfError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Vec<String>>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ShelfError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| ShelfError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(file);

    for record in records {
        writer
            .write_record(&record)
            .map_err(|e| ShelfError::Storage(format!("Failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| ShelfError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| ShelfError::Storage(format!("Failed to finish writing: {}", e)))?;

    file.sync_all()
        .map_err(|e| ShelfError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ShelfError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Parse an integer field the way a person would type it (surrounding spaces allowed)
pub fn parse_count(field: &str) -> Option<u32> {
    field.trim().parse().ok()
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_read_nonexistent_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let records = read_records(temp_dir.path().join("missing.txt")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");

        write_records_atomic(&path, vec![row(&["B1", "Dune", "Herbert", "2", "0"])]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "B1,Dune,Herbert,2,0\n");

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][1], "Dune");
    }

    #[test]
    fn test_trailing_empty_field_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("members.txt");

        write_records_atomic(&path, vec![row(&["M1", "Alice", ""])]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "M1,Alice,\n");
    }

    #[test]
    fn test_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("books.txt");

        write_records_atomic(&path, Vec::<Vec<String>>::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("books.txt.tmp").exists());
    }

    #[test]
    fn test_blank_lines_and_ragged_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");
        fs::write(&path, "a,b,c\n\n   \nd,e\n\"quoted,f\n").unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].len(), 2);
        // Quotes are ordinary characters
        assert_eq!(&records[2][0], "\"quoted");
    }

    #[test]
    fn test_ensure_file_keeps_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("log.txt");

        ensure_file(&path).unwrap();
        assert!(path.exists());

        fs::write(&path, "keep me\n").unwrap();
        ensure_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me\n");
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 3"), Some(3));
        assert_eq!(parse_count("three"), None);
        assert_eq!(parse_count("-1"), None);
    }
}
