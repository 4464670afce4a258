//! Append-only transaction log
//!
//! Each completed borrow or return is appended as one line:
//! `timestamp,ACTION,member_id,book_id,book_title`. The file is never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::error::{ShelfError, ShelfResult};
use crate::models::{TransactionRecord, TIMESTAMP_FORMAT};

use super::file_io::read_records;

/// Durable record of loan events
#[derive(Debug, Clone)]
pub struct TransactionLog {
    /// Path to the log file
    log_path: PathBuf,
}

impl TransactionLog {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append a record and flush it to disk
    pub fn append(&self, record: &TransactionRecord) -> ShelfResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ShelfError::Io(format!("Failed to open transaction log: {}", e)))?;

        writeln!(file, "{}", record)
            .map_err(|e| ShelfError::Io(format!("Failed to write transaction: {}", e)))?;

        file.flush()
            .map_err(|e| ShelfError::Io(format!("Failed to flush transaction log: {}", e)))?;

        Ok(())
    }

    /// Every non-blank line, trimmed, oldest first
    pub fn read_lines(&self) -> ShelfResult<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ShelfError::Io(format!("Failed to open transaction log: {}", e)))?;

        let mut lines = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                ShelfError::Io(format!(
                    "Failed to read transaction log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            let line = line.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }

        Ok(lines)
    }

    /// The last `count` lines, oldest first
    pub fn read_recent(&self, count: usize) -> ShelfResult<Vec<String>> {
        let mut lines = self.read_lines()?;
        let start = lines.len().saturating_sub(count);
        Ok(lines.split_off(start))
    }

    /// Parsed records, oldest first; lines that don't parse are skipped
    pub fn read_records(&self) -> ShelfResult<Vec<TransactionRecord>> {
        let records = read_records(&self.log_path)?
            .iter()
            .filter_map(|record| {
                let parsed = parse_record(record);
                if parsed.is_none() {
                    tracing::warn!(
                        file = %self.log_path.display(),
                        line = ?record,
                        "skipping malformed transaction line"
                    );
                }
                parsed
            })
            .collect();

        Ok(records)
    }

    /// Number of recorded transactions
    pub fn entry_count(&self) -> ShelfResult<usize> {
        Ok(self.read_lines()?.len())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

fn parse_record(record: &csv::StringRecord) -> Option<TransactionRecord> {
    if record.len() < 5 {
        return None;
    }

    let timestamp = NaiveDateTime::parse_from_str(record[0].trim(), TIMESTAMP_FORMAT).ok()?;
    let action = record[1].trim().parse().ok()?;

    Some(TransactionRecord {
        timestamp,
        action,
        member_id: record[2].to_string(),
        book_id: record[3].to_string(),
        book_title: record[4].trim_end().to_string(),
    })
}
