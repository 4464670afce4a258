//! Member snapshot file
//!
//! One member per line: `member_id,name,borrowed_ids`, where `borrowed_ids`
//! is a `;`-joined list (empty when nothing is on loan).

use std::path::PathBuf;

use csv::StringRecord;

use crate::error::ShelfError;
use crate::models::Member;

use super::file_io::{read_records, write_records_atomic};

const ID_SEPARATOR: &str = ";";

/// Reads and rewrites the members file
#[derive(Debug, Clone)]
pub struct MemberFile {
    path: PathBuf,
}

impl MemberFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all well-formed members in file order
    pub fn load(&self) -> Result<Vec<Member>, ShelfError> {
        let mut members = Vec::new();

        for (index, record) in read_records(&self.path)?.iter().enumerate() {
            match decode(record) {
                Some(member) => members.push(member),
                None => tracing::warn!(
                    file = %self.path.display(),
                    record = index + 1,
                    "skipping malformed member line"
                ),
            }
        }

        Ok(members)
    }

    /// Rewrite the file from the given members
    pub fn save(&self, members: &[Member]) -> Result<(), ShelfError> {
        write_records_atomic(&self.path, members.iter().map(encode))
    }
}

fn encode(member: &Member) -> Vec<String> {
    vec![
        member.id.clone(),
        member.name.clone(),
        member.borrowed_ids().join(ID_SEPARATOR),
    ]
}

fn decode(record: &StringRecord) -> Option<Member> {
    if record.len() < 2 {
        return None;
    }

    let borrowed = record
        .get(2)
        .filter(|ids| !ids.is_empty())
        .map(|ids| {
            ids.split(ID_SEPARATOR)
                .filter(|id| !id.is_empty())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    Some(Member::with_borrowed(&record[0], &record[1], borrowed))
}
