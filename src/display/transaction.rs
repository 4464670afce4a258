//! Transaction display formatting
//!
//! Register-style views over parsed transaction records.

use crate::models::{TransactionAction, TransactionRecord};

/// Format a single record as a register row
pub fn format_transaction_row(record: &TransactionRecord) -> String {
    let marker = match record.action {
        TransactionAction::Borrow => "->",
        TransactionAction::Return => "<-",
    };

    format!(
        "{} {:19} {:6} {:10} {}",
        marker,
        record.formatted_timestamp(),
        record.action,
        truncate(&record.book_id, 10),
        record.book_title
    )
}

/// Format a member's loan history as a register
pub fn format_member_history(member_id: &str, records: &[TransactionRecord]) -> String {
    if records.is_empty() {
        return format!("No transactions recorded for member {}.\n", member_id);
    }

    let mut output = String::new();
    output.push_str(&format!("Loan history for member {}\n", member_id));
    output.push_str(&format!(
        "{:2} {:19} {:6} {:10} {}\n",
        "", "Timestamp", "Action", "Book ID", "Title"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for record in records {
        output.push_str(&format_transaction_row(record));
        output.push('\n');
    }

    let open_loans = records
        .iter()
        .fold(0i64, |open, r| match r.action {
            TransactionAction::Borrow => open + 1,
            TransactionAction::Return => open - 1,
        });
    output.push_str(&format!(
        "\n{} event(s), {} loan(s) still open\n",
        records.len(),
        open_loans.max(0)
    ));

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(action: TransactionAction, book_id: &str) -> TransactionRecord {
        TransactionRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            action,
            member_id: "M1".into(),
            book_id: book_id.into(),
            book_title: "Dune".into(),
        }
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_transaction_row(&record(TransactionAction::Borrow, "B1"));
        assert!(row.starts_with("-> 2024-05-01 09:30:00 BORROW"));
        assert!(row.ends_with("Dune"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            format_member_history("M1", &[]),
            "No transactions recorded for member M1.\n"
        );
    }

    #[test]
    fn test_open_loan_count() {
        let records = vec![
            record(TransactionAction::Borrow, "B1"),
            record(TransactionAction::Borrow, "B2"),
            record(TransactionAction::Return, "B1"),
        ];
        let output = format_member_history("M1", &records);
        assert!(output.contains("3 event(s), 1 loan(s) still open"));
    }

    #[test]
    fn test_truncate_long_ids() {
        assert_eq!(truncate("ISBN-9780441013593", 10), "ISBN-97...");
        assert_eq!(truncate("B1", 10), "B1");
    }
}
