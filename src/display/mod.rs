//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{format_member_history, format_transaction_row};

/// Join display lines, or show `empty_message` when there are none
pub fn format_lines<S: AsRef<str>>(lines: &[S], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line.as_ref());
        output.push('\n');
    }
    output
}
