//! Transaction history CLI command

use clap::Args;

use crate::config::Settings;
use crate::display::format_member_history;
use crate::error::ShelfResult;
use crate::services::Catalog;

/// Arguments for `shelf history`
#[derive(Args)]
pub struct HistoryArgs {
    /// Show only the most recent N entries (0 = all; defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Show the loan history of one member
    #[arg(short, long)]
    pub member: Option<String>,
}

/// Handle `shelf history`
pub fn handle_history_command(
    catalog: &Catalog,
    settings: &Settings,
    args: HistoryArgs,
) -> ShelfResult<()> {
    if let Some(member_id) = args.member {
        let member = catalog.member(member_id.trim())?;
        let records = catalog.member_history(&member.id)?;
        print!("{}", format_member_history(&member.id, &records));
        return Ok(());
    }

    let limit = args.limit.unwrap_or(settings.history_limit);
    let lines = if limit == 0 {
        catalog.transaction_history()?
    } else {
        catalog.recent_history(limit)?
    };

    if lines.is_empty() {
        println!("No transactions recorded yet.");
        return Ok(());
    }

    println!("Transaction History:");
    for line in &lines {
        println!("{}", line);
    }

    Ok(())
}
