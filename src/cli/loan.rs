//! Borrow and return CLI commands
//!
//! The catalog decides the outcome; these handlers only print its status
//! message. A rejected request is not a command failure.

use clap::Args;

use crate::error::ShelfResult;
use crate::services::Catalog;

/// Arguments shared by `borrow` and `return`
#[derive(Args)]
pub struct LoanArgs {
    /// Member ID
    pub member_id: String,
    /// Book title (case-insensitive; may be given unquoted)
    #[arg(required = true, num_args = 1..)]
    pub title: Vec<String>,
}

impl LoanArgs {
    fn title(&self) -> String {
        self.title.join(" ").trim().to_string()
    }
}

/// Handle `shelf borrow`
pub fn handle_borrow_command(catalog: &mut Catalog, args: LoanArgs) -> ShelfResult<()> {
    let outcome = catalog.borrow_transaction(args.member_id.trim(), &args.title())?;
    println!("{}", outcome);
    Ok(())
}

/// Handle `shelf return`
pub fn handle_return_command(catalog: &mut Catalog, args: LoanArgs) -> ShelfResult<()> {
    let outcome = catalog.return_transaction(args.member_id.trim(), &args.title())?;
    println!("{}", outcome);
    Ok(())
}
