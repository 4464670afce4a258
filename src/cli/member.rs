//! Member CLI commands

use clap::Subcommand;

use crate::display::format_lines;
use crate::error::ShelfResult;
use crate::models::Member;
use crate::services::Catalog;

use super::validate_field;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Register a new member
    Add {
        /// Member ID
        id: String,
        /// Member name
        name: String,
    },
    /// List all members
    List,
}

/// Handle a member command
pub fn handle_member_command(catalog: &mut Catalog, cmd: MemberCommands) -> ShelfResult<()> {
    match cmd {
        MemberCommands::Add { id, name } => {
            validate_field("Member ID", &id)?;
            validate_field("Name", &name)?;

            if catalog.add_member(Member::new(id.trim(), name.trim()))? {
                println!("Member added successfully!");
            } else {
                println!("Member ID {} is already registered; nothing changed.", id.trim());
            }
        }

        MemberCommands::List => {
            print!(
                "{}",
                format_lines(&catalog.display_all_members(), "No members available.")
            );
        }
    }

    Ok(())
}
