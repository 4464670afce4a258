use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use shelf::cli::{
    handle_book_command, handle_borrow_command, handle_history_command, handle_member_command,
    handle_return_command, BookCommands, HistoryArgs, LoanArgs, MemberCommands,
};
use shelf::config::{paths::ShelfPaths, settings::Settings};
use shelf::services::Catalog;

#[derive(Parser)]
#[command(
    name = "shelf",
    version,
    about = "Terminal-based library catalog manager",
    long_about = "Shelf keeps track of a small library's books, members and loans. \
                  Everything is stored in plain comma-separated text files."
)]
struct Cli {
    /// Directory holding config.json and the data files
    #[arg(long, global = true, env = "SHELF_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Book management commands
    #[command(subcommand)]
    Book(BookCommands),

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Lend a book to a member
    Borrow(LoanArgs),

    /// Take a book back from a member
    Return(LoanArgs),

    /// Show the transaction log
    History(HistoryArgs),

    /// Create the settings file and empty data files
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => ShelfPaths::with_base_dir(dir),
        None => ShelfPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let files = paths.catalog_files(&settings);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Shelf at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            shelf::storage::initialize_storage(&files)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'shelf book add <id> <title> <author> <copies>' to add your first book.");
        }
        Some(Commands::Config) => {
            println!("Shelf Configuration");
            println!("===================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Books file:        {}", files.books.display());
            println!("Members file:      {}", files.members.display());
            println!("Transactions file: {}", files.transactions.display());
            println!("History limit:     {}", settings.history_limit);
            println!();
            if !paths.is_initialized() || shelf::storage::needs_initialization(&files) {
                println!("Not initialized. Run 'shelf init' to create the data files.");
            } else {
                let log = shelf::storage::TransactionLog::new(files.transactions.clone());
                println!("Transactions:      {}", log.entry_count()?);
            }
        }
        Some(Commands::Book(cmd)) => handle_book_command(&mut Catalog::open(files)?, cmd)?,
        Some(Commands::Member(cmd)) => handle_member_command(&mut Catalog::open(files)?, cmd)?,
        Some(Commands::Borrow(args)) => handle_borrow_command(&mut Catalog::open(files)?, args)?,
        Some(Commands::Return(args)) => handle_return_command(&mut Catalog::open(files)?, args)?,
        Some(Commands::History(args)) => {
            handle_history_command(&Catalog::open(files)?, &settings, args)?
        }
        None => {
            println!("Shelf - library catalog manager");
            println!();
            println!("Run 'shelf --help' for usage information.");
        }
    }

    Ok(())
}
