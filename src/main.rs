use anyhow::Result;
use clap::{Parser, Subcommand};

use cashbook::cli::{
    handle_balance_command, handle_category_command, handle_import_command,
    handle_transaction_command, CategoryCommands, TransactionCommands,
};
use cashbook::config::{paths::CashbookPaths, settings::Settings};
use cashbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cashbook",
    version,
    about = "Import transaction CSV files and report balances",
    long_about = "Cashbook imports CSV files with title, type, value and category \
                  columns into a local store, creating categories as needed, and \
                  reports income, outcome and net total."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a CSV file (title,type,value,category) and delete it afterwards
    Import {
        /// Path to the CSV file, or a file name inside the upload directory
        file: String,
    },

    /// Show income, outcome and total over all transactions
    Balance,

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CashbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &settings, &file)?;
        }
        Some(Commands::Balance) => {
            handle_balance_command(&storage)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Cashbook Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Upload directory: {}", settings.upload_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Log level: {}", settings.log_level);
        }
        None => {
            println!("Cashbook - import transaction CSV files and report balances");
            println!();
            println!("Run 'cashbook --help' for usage information.");
        }
    }

    Ok(())
}
