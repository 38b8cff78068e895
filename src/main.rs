use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finlog::cli::{handle_history_command, handle_record_command, Prompter, RecordCommands, RecordManager};
use finlog::config::{LedgerPaths, Settings};
use finlog::services::RecordService;
use finlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finlog",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "finlog keeps a simple expense ledger in a local JSON file. \
                  Run it without a subcommand for the interactive menu, or use \
                  the add, delete and list subcommands from scripts."
)]
struct Cli {
    /// Ledger file (defaults to ./records.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "FINLOG_LOG", default_value = "error")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    #[command(flatten)]
    Record(RecordCommands),

    /// Show recent creates and deletes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the default settings file if none exists
        #[arg(long)]
        write_defaults: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let paths = LedgerPaths::resolve(cli.file);
    let settings = Settings::load_or_create(&paths);

    match cli.command {
        None | Some(Commands::Menu) => {
            let mut storage = Storage::open(paths, &settings);
            let prompter = Prompter::new(io::stdin().lock(), io::stdout());
            let mut manager = RecordManager::new(
                RecordService::new(&mut storage),
                prompter,
                settings.currency_symbol.clone(),
            );
            manager.run_menu()?;
        }
        Some(Commands::Record(cmd)) => {
            let mut storage = Storage::open(paths, &settings);
            handle_record_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            let storage = Storage::open(paths, &settings);
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Config { write_defaults }) => {
            if write_defaults && !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }

            println!("finlog Configuration");
            println!("====================");
            println!("Ledger file:   {}", paths.records_file().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!("Audit log:     {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}
