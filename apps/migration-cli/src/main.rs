use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use darts_backend::config::db::{DbProfile, DbSettings};
use darts_backend::infra::db::connect_db;
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Darts scoreboard database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// SQLite database file (defaults to DARTS_DB_FILE, then darts.db)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,darts_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let mut settings = match DbSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    if let Some(file) = args.file {
        settings.profile = DbProfile::File(file);
    }

    if settings.profile == DbProfile::InMemory {
        eprintln!("In-memory databases are not supported for CLI operations.");
        eprintln!("Each run would migrate a fresh database that is gone when the command exits.");
        eprintln!("Example: migration --file darts.db status");
        std::process::exit(2);
    }

    let conn = match connect_db(&settings).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not open database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
