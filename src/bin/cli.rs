//! Mamo CLI
//!
//! Command-line interface for managing announcements.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mamo::config::DEFAULT_DATA_FILE;
use mamo::{display, AnnouncementManager, AnnouncementUpdate, Config, Priority, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Mamo Announcements
#[derive(Parser, Debug)]
#[command(name = "mamo")]
#[command(about = "Manage announcements from the command line")]
#[command(version)]
struct Args {
    /// Announcements file
    #[arg(short, long, env = "MAMO_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Log library activity to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all announcements
    List {
        /// Filter by priority (low, normal, high)
        #[arg(long)]
        priority: Option<String>,
    },

    /// Create a new announcement
    Create {
        /// Title of the announcement
        title: String,

        /// Content of the announcement
        content: String,

        /// Priority level (low, normal, high)
        #[arg(long, default_value = "normal")]
        priority: String,
    },

    /// View a specific announcement
    View {
        /// ID of the announcement
        id: u64,
    },

    /// Update an announcement
    Update {
        /// ID of the announcement
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// New priority (low, normal, high)
        #[arg(long)]
        priority: Option<String>,
    },

    /// Delete an announcement
    Delete {
        /// ID of the announcement
        id: u64,

        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for command output
    let default_filter = if args.verbose { "warn,mamo=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("Mamo v{}", mamo::VERSION);
    tracing::debug!("Data file: {}", args.file.display());

    let config = Config::builder().data_file(&args.file).build();

    if let Err(e) = run(&config, args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(config: &Config, command: Commands) -> Result<()> {
    // Priorities are parsed before the file is opened
    match command {
        Commands::List { priority } => {
            let filter = priority.as_deref().map(str::parse::<Priority>).transpose()?;
            let manager = AnnouncementManager::open(config)?;
            list(&manager, filter);
        }
        Commands::Create {
            title,
            content,
            priority,
        } => {
            let priority: Priority = priority.parse()?;
            let mut manager = AnnouncementManager::open(config)?;
            let created = manager.create(title, content, priority)?;
            println!("\n✓ Announcement created successfully with ID: {}", created.id);
            println!("{}", display::detail(&created));
        }
        Commands::View { id } => {
            let manager = AnnouncementManager::open(config)?;
            println!("{}", display::detail(manager.get(id)?));
        }
        Commands::Update {
            id,
            title,
            content,
            priority,
        } => {
            let update = AnnouncementUpdate {
                title,
                content,
                priority: priority.as_deref().map(str::parse::<Priority>).transpose()?,
            };
            let mut manager = AnnouncementManager::open(config)?;
            let updated = manager.update(id, update)?;
            println!("\n✓ Announcement {} updated successfully", id);
            println!("{}", display::detail(&updated));
        }
        Commands::Delete { id, force } => {
            let mut manager = AnnouncementManager::open(config)?;
            manager.get(id)?;

            if !force && !confirm(id)? {
                println!("Deletion cancelled.");
                return Ok(());
            }

            manager.delete(id)?;
            println!("\n✓ Announcement {} deleted successfully", id);
        }
    }

    Ok(())
}

fn list(manager: &AnnouncementManager, filter: Option<Priority>) {
    let announcements: Vec<_> = match filter {
        Some(priority) => manager.get_by_priority(priority),
        None => manager.get_all().iter().collect(),
    };

    println!("{}", display::listing(manager.len(), &announcements));
}

/// Ask on stdin; only `y`/`Y` confirms
fn confirm(id: u64) -> Result<bool> {
    print!("Are you sure you want to delete announcement {}? (y/n): ", id);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
