use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "atril", version, about = "Atril practice manager CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Session document inspection
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Practice record entry
    Record {
        #[command(subcommand)]
        action: commands::record::RecordAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Level promotion checks
    Level {
        #[command(subcommand)]
        action: commands::level::LevelAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Session { action } => commands::session::run(action),
        Commands::Record { action } => commands::record::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Level { action } => commands::level::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
