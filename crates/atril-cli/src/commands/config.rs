use atril_core::Config;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set the default student
    SetStudent { student: String },
    /// Set the minimum counted session length in seconds
    SetMinSessionSecs { secs: u32 },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetStudent { student } => {
            let mut config = Config::load()?;
            config.default_student = Some(student);
            config.save()?;
        }
        ConfigAction::SetMinSessionSecs { secs } => {
            let mut config = Config::load()?;
            config.stats.min_session_secs = secs;
            config.save()?;
        }
    }
    Ok(())
}
