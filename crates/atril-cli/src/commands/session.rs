use std::path::{Path, PathBuf};

use atril_core::{ensure_round_ids, flatten, session_duration, Session};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show a session document with round ids assigned
    Show { file: PathBuf },
    /// Print the flattened execution list
    Flatten { file: PathBuf },
    /// Print the timed duration in seconds
    Duration { file: PathBuf },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionAction::Show { file } => {
            let session = load_session(&file)?;
            let patched = ensure_round_ids(&session);
            println!("{}", serde_json::to_string_pretty(&patched)?);
        }
        SessionAction::Flatten { file } => {
            let session = load_session(&file)?;
            let flat = flatten(&session);
            for warning in &flat.warnings {
                eprintln!("warning: {warning}");
            }
            println!("{}", serde_json::to_string_pretty(&flat.steps)?);
        }
        SessionAction::Duration { file } => {
            let session = load_session(&file)?;
            println!("{}", session_duration(&session));
        }
    }
    Ok(())
}

fn load_session(path: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
