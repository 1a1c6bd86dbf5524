use std::path::{Path, PathBuf};

use atril_core::{
    check_promotion, criteria_status, CriterionOverride, KeyCriterion, LevelConfig, SkillXp,
};
use clap::Subcommand;
use serde::de::DeserializeOwned;

#[derive(Subcommand)]
pub enum LevelAction {
    /// Check whether a student may leave their current level
    Check {
        /// Current technical level
        #[arg(long)]
        level: u32,
        /// JSON file with the per-level exit requirements (array)
        #[arg(long)]
        configs: PathBuf,
        /// JSON file with the student's accumulated XP
        #[arg(long)]
        xp: PathBuf,
        /// JSON file with the key criteria (array)
        #[arg(long)]
        criteria: Option<PathBuf>,
        /// JSON file with the teacher's recorded criterion statuses (array)
        #[arg(long)]
        overrides: Option<PathBuf>,
    },
}

pub fn run(action: LevelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LevelAction::Check {
            level,
            configs,
            xp,
            criteria,
            overrides,
        } => {
            let configs: Vec<LevelConfig> = load_json(&configs)?;
            let xp: SkillXp = load_json(&xp)?;
            let criteria: Vec<KeyCriterion> = match criteria {
                Some(path) => load_json(&path)?,
                None => Vec::new(),
            };
            let overrides: Vec<CriterionOverride> = match overrides {
                Some(path) => load_json(&path)?,
                None => Vec::new(),
            };

            let config = configs.iter().find(|c| c.level == level);
            let checks = criteria_status(level, &criteria, &overrides);
            let result = check_promotion(config, &xp, &checks);

            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
