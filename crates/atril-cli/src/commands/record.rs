use atril_core::{Config, Database, PracticeRecord};
use chrono::NaiveDateTime;
use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum RecordAction {
    /// Record a completed practice session
    Add {
        /// Student id; falls back to the configured default
        #[arg(long)]
        student: Option<String>,
        /// Local start time, "YYYY-MM-DD HH:MM"
        #[arg(long)]
        started_at: String,
        /// Practiced time in seconds
        #[arg(long)]
        duration_secs: u32,
        /// Exercises completed
        #[arg(long, default_value_t = 0)]
        completed: u32,
        /// Exercises skipped
        #[arg(long, default_value_t = 0)]
        skipped: u32,
        /// Satisfaction rating (1-5)
        #[arg(long)]
        rating: Option<f64>,
        /// Practice focus label
        #[arg(long)]
        focus: Option<String>,
    },
}

pub fn run(action: RecordAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RecordAction::Add {
            student,
            started_at,
            duration_secs,
            completed,
            skipped,
            rating,
            focus,
        } => {
            let config = Config::load()?;
            let student = student
                .or(config.default_student)
                .ok_or("no student given and no default_student configured")?;
            let started_at = NaiveDateTime::parse_from_str(&started_at, "%Y-%m-%d %H:%M")?;

            let record = PracticeRecord {
                id: Uuid::new_v4().to_string(),
                student,
                started_at,
                duration_secs,
                completed_blocks: completed,
                skipped_blocks: skipped,
                rating,
                focus,
            };

            let db = Database::open()?;
            db.record_practice(&record)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }
    Ok(())
}
