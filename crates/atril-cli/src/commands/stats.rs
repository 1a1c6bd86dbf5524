use atril_core::calendar::parse_local_date;
use atril_core::{aggregate_series, build_daily_series, choose_bucket, Bucket, Config, Database};
use clap::{Subcommand, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum BucketArg {
    Day,
    Week,
    Fortnight,
    Month,
}

impl From<BucketArg> for Bucket {
    fn from(arg: BucketArg) -> Self {
        match arg {
            BucketArg::Day => Bucket::Day,
            BucketArg::Week => Bucket::Week,
            BucketArg::Fortnight => Bucket::Fortnight,
            BucketArg::Month => Bucket::Month,
        }
    }
}

#[derive(Subcommand)]
pub enum StatsAction {
    /// Bucketed progress series for a date range
    Series {
        /// Range start, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Range end (inclusive), YYYY-MM-DD
        #[arg(long)]
        to: String,
        /// Restrict to one student; falls back to the configured default
        #[arg(long)]
        student: Option<String>,
        /// Override the automatic bucket choice
        #[arg(long, value_enum)]
        bucket: Option<BucketArg>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Series {
            from,
            to,
            student,
            bucket,
        } => {
            let start = parse_local_date(&from)?;
            let end = parse_local_date(&to)?;

            let config = Config::load()?;
            let student = student.or(config.default_student);

            let db = Database::open()?;
            let records = db.records_between(start, end, student.as_deref())?;
            let counted: Vec<_> = records
                .into_iter()
                .filter(|r| r.duration_secs >= config.stats.min_session_secs)
                .collect();

            let series = build_daily_series(&counted, Some(start), Some(end));
            let bucket = bucket.map(Bucket::from).unwrap_or_else(|| choose_bucket(start, end));
            let aggregated = aggregate_series(&series, bucket);

            println!("{}", serde_json::to_string_pretty(&aggregated)?);
        }
    }
    Ok(())
}
