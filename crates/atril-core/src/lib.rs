//! # Atril Core Library
//!
//! This library provides the core business logic for Atril, a practice
//! manager for music students: teachers author practice sessions (ordered
//! exercises plus repeated rounds), students play them back, and progress
//! views chart the recorded practice time.
//!
//! ## Architecture
//!
//! - **Sequencing**: pure flattening of a session definition into the
//!   linear execution list the player drives, plus timed-duration totals
//! - **Calendar**: timezone-naive local date math (Monday-start weeks,
//!   ISO week numbers) for the weekly views
//! - **Stats**: zero-filled daily series and bucket aggregation for the
//!   progress charts
//! - **Level**: XP and key-criteria promotion checks
//! - **Storage**: SQLite practice-record store and TOML configuration
//!
//! ## Key Components
//!
//! - [`flatten`]: session flattening into playable steps
//! - [`session_duration`]: timed practice total of a session
//! - [`build_daily_series`] / [`aggregate_series`]: chart series
//! - [`check_promotion`]: level promotion rule evaluation
//! - [`Database`] / [`Config`]: persistence

pub mod calendar;
pub mod error;
pub mod level;
pub mod sequence;
pub mod session;
pub mod stats;
pub mod storage;

pub use error::{ConfigError, CoreError, Result, StorageError, ValidationError};
pub use level::{
    check_promotion, criteria_status, CriterionCheck, CriterionOverride, CriterionSource,
    CriterionStatus, KeyCriterion, LevelConfig, PromotionCheck, SkillXp,
};
pub use sequence::{
    ensure_round_ids, flatten, play_order, round_duration, session_duration, FlattenedSequence,
    SequenceWarning, Step, StepOrigin,
};
pub use session::{Exercise, ExerciseKind, Round, Session, Variation};
pub use stats::{
    aggregate_series, build_daily_series, choose_bucket, Bucket, BucketEntry, DayEntry,
    PracticeRecord,
};
pub use storage::{Config, Database, StatsConfig};
