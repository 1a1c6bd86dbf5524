//! Session domain types.
//!
//! Canonical structs for the practice-session documents produced by the
//! authoring editor. The wire format keeps the editor's Spanish field names
//! (`bloques`, `rondas`, `duracionSeg`, ...); legacy snake_case spellings
//! from the local-storage era are accepted via serde aliases so the drift is
//! resolved here once, not re-checked downstream.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Exercise category code (`tipo`).
///
/// Codes are carried verbatim from the authoring format. `AD` is the
/// administrative/rest category excluded from timed-duration totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseKind {
    /// Warm-up A
    CA,
    /// Warm-up B
    CB,
    /// Core technique
    TC,
    /// Maintenance technique
    TM,
    /// Musical fragment
    FM,
    /// Cool-down
    VC,
    /// Notices/rest (untimed)
    AD,
}

impl ExerciseKind {
    /// Whether this category is excluded from timed-duration totals.
    pub fn is_untimed(&self) -> bool {
        matches!(self, ExerciseKind::AD)
    }

    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::CA => "Warm-up A",
            ExerciseKind::CB => "Warm-up B",
            ExerciseKind::TC => "Core technique",
            ExerciseKind::TM => "Maintenance technique",
            ExerciseKind::FM => "Musical fragment",
            ExerciseKind::VC => "Cool-down",
            ExerciseKind::AD => "Notices/rest",
        }
    }
}

/// Alternative content item for an exercise.
///
/// Carried through for the player and editor; the sequencing algorithms do
/// not interpret variations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variation {
    /// Variation label, e.g. "Sistema 1"
    #[serde(rename = "nombre", alias = "label")]
    pub label: String,
    /// Minimum student level (1-10) for this variation to be eligible
    #[serde(rename = "nivelMinimo", alias = "min_level", default)]
    pub min_level: u32,
    /// Estimated duration in seconds
    #[serde(rename = "duracionSeg", alias = "duracion_seg", default)]
    pub duration_secs: u32,
    /// Asset URLs (PDF, audio, video, image)
    #[serde(rename = "mediaLinks", alias = "media_links", default)]
    pub media_links: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A practice exercise (`bloque`) embedded in a session.
///
/// `code` is unique within the session, not globally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub code: String,
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: ExerciseKind,
    /// Target duration in seconds; absent means 0
    #[serde(rename = "duracionSeg", alias = "duracion_seg", default)]
    pub duration_secs: u32,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

/// A repeated sub-sequence of exercises (`ronda`) within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Round {
    /// Stable id for UI state; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "nombre", alias = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered exercise code references; may name codes absent from the pool
    #[serde(rename = "bloques", alias = "exercises", default)]
    pub exercises: Vec<String>,
    /// Consecutive repetition count; zero or negative means the round
    /// contributes nothing
    #[serde(rename = "repeticiones", alias = "repetitions", default = "default_repetitions")]
    pub repetitions: i32,
    /// Randomize play order at execution time (never applied by flattening)
    #[serde(rename = "aleatoria", alias = "shuffled", default)]
    pub shuffled: bool,
}

fn default_repetitions() -> i32 {
    1
}

/// A single practice unit: an exercise pool plus rounds over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: String,
    /// Free-text practice focus label, display only
    #[serde(rename = "foco", alias = "focus", default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(rename = "bloques", alias = "exercises", default)]
    pub exercises: Vec<Exercise>,
    #[serde(rename = "rondas", alias = "rounds", default)]
    pub rounds: Vec<Round>,
}

impl Session {
    /// Look up an exercise in the pool by code.
    pub fn exercise_by_code(&self, code: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.code == code)
    }

    /// All exercise codes referenced by any round.
    pub fn round_codes(&self) -> HashSet<&str> {
        self.rounds
            .iter()
            .flat_map(|r| r.exercises.iter().map(String::as_str))
            .collect()
    }
}
