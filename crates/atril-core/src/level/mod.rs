//! Level promotion checks.
//!
//! Pure rule evaluation over per-level exit requirements: accumulated XP
//! per master skill plus key criteria reviewed by the teacher. Callers
//! supply every input explicitly; nothing is read from ambient state.

use serde::{Deserialize, Serialize};

/// Accumulated XP per master skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillXp {
    #[serde(alias = "flex")]
    pub flexibility: u32,
    #[serde(alias = "motr")]
    pub motor: u32,
    #[serde(alias = "art")]
    pub articulation: u32,
}

/// Exit requirements for one technical level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: u32,
    #[serde(alias = "minXpFlex", default)]
    pub min_xp_flexibility: u32,
    #[serde(alias = "minXpMotr", default)]
    pub min_xp_motor: u32,
    #[serde(alias = "minXpArt", default)]
    pub min_xp_articulation: u32,
    /// Days of practice history considered as evidence
    #[serde(alias = "evidenceWindowDays", default = "default_evidence_window")]
    pub evidence_window_days: u32,
}

fn default_evidence_window() -> u32 {
    30
}

/// Who decides whether a criterion is met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriterionSource {
    /// Reviewed and recorded by the teacher
    #[serde(rename = "PROF")]
    Teacher,
    /// Derived automatically from practice records
    #[serde(rename = "PRACTICA")]
    Practice,
}

/// Review status of a criterion for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriterionStatus {
    Passed,
    Failed,
    Pending,
}

/// A key requirement attached to a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyCriterion {
    pub id: String,
    pub level: u32,
    pub description: String,
    /// Whether promotion is blocked while this criterion is unmet
    #[serde(default)]
    pub required: bool,
    pub source: CriterionSource,
}

/// A teacher's recorded status for one criterion and student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionOverride {
    #[serde(alias = "criterionId")]
    pub criterion_id: String,
    pub status: CriterionStatus,
}

/// A criterion paired with its resolved status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionCheck {
    pub criterion: KeyCriterion,
    pub status: CriterionStatus,
}

/// Result of a promotion check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionCheck {
    pub allowed: bool,
    /// Human-readable lines, one per unmet requirement
    pub missing: Vec<String>,
    pub xp: SkillXp,
    pub criteria: Vec<CriterionCheck>,
}

/// Resolve the status of every criterion attached to `level`.
///
/// Teacher-sourced criteria take their recorded override status and stay
/// pending until one exists.
// TODO: derive Practice-sourced criteria from practice records once the
// rule format is settled; they resolve to Pending until then.
pub fn criteria_status(
    level: u32,
    criteria: &[KeyCriterion],
    overrides: &[CriterionOverride],
) -> Vec<CriterionCheck> {
    criteria
        .iter()
        .filter(|c| c.level == level)
        .map(|criterion| {
            let status = match criterion.source {
                CriterionSource::Teacher => overrides
                    .iter()
                    .find(|o| o.criterion_id == criterion.id)
                    .map(|o| o.status)
                    .unwrap_or(CriterionStatus::Pending),
                CriterionSource::Practice => CriterionStatus::Pending,
            };
            CriterionCheck {
                criterion: criterion.clone(),
                status,
            }
        })
        .collect()
}

/// Check whether a student may leave their current level.
///
/// Requirements come from the CURRENT level's config (what it takes to exit
/// it). A missing config means free promotion. Every shortfall is reported
/// as a human-readable line; promotion is allowed only when none remain.
pub fn check_promotion(
    config: Option<&LevelConfig>,
    xp: &SkillXp,
    criteria: &[CriterionCheck],
) -> PromotionCheck {
    let Some(config) = config else {
        return PromotionCheck {
            allowed: true,
            missing: Vec::new(),
            xp: *xp,
            criteria: criteria.to_vec(),
        };
    };

    let mut missing = Vec::new();

    if xp.flexibility < config.min_xp_flexibility {
        missing.push(format!(
            "Flexibility XP: {}/{}",
            xp.flexibility, config.min_xp_flexibility
        ));
    }
    if xp.motor < config.min_xp_motor {
        missing.push(format!("Motor skills XP: {}/{}", xp.motor, config.min_xp_motor));
    }
    if xp.articulation < config.min_xp_articulation {
        missing.push(format!(
            "Articulation XP: {}/{}",
            xp.articulation, config.min_xp_articulation
        ));
    }

    for check in criteria {
        if check.criterion.required && check.status != CriterionStatus::Passed {
            missing.push(format!("Unmet criterion: {}", check.criterion.description));
        }
    }

    PromotionCheck {
        allowed: missing.is_empty(),
        missing,
        xp: *xp,
        criteria: criteria.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(flex: u32, motor: u32, art: u32) -> LevelConfig {
        LevelConfig {
            level: 3,
            min_xp_flexibility: flex,
            min_xp_motor: motor,
            min_xp_articulation: art,
            evidence_window_days: 30,
        }
    }

    fn criterion(id: &str, level: u32, required: bool, source: CriterionSource) -> KeyCriterion {
        KeyCriterion {
            id: id.to_string(),
            level,
            description: format!("criterion {id}"),
            required,
            source,
        }
    }

    #[test]
    fn no_config_means_free_promotion() {
        let xp = SkillXp::default();
        let result = check_promotion(None, &xp, &[]);
        assert!(result.allowed);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn xp_shortfalls_are_reported_per_skill() {
        let xp = SkillXp {
            flexibility: 10,
            motor: 50,
            articulation: 0,
        };
        let result = check_promotion(Some(&config(20, 40, 30)), &xp, &[]);

        assert!(!result.allowed);
        assert_eq!(
            result.missing,
            vec!["Flexibility XP: 10/20", "Articulation XP: 0/30"]
        );
    }

    #[test]
    fn met_requirements_allow_promotion() {
        let xp = SkillXp {
            flexibility: 20,
            motor: 40,
            articulation: 30,
        };
        let result = check_promotion(Some(&config(20, 40, 30)), &xp, &[]);
        assert!(result.allowed);
    }

    #[test]
    fn required_unpassed_criterion_blocks() {
        let xp = SkillXp {
            flexibility: 100,
            motor: 100,
            articulation: 100,
        };
        for status in [CriterionStatus::Failed, CriterionStatus::Pending] {
            let checks = vec![CriterionCheck {
                criterion: criterion("c1", 3, true, CriterionSource::Teacher),
                status,
            }];
            let result = check_promotion(Some(&config(0, 0, 0)), &xp, &checks);
            assert!(!result.allowed, "{status:?} should block");
            assert_eq!(result.missing, vec!["Unmet criterion: criterion c1"]);
        }
    }

    #[test]
    fn optional_criterion_never_blocks() {
        let checks = vec![CriterionCheck {
            criterion: criterion("c1", 3, false, CriterionSource::Teacher),
            status: CriterionStatus::Failed,
        }];
        let result = check_promotion(Some(&config(0, 0, 0)), &SkillXp::default(), &checks);
        assert!(result.allowed);
    }

    #[test]
    fn criteria_status_applies_teacher_overrides() {
        let criteria = vec![
            criterion("a", 3, true, CriterionSource::Teacher),
            criterion("b", 3, true, CriterionSource::Teacher),
            criterion("other-level", 4, true, CriterionSource::Teacher),
        ];
        let overrides = vec![CriterionOverride {
            criterion_id: "a".to_string(),
            status: CriterionStatus::Passed,
        }];

        let checks = criteria_status(3, &criteria, &overrides);
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].status, CriterionStatus::Passed);
        assert_eq!(checks[1].status, CriterionStatus::Pending);
    }

    #[test]
    fn practice_criteria_stay_pending() {
        let criteria = vec![criterion("p", 3, true, CriterionSource::Practice)];
        let overrides = vec![CriterionOverride {
            criterion_id: "p".to_string(),
            status: CriterionStatus::Passed,
        }];

        let checks = criteria_status(3, &criteria, &overrides);
        assert_eq!(checks[0].status, CriterionStatus::Pending);
    }

    #[test]
    fn wire_format_aliases_accepted() {
        let json = r#"{
            "level": 2,
            "minXpFlex": 15,
            "minXpMotr": 20,
            "minXpArt": 10,
            "evidenceWindowDays": 45
        }"#;
        let config: LevelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_xp_flexibility, 15);
        assert_eq!(config.evidence_window_days, 45);

        let criterion: KeyCriterion = serde_json::from_str(
            r#"{"id": "c", "level": 2, "description": "scale study", "required": true, "source": "PROF"}"#,
        )
        .unwrap();
        assert_eq!(criterion.source, CriterionSource::Teacher);
    }
}
