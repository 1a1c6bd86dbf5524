//! Flattening a session into a linear execution list.
//!
//! Exercises referenced by any round are expanded inside the round passes
//! only; the remaining pool exercises come first as standalone steps. The
//! algorithm is pure and tolerant: unresolvable code references and
//! non-positive repetition counts are reported as warnings, never errors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::{Exercise, Session};

/// Where a flattened step came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOrigin {
    /// Pool exercise not referenced by any round
    Standalone {
        /// Position in the session's exercise pool
        index: usize,
    },
    /// One occurrence of an exercise within a round repetition
    Round {
        /// Index of the round in the session's round list
        round_idx: usize,
        /// 1-based repetition number
        repetition: u32,
        /// Declared repetition count of the round
        total_repetitions: u32,
    },
}

/// One playable step in the flattened execution list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub exercise: Exercise,
    pub origin: StepOrigin,
}

impl Step {
    /// Whether this step belongs to a round expansion.
    pub fn is_round(&self) -> bool {
        matches!(self.origin, StepOrigin::Round { .. })
    }
}

/// Data-integrity warning produced while flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceWarning {
    /// A round references a code absent from the exercise pool
    OrphanReference { round_idx: usize, code: String },
    /// A round declares a non-positive repetition count and was skipped
    InvalidRepetitions { round_idx: usize, repetitions: i32 },
}

impl fmt::Display for SequenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceWarning::OrphanReference { round_idx, code } => {
                write!(f, "round {} references unknown exercise '{}'", round_idx, code)
            }
            SequenceWarning::InvalidRepetitions { round_idx, repetitions } => {
                write!(f, "round {} has repetition count {} and was skipped", round_idx, repetitions)
            }
        }
    }
}

/// Result of flattening a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenedSequence {
    /// Playable steps in final execution order
    pub steps: Vec<Step>,
    /// Data-integrity warnings for the caller/UI layer
    pub warnings: Vec<SequenceWarning>,
}

impl FlattenedSequence {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Flatten a session's exercises and rounds into one linear execution list.
///
/// Standalone steps come first, in pool order, excluding every code that any
/// round references. Rounds follow in declaration order; each round emits
/// its resolvable codes in declared order, repetition by repetition
/// (all of repetition 1, then all of repetition 2, ...). The `shuffled`
/// round flag is carried in the session data for the player and is never
/// applied here, so flattening the same session twice yields identical
/// output.
pub fn flatten(session: &Session) -> FlattenedSequence {
    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    let in_rounds = session.round_codes();

    for (index, exercise) in session.exercises.iter().enumerate() {
        if !in_rounds.contains(exercise.code.as_str()) {
            steps.push(Step {
                exercise: exercise.clone(),
                origin: StepOrigin::Standalone { index },
            });
        }
    }

    for (round_idx, round) in session.rounds.iter().enumerate() {
        if round.repetitions <= 0 {
            warnings.push(SequenceWarning::InvalidRepetitions {
                round_idx,
                repetitions: round.repetitions,
            });
            continue;
        }

        // One warning per orphan code, not one per repetition.
        for code in &round.exercises {
            if session.exercise_by_code(code).is_none() {
                warnings.push(SequenceWarning::OrphanReference {
                    round_idx,
                    code: code.clone(),
                });
            }
        }

        let total_repetitions = round.repetitions as u32;
        for repetition in 1..=total_repetitions {
            for code in &round.exercises {
                if let Some(exercise) = session.exercise_by_code(code) {
                    steps.push(Step {
                        exercise: exercise.clone(),
                        origin: StepOrigin::Round {
                            round_idx,
                            repetition,
                            total_repetitions,
                        },
                    });
                }
            }
        }
    }

    FlattenedSequence { steps, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ExerciseKind, Round};
    use proptest::prelude::*;

    fn exercise(code: &str, kind: ExerciseKind, duration_secs: u32) -> Exercise {
        Exercise {
            code: code.to_string(),
            name: code.to_string(),
            kind,
            duration_secs,
            variations: vec![],
        }
    }

    fn round(codes: &[&str], repetitions: i32) -> Round {
        Round {
            id: None,
            name: None,
            exercises: codes.iter().map(|c| c.to_string()).collect(),
            repetitions,
            shuffled: false,
        }
    }

    fn session(exercises: Vec<Exercise>, rounds: Vec<Round>) -> Session {
        Session {
            name: String::new(),
            focus: None,
            exercises,
            rounds,
        }
    }

    #[test]
    fn empty_session_flattens_to_nothing() {
        let flat = flatten(&Session::default());
        assert!(flat.is_empty());
        assert!(flat.warnings.is_empty());
    }

    #[test]
    fn standalone_steps_keep_pool_order() {
        let s = session(
            vec![
                exercise("A", ExerciseKind::CA, 60),
                exercise("B", ExerciseKind::TC, 120),
                exercise("C", ExerciseKind::VC, 30),
            ],
            vec![],
        );

        let flat = flatten(&s);
        assert_eq!(flat.len(), 3);
        let codes: Vec<&str> = flat.steps.iter().map(|st| st.exercise.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
        assert_eq!(flat.steps[1].origin, StepOrigin::Standalone { index: 1 });
        assert!(flat.steps.iter().all(|st| !st.is_round()));
    }

    #[test]
    fn round_codes_never_appear_standalone() {
        let s = session(
            vec![
                exercise("A", ExerciseKind::CA, 60),
                exercise("B", ExerciseKind::TC, 120),
            ],
            vec![round(&["B"], 2)],
        );

        let flat = flatten(&s);
        let standalone: Vec<&str> = flat
            .steps
            .iter()
            .filter(|st| !st.is_round())
            .map(|st| st.exercise.code.as_str())
            .collect();
        assert_eq!(standalone, vec!["A"]);
    }

    #[test]
    fn shared_code_excluded_once_regardless_of_round_count() {
        let s = session(
            vec![
                exercise("A", ExerciseKind::TC, 60),
                exercise("B", ExerciseKind::TC, 60),
            ],
            vec![round(&["A"], 1), round(&["A", "B"], 1)],
        );

        let flat = flatten(&s);
        // No standalone steps: both codes live in rounds.
        assert!(flat.steps.iter().all(Step::is_round));
        // A appears once per round pass it belongs to.
        let a_count = flat.steps.iter().filter(|st| st.exercise.code == "A").count();
        assert_eq!(a_count, 2);
    }

    #[test]
    fn repetitions_expand_block_by_block() {
        let s = session(
            vec![
                exercise("A", ExerciseKind::TC, 60),
                exercise("B", ExerciseKind::FM, 90),
            ],
            vec![round(&["A", "B"], 3)],
        );

        let flat = flatten(&s);
        let codes: Vec<&str> = flat.steps.iter().map(|st| st.exercise.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "A", "B", "A", "B"]);

        match flat.steps[2].origin {
            StepOrigin::Round { round_idx, repetition, total_repetitions } => {
                assert_eq!(round_idx, 0);
                assert_eq!(repetition, 2);
                assert_eq!(total_repetitions, 3);
            }
            _ => panic!("expected a round step"),
        }
    }

    #[test]
    fn standalone_precedes_rounds_in_output() {
        let s = session(
            vec![
                exercise("R", ExerciseKind::TC, 60),
                exercise("S", ExerciseKind::VC, 30),
            ],
            vec![round(&["R"], 1)],
        );

        let flat = flatten(&s);
        let codes: Vec<&str> = flat.steps.iter().map(|st| st.exercise.code.as_str()).collect();
        assert_eq!(codes, vec!["S", "R"]);
    }

    #[test]
    fn orphan_reference_is_skipped_with_warning() {
        let s = session(
            vec![exercise("A", ExerciseKind::TC, 60)],
            vec![round(&["A", "GHOST"], 2)],
        );

        let flat = flatten(&s);
        assert_eq!(flat.len(), 2); // A twice, GHOST never
        assert_eq!(
            flat.warnings,
            vec![SequenceWarning::OrphanReference {
                round_idx: 0,
                code: "GHOST".to_string(),
            }]
        );
    }

    #[test]
    fn non_positive_repetitions_skip_the_round() {
        for repetitions in [0, -1] {
            let s = session(
                vec![exercise("A", ExerciseKind::TC, 60)],
                vec![round(&["A"], repetitions)],
            );

            let flat = flatten(&s);
            // A is still referenced by the round, so it is not standalone either.
            assert!(flat.is_empty());
            assert_eq!(
                flat.warnings,
                vec![SequenceWarning::InvalidRepetitions {
                    round_idx: 0,
                    repetitions,
                }]
            );
        }
    }

    #[test]
    fn flatten_is_idempotent() {
        let s = session(
            vec![
                exercise("A", ExerciseKind::CA, 60),
                exercise("B", ExerciseKind::TC, 120),
                exercise("C", ExerciseKind::AD, 0),
            ],
            vec![round(&["B", "MISSING"], 2), round(&["C"], 1)],
        );

        assert_eq!(flatten(&s), flatten(&s));
    }

    proptest! {
        #[test]
        fn completeness_holds_for_arbitrary_sessions(
            pool_size in 0usize..8,
            round_specs in prop::collection::vec(
                (prop::collection::vec(0usize..10, 0..5), -1i32..4),
                0..4,
            ),
        ) {
            let exercises: Vec<Exercise> = (0..pool_size)
                .map(|i| exercise(&format!("E{i}"), ExerciseKind::TC, 60))
                .collect();
            // Code indices at or past pool_size are orphans on purpose.
            let rounds: Vec<Round> = round_specs
                .iter()
                .map(|(refs, reps)| {
                    let codes: Vec<String> = refs.iter().map(|i| format!("E{i}")).collect();
                    Round {
                        id: None,
                        name: None,
                        exercises: codes,
                        repetitions: *reps,
                        shuffled: false,
                    }
                })
                .collect();
            let s = Session {
                name: String::new(),
                focus: None,
                exercises,
                rounds,
            };

            let flat = flatten(&s);

            let referenced = s.round_codes();
            let standalone_expected = s
                .exercises
                .iter()
                .filter(|e| !referenced.contains(e.code.as_str()))
                .count();
            let round_expected: usize = s
                .rounds
                .iter()
                .map(|r| {
                    if r.repetitions <= 0 {
                        return 0;
                    }
                    let resolvable = r
                        .exercises
                        .iter()
                        .filter(|c| s.exercise_by_code(c).is_some())
                        .count();
                    r.repetitions as usize * resolvable
                })
                .sum();

            prop_assert_eq!(flat.len(), standalone_expected + round_expected);
            // Exclusivity: no standalone step carries a round-referenced code.
            prop_assert!(flat
                .steps
                .iter()
                .filter(|st| !st.is_round())
                .all(|st| !referenced.contains(st.exercise.code.as_str())));
            // Idempotence.
            prop_assert_eq!(flat, flatten(&s));
        }
    }
}
