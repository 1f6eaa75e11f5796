//! Configuration validation using `Validation`.
//!
//! Every check runs and every violation is reported in a single pass, so a
//! hand-written configuration can be fixed in one go.

use crate::config::error::ConfigViolation;
use crate::config::Config;
use crate::core::{Event, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Run every configuration check, accumulating ALL violations.
pub fn validate<S: State, E: Event>(config: &Config<S, E>) -> Check {
    let mut checks: Vec<Check> = vec![
        has_states(config),
        declared(config, config.initial(), |state| {
            ConfigViolation::UndeclaredInitial { state }
        }),
    ];

    // an implicit baseline is the initial state, already checked above
    if let Some(baseline) = &config.baseline {
        checks.push(declared(config, baseline, |state| {
            ConfigViolation::UndeclaredBaseline { state }
        }));
    }

    checks.extend(transition_targets(config));

    Validation::all_vec(checks).map(|_| ())
}

fn has_states<S: State, E: Event>(config: &Config<S, E>) -> Check {
    if config.states().is_empty() {
        Validation::fail(ConfigViolation::NoStates)
    } else {
        Validation::success(())
    }
}

fn declared<S: State, E: Event>(
    config: &Config<S, E>,
    state: &S,
    violation: impl FnOnce(String) -> ConfigViolation,
) -> Check {
    // an empty table is already reported by has_states
    if config.states().is_empty() || config.contains(state) {
        Validation::success(())
    } else {
        Validation::fail(violation(state.name().to_string()))
    }
}

fn transition_targets<S: State, E: Event>(config: &Config<S, E>) -> Vec<Check> {
    config
        .states()
        .iter()
        .flat_map(move |(from, definition)| {
            definition
                .transitions
                .iter()
                .filter(move |(_, to)| !config.contains(to))
                .map(move |(event, to)| {
                    Validation::fail(ConfigViolation::UndeclaredTarget {
                        from: from.name().to_string(),
                        event: event.name().to_string(),
                        to: to.name().to_string(),
                    })
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateDefinition;
    use std::collections::HashMap;

    fn definition(pairs: &[(&str, &str)]) -> StateDefinition<String, String> {
        StateDefinition {
            transitions: pairs
                .iter()
                .map(|(e, t)| (e.to_string(), t.to_string()))
                .collect(),
        }
    }

    fn sample() -> HashMap<String, StateDefinition<String, String>> {
        let mut states = HashMap::new();
        states.insert("normal".to_string(), definition(&[("go", "active")]));
        states.insert("active".to_string(), definition(&[("stop", "normal")]));
        states
    }

    #[test]
    fn valid_configuration_passes() {
        let config = Config::new("normal".to_string(), sample());
        assert!(validate(&config).is_success());
    }

    #[test]
    fn empty_configuration_reports_only_no_states() {
        let config: Config<String, String> = Config::new("normal".to_string(), HashMap::new());

        match validate(&config) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().all(|e| *e == ConfigViolation::NoStates));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut states = sample();
        states.insert("paused".to_string(), definition(&[("resume", "running")]));

        let config = Config::new("start".to_string(), states).with_baseline("root".to_string());

        match validate(&config) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_initial = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UndeclaredInitial { .. }));
                let has_baseline = errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UndeclaredBaseline { .. }));
                let has_target = errors.iter().any(|e| {
                    matches!(e, ConfigViolation::UndeclaredTarget { to, .. } if to == "running")
                });

                assert!(has_initial);
                assert!(has_baseline);
                assert!(has_target);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
