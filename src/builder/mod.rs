//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and token macros for assembling
//! configurations in code, with the same validation applied to JSON input.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::config::Config;
use crate::core::{Event, State};

/// Build a configuration from `(from, event, to)` triples.
///
/// Every state that appears as a source is declared; targets must appear
/// as a source somewhere or be listed in `terminal`.
///
/// # Example
///
/// ```
/// use retrace::builder::table;
///
/// let config = table::<String, String>(
///     "idle".into(),
///     vec![
///         ("idle".into(), "start".into(), "running".into()),
///         ("running".into(), "finish".into(), "done".into()),
///     ],
///     vec!["done".into()],
/// )
/// .unwrap();
///
/// assert_eq!(config.states().len(), 3);
/// ```
pub fn table<S, E>(
    initial: S,
    transitions: Vec<(S, E, S)>,
    terminal: Vec<S>,
) -> Result<Config<S, E>, BuildError>
where
    S: State,
    E: Event,
{
    let builder = transitions
        .into_iter()
        .fold(ConfigBuilder::new().initial(initial), |builder, (from, event, to)| {
            builder.transition(from, event, to)
        });

    terminal
        .into_iter()
        .fold(builder, ConfigBuilder::state)
        .build()
}
