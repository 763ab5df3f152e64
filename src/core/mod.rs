//! Core generator functionality
//!
//! The three generators are pure functions over typed inputs:
//!
//! - [`cable`]: cable name assembly for cluster and feeder runs
//! - [`slack`]: slack and tolerance length calculation with the report text
//! - [`error`]: the input error type and its `Error: ...` rendering
//!
//! Form fields are parsed once at the boundary (see [`crate::validators`]);
//! nothing here keeps state between calls.

pub mod cable;
pub mod error;
pub mod slack;


use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The three generators offered by the form and the command line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    #[default]
    CableName,
    ClusterLength,
    FeederLength,
}

impl Generator {
    /// Tab title
    pub const fn title(self) -> &'static str {
        match self {
            Generator::CableName => "Cable Generator",
            Generator::ClusterLength => "Cluster Description Generator",
            Generator::FeederLength => "Feeder Description Generator",
        }
    }
}

/// Turns a generator outcome into the text shown to the user.
///
/// Successful results render through their `Display` impl. Errors become
/// `Error: {details}` so a bad field never surfaces as a program fault.
pub fn render_outcome<T: Display>(outcome: error::Result<T>) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(e) => {
            tracing::warn!("Generation rejected input: {e}");
            e.display_text()
        }
    }
}

/// Parses the cluster length fields and renders the report or the error text.
pub fn generate_cluster_report(route: &str, slack_fdt: &str, slack_fat: &str, otdr: &str) -> String {
    render_outcome(
        slack::ClusterLengthInput::from_fields(route, slack_fdt, slack_fat, otdr)
            .and_then(|input| input.compute()),
    )
}

/// Parses the feeder length fields and renders the report or the error text.
pub fn generate_feeder_report(route: &str, slack: &str, otdr: &str) -> String {
    render_outcome(
        slack::FeederLengthInput::from_fields(route, slack, otdr).and_then(|input| input.compute()),
    )
}
