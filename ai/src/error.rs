use thiserror::Error;

/// Errors that can abort a single decision
#[derive(Error, Debug)]
pub enum DecisionError {
    #[error("Move not found in request: {0}")]
    MoveNotFound(String),

    #[error("Switch target is not an available reserve: {0}")]
    InvalidSwitch(String),

    #[error(transparent)]
    Snapshot(#[from] anyhow::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Probability {field} must be within 0..=1, got {value}")]
    InvalidProbability { field: &'static str, value: f64 },
}
