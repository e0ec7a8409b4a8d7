//! Core types for the contribution verification flow.

use serde::{Deserialize, Serialize};

/// State of a single contribution submission.
///
/// `Success`, `Duplicate` and `Failed` are terminal: the only transition
/// out of them is `reset` back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// No video selected yet
    Idle,
    /// A video reference is held, awaiting confirmation
    Preview,
    /// Filling category/title/description
    Form,
    /// Simulated analysis in progress
    Scanning,
    /// Contribution verified and appended to the ledger
    Success,
    /// Simulated verifier flagged the activity as already verified
    Duplicate,
    /// Simulated verifier rejected the video
    Failed,
}

impl FlowState {
    /// Whether this is a terminal outcome state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Duplicate | Self::Failed)
    }
}

/// Outcome of a simulated verification scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Contribution verified
    Success,
    /// Activity already verified previously
    Duplicate,
    /// Video rejected
    Failed,
}

impl Outcome {
    /// The flow state this outcome lands in.
    pub fn terminal_state(&self) -> FlowState {
        match self {
            Self::Success => FlowState::Success,
            Self::Duplicate => FlowState::Duplicate,
            Self::Failed => FlowState::Failed,
        }
    }
}

/// Error types for the contribution flow.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Operation not valid in the current state
    #[error("Invalid transition from {state:?}: {action}")]
    InvalidTransition {
        /// State the flow was in
        state: FlowState,
        /// Action that was attempted
        action: &'static str,
    },

    /// Form failed validation on submit
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Ledger append failed; the entry was not persisted
    #[error("Ledger append failed: {0}")]
    AppendFailed(#[from] ledger::StoreError),
}

pub type Result<T> = std::result::Result<T, FlowError>;
