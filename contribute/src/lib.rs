//! Contribution Verification Flow for ByteEdu
//!
//! Drives a single contribution submission from video selection through a
//! simulated asynchronous scan to a terminal outcome, appending verified
//! contributions to the achievement ledger:
//!
//! ```text
//! idle -> preview -> form -> scanning -> { success | duplicate | failed }
//!   ^______________________________________________|  (reset)
//! ```
//!
//! The verifier is simulated: the outcome is a deterministic rotation over
//! the per-session submission counter ([`policy::decide`]), pluggable via
//! [`OutcomePolicy`]. Scan timing is a trait ([`ScanClock`]) so tests run
//! without wall-clock delays.

pub mod config;
pub mod flow;
pub mod form;
pub mod media;
pub mod policy;
pub mod scan;
pub mod types;

// Re-export main types
pub use config::FlowConfig;
pub use flow::ContributionFlow;
pub use form::ContributionDraft;
pub use media::{MediaCapability, MediaPick, MockMedia, Permission};
pub use policy::{decide, OutcomePolicy, RotationPolicy};
pub use scan::{InstantClock, ScanClock, TokioClock};
pub use types::{FlowError, FlowState, Outcome};
