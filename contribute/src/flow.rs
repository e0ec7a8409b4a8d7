//! The contribution verification state machine.
//!
//! Drives one submission from video selection through the simulated scan to
//! a terminal outcome, appending to the achievement ledger on success. All
//! methods take `&mut self`, so submissions cannot interleave: the counter
//! read and the resulting outcome are sequential per submission.

use std::sync::Arc;
use tracing::{debug, info, warn};

use ledger::{Achievement, ContributionType, KeyValueStore, LedgerRepository};

use crate::config::FlowConfig;
use crate::form::ContributionDraft;
use crate::media::{MediaCapability, MediaPick, Permission};
use crate::policy::{OutcomePolicy, RotationPolicy};
use crate::scan::{ScanClock, TokioClock};
use crate::types::{FlowError, FlowState, Outcome, Result};

/// State machine for a single contribution submission flow.
///
/// Holds the per-session submission counter; `reset` clears the draft and
/// video but never the counter (it is session-lifetime, not per-flow).
pub struct ContributionFlow {
    config: FlowConfig,
    state: FlowState,
    draft: ContributionDraft,
    video_uri: Option<String>,
    scan_progress: u8,
    submissions: u64,
    policy: Box<dyn OutcomePolicy>,
    clock: Box<dyn ScanClock>,
    ledger: LedgerRepository,
}

impl ContributionFlow {
    /// Create a flow over `store` with the default configuration,
    /// rotation policy and tokio clock.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(store, FlowConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(store: Arc<dyn KeyValueStore>, config: FlowConfig) -> Self {
        let ledger = LedgerRepository::with_key(store, config.storage_key.clone());
        Self {
            config,
            state: FlowState::Idle,
            draft: ContributionDraft::new(),
            video_uri: None,
            scan_progress: 0,
            submissions: 0,
            policy: Box::new(RotationPolicy),
            clock: Box::new(TokioClock),
            ledger,
        }
    }

    /// Replace the outcome policy.
    pub fn with_policy(mut self, policy: Box<dyn OutcomePolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the scan clock.
    pub fn with_clock(mut self, clock: Box<dyn ScanClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current flow state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// The in-progress form draft.
    pub fn draft(&self) -> &ContributionDraft {
        &self.draft
    }

    /// The held video reference, if any.
    pub fn video_uri(&self) -> Option<&str> {
        self.video_uri.as_deref()
    }

    /// Scan progress indicator (0-100).
    pub fn scan_progress(&self) -> u8 {
        self.scan_progress
    }

    /// Number of submissions made this session.
    pub fn submission_count(&self) -> u64 {
        self.submissions
    }

    /// The ledger repository backing this flow.
    pub fn ledger(&self) -> &LedgerRepository {
        &self.ledger
    }

    /// Pick a video from the media library (idle -> preview).
    ///
    /// A denied permission or a canceled pick leaves the flow in `Idle`
    /// and returns `Ok(false)`; neither is an error.
    pub async fn pick_video(&mut self, media: &dyn MediaCapability) -> Result<bool> {
        self.require_state(FlowState::Idle, "pick_video")?;

        if media.request_library_permission().await == Permission::Denied {
            debug!("Library permission denied, staying idle");
            return Ok(false);
        }
        self.attach(media.pick_video().await)
    }

    /// Record a new video with the camera (idle -> preview).
    pub async fn record_video(&mut self, media: &dyn MediaCapability) -> Result<bool> {
        self.require_state(FlowState::Idle, "record_video")?;

        if media.request_camera_permission().await == Permission::Denied {
            debug!("Camera permission denied, staying idle");
            return Ok(false);
        }
        self.attach(media.record_video().await)
    }

    fn attach(&mut self, pick: MediaPick) -> Result<bool> {
        match pick {
            MediaPick::Video(uri) => {
                debug!(video_uri = %uri, "Video attached, entering preview");
                self.video_uri = Some(uri);
                self.state = FlowState::Preview;
                Ok(true)
            }
            MediaPick::Canceled => {
                debug!("Video selection canceled, staying idle");
                Ok(false)
            }
        }
    }

    /// Confirm the previewed video (preview -> form).
    pub fn confirm_video(&mut self) -> Result<()> {
        self.require_state(FlowState::Preview, "confirm_video")?;
        self.state = FlowState::Form;
        Ok(())
    }

    /// Discard the previewed video (preview -> idle).
    pub fn remove_video(&mut self) -> Result<()> {
        self.require_state(FlowState::Preview, "remove_video")?;
        self.video_uri = None;
        self.state = FlowState::Idle;
        Ok(())
    }

    /// Select the contribution category.
    pub fn set_category(&mut self, category: ContributionType) -> Result<()> {
        self.require_state(FlowState::Form, "set_category")?;
        self.draft.category = Some(category);
        Ok(())
    }

    /// Set the activity title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.require_state(FlowState::Form, "set_title")?;
        self.draft.title = title.into();
        Ok(())
    }

    /// Set the activity description.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.require_state(FlowState::Form, "set_description")?;
        self.draft.description = description.into();
        Ok(())
    }

    /// Whether the current draft would pass submission validation.
    pub fn can_submit(&self) -> bool {
        self.state == FlowState::Form && self.draft.is_valid()
    }

    /// Submit the form (form -> scanning -> outcome).
    ///
    /// Runs the simulated scan, decides the outcome by the policy over the
    /// session submission counter, and on success appends the achievement
    /// to the ledger before entering `Success`. An invalid draft is
    /// rejected without a transition or a counter increment. A ledger
    /// write failure propagates; the flow then stays in `Scanning` and the
    /// caller can `reset`.
    pub async fn submit(&mut self) -> Result<Outcome> {
        self.require_state(FlowState::Form, "submit")?;

        if let Err(problem) = self.draft.validate() {
            debug!(problem = %problem, "Submit rejected, staying in form");
            return Err(FlowError::InvalidForm(problem));
        }

        let submission_index = self.submissions;
        self.submissions += 1;

        self.state = FlowState::Scanning;
        self.scan_progress = 0;
        info!(submission_index, "Scan started");

        self.clock.sleep(self.config.scan_duration()).await;
        self.scan_progress = 100;
        self.clock.sleep(self.config.settle_delay()).await;

        let outcome = self.policy.decide(submission_index);

        if outcome == Outcome::Success {
            // Category presence was checked by validate() above
            let category = self
                .draft
                .category
                .ok_or_else(|| FlowError::InvalidForm("no category selected".to_string()))?;

            let mut entry = Achievement::new(
                category,
                self.draft.trimmed_title(),
                self.draft.description.clone(),
                self.config.tokens_per_success,
                self.config.impact_score,
            );
            if let Some(uri) = &self.video_uri {
                entry = entry.with_video_uri(uri.clone());
            }

            if let Err(e) = self.ledger.append(entry).await {
                warn!(error = %e, "Ledger append failed after successful scan");
                return Err(e.into());
            }
        }

        self.state = outcome.terminal_state();
        info!(submission_index, outcome = ?outcome, "Scan finished");

        Ok(outcome)
    }

    /// Return to `Idle`, clearing the draft, the held video reference and
    /// the progress indicator. The session submission counter is untouched.
    pub fn reset(&mut self) {
        debug!(from = ?self.state, "Flow reset");
        self.draft.clear();
        self.video_uri = None;
        self.scan_progress = 0;
        self.state = FlowState::Idle;
    }

    fn require_state(&self, expected: FlowState, action: &'static str) -> Result<()> {
        if self.state != expected {
            return Err(FlowError::InvalidTransition {
                state: self.state,
                action,
            });
        }
        Ok(())
    }
}
