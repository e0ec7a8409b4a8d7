//! Contribution form draft and validation.

use ledger::{ContributionType, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

/// The user's in-progress category/title/description selection.
#[derive(Debug, Clone, Default)]
pub struct ContributionDraft {
    /// Selected category, if any
    pub category: Option<ContributionType>,
    /// Activity title
    pub title: String,
    /// Optional longer description
    pub description: String,
}

impl ContributionDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the draft can be submitted: a category is selected and the
    /// title is non-empty after trimming, within length limits.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate the draft, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.category.is_none() {
            return Err("no category selected".to_string());
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err("title is empty".to_string());
        }
        if title.len() > MAX_TITLE_LEN {
            return Err(format!("title exceeds {} characters", MAX_TITLE_LEN));
        }
        if self.description.len() > MAX_DESCRIPTION_LEN {
            return Err(format!(
                "description exceeds {} characters",
                MAX_DESCRIPTION_LEN
            ));
        }
        Ok(())
    }

    /// Title with surrounding whitespace removed.
    pub fn trimmed_title(&self) -> &str {
        self.title.trim()
    }

    /// Reset all fields to their initial empty values.
    pub fn clear(&mut self) {
        self.category = None;
        self.title.clear();
        self.description.clear();
    }
}
