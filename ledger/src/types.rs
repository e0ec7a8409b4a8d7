//! Core types for the achievement ledger.
//!
//! These types mirror the JSON the mobile client persists under the
//! `@achievements` storage key, so an existing store deserializes as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of an achievement title.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum length of an achievement description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Category of a verified contribution.
///
/// Closed tag set; used for routing to a display label and stored on each
/// ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionType {
    /// Completed quiz
    Quiz,
    /// Club activity
    Club,
    /// Project work
    Project,
    /// Volunteer work
    Volunteer,
    /// Research activity
    Research,
    /// Workshop attendance
    Workshop,
}

impl ContributionType {
    /// Get the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Club => "club",
            Self::Project => "project",
            Self::Volunteer => "volunteer",
            Self::Research => "research",
            Self::Workshop => "workshop",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quiz => "Quiz",
            Self::Club => "Club Activity",
            Self::Project => "Project",
            Self::Volunteer => "Volunteer",
            Self::Research => "Research",
            Self::Workshop => "Workshop",
        }
    }

    /// All categories in display order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Quiz,
            Self::Club,
            Self::Project,
            Self::Volunteer,
            Self::Research,
            Self::Workshop,
        ]
    }
}

/// One verified contribution in the ledger.
///
/// Immutable once appended; the ledger defines no update or delete.
/// Field names match the mobile client's stored JSON (`tokensEarned`,
/// `impactScore`, `videoUri`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Unique identifier, generated at creation time
    pub id: String,
    /// Category of the contribution
    pub category: ContributionType,
    /// User-supplied title (non-empty, <= 100 chars)
    pub title: String,
    /// User-supplied description (may be empty, <= 500 chars)
    pub description: String,
    /// Token reward for the verified contribution
    pub tokens_earned: u32,
    /// Impact score in [0, 10]
    pub impact_score: f32,
    /// When the entry was appended to the ledger
    pub date: DateTime<Utc>,
    /// Opaque reference to the source video, never dereferenced here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_uri: Option<String>,
}

impl Achievement {
    /// Create a new achievement with a fresh id and the current timestamp.
    pub fn new(
        category: ContributionType,
        title: impl Into<String>,
        description: impl Into<String>,
        tokens_earned: u32,
        impact_score: f32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            title: title.into(),
            description: description.into(),
            tokens_earned,
            impact_score,
            date: Utc::now(),
            video_uri: None,
        }
    }

    /// Attach the source video reference.
    pub fn with_video_uri(mut self, uri: impl Into<String>) -> Self {
        self.video_uri = Some(uri.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in ContributionType::all() {
            let json = serde_json::to_string(&category).unwrap();
            let parsed: ContributionType = serde_json::from_str(&json).unwrap();
            assert_eq!(category, parsed);
        }
    }

    #[test]
    fn test_category_stored_strings() {
        assert_eq!(
            serde_json::to_string(&ContributionType::Club).unwrap(),
            "\"club\""
        );
        assert_eq!(ContributionType::Club.label(), "Club Activity");
    }

    #[test]
    fn test_achievement_json_shape() {
        let achievement = Achievement::new(
            ContributionType::Workshop,
            "Rust workshop",
            "Intro session",
            75,
            8.5,
        )
        .with_video_uri("file:///video.mp4");

        let json = serde_json::to_value(&achievement).unwrap();
        assert_eq!(json["category"], "workshop");
        assert_eq!(json["tokensEarned"], 75);
        assert_eq!(json["videoUri"], "file:///video.mp4");
        assert!(json["impactScore"].is_number());
    }

    #[test]
    fn test_achievement_ids_unique() {
        let a = Achievement::new(ContributionType::Quiz, "a", "", 75, 8.5);
        let b = Achievement::new(ContributionType::Quiz, "a", "", 75, 8.5);
        assert_ne!(a.id, b.id);
    }
}
