//! End-to-end contribution flow integration tests

use std::sync::Arc;

use contribute::{
    ContributionFlow, FlowState, InstantClock, MediaPick, MockMedia, Outcome, Permission,
};
use ledger::{aggregate, ContributionType, LedgerRepository, MemoryStore};

fn test_flow(store: Arc<MemoryStore>) -> ContributionFlow {
    ContributionFlow::new(store).with_clock(Box::new(InstantClock))
}

async fn run_submission(
    flow: &mut ContributionFlow,
    media: &MockMedia,
    title: &str,
) -> Outcome {
    media
        .queue_pick(MediaPick::Video(format!("file:///{}.mp4", title)))
        .await;
    assert!(flow.pick_video(media).await.unwrap());
    flow.confirm_video().unwrap();
    flow.set_category(ContributionType::Workshop).unwrap();
    flow.set_title(title).unwrap();
    let outcome = flow.submit().await.unwrap();
    flow.reset();
    outcome
}

/// Outcomes follow the cyclic success/duplicate/failed rotation across a
/// whole session, and only successes reach the ledger.
#[tokio::test]
async fn test_outcome_rotation_over_session() {
    let store = Arc::new(MemoryStore::new());
    let mut flow = test_flow(store.clone());
    let media = MockMedia::new();

    let mut outcomes = Vec::new();
    for i in 0..7 {
        outcomes.push(run_submission(&mut flow, &media, &format!("activity-{}", i)).await);
    }

    assert_eq!(
        outcomes,
        vec![
            Outcome::Success,
            Outcome::Duplicate,
            Outcome::Failed,
            Outcome::Success,
            Outcome::Duplicate,
            Outcome::Failed,
            Outcome::Success,
        ]
    );

    // 3 of 7 submissions succeeded
    let entries = flow.ledger().load().await;
    assert_eq!(entries.len(), 3);
    assert_eq!(flow.submission_count(), 7);

    // Newest first: the last success is at the head
    assert_eq!(entries[0].title, "activity-6");
    assert_eq!(entries[2].title, "activity-0");
}

/// The ledger written by one flow is visible to an independent reader
/// using the same store, the way the profile view reloads on mount.
#[tokio::test]
async fn test_profile_reader_sees_appends() {
    let store = Arc::new(MemoryStore::new());
    let mut flow = test_flow(store.clone());
    let media = MockMedia::new();

    run_submission(&mut flow, &media, "verified").await;

    let reader = LedgerRepository::new(store);
    let snapshot = reader.load().await;
    assert_eq!(snapshot.len(), 1);

    let stats = aggregate(&snapshot);
    assert_eq!(stats.count, 1);
    assert_eq!(stats.total_tokens, 75);
    assert_eq!(stats.impact_percent(), 85);
}

/// A session that starts against corrupt stored data proceeds from an
/// empty ledger instead of failing.
#[tokio::test]
async fn test_session_survives_corrupt_store() {
    let store = Arc::new(MemoryStore::new());
    store.seed("@achievements", "]]]not json").await;

    let mut flow = test_flow(store);
    let media = MockMedia::new();

    assert!(flow.ledger().load().await.is_empty());

    run_submission(&mut flow, &media, "fresh-start").await;
    let entries = flow.ledger().load().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "fresh-start");
}

/// Denied permissions and canceled picks both leave the flow idle, and a
/// later grant lets the same session continue.
#[tokio::test]
async fn test_permission_then_retry() {
    let store = Arc::new(MemoryStore::new());
    let mut flow = test_flow(store);

    let denied = MockMedia::new().camera_permission(Permission::Denied);
    assert!(!flow.record_video(&denied).await.unwrap());
    assert_eq!(flow.state(), FlowState::Idle);

    let granted = MockMedia::with_video("file:///retry.mp4");
    assert!(flow.record_video(&granted).await.unwrap());
    assert_eq!(flow.state(), FlowState::Preview);
}
