//! Media capability collaborator.
//!
//! Abstraction over the device media library and camera. The flow treats a
//! denied permission and a canceled pick identically: no transition. The
//! real device integration lives outside this crate; tests use
//! [`MockMedia`].

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::Mutex;

/// Result of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// The capability may be used
    Granted,
    /// The capability may not be used
    Denied,
}

/// Result of a video pick or recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaPick {
    /// A video reference was obtained
    Video(String),
    /// The user backed out
    Canceled,
}

/// Trait for the device media collaborator.
#[async_trait]
pub trait MediaCapability: Send + Sync {
    /// Request permission to read the media library.
    async fn request_library_permission(&self) -> Permission;

    /// Open the library picker for a video.
    async fn pick_video(&self) -> MediaPick;

    /// Request permission to use the camera.
    async fn request_camera_permission(&self) -> Permission;

    /// Record a new video.
    async fn record_video(&self) -> MediaPick;
}

/// Mock media collaborator for tests.
///
/// Configurable permissions and a queue of pick results, with call counts.
pub struct MockMedia {
    library_permission: Permission,
    camera_permission: Permission,
    picks: Mutex<Vec<MediaPick>>,
    permission_requests: AtomicU32,
    pick_requests: AtomicU32,
}

impl MockMedia {
    /// Create a mock that grants everything and always cancels.
    pub fn new() -> Self {
        Self {
            library_permission: Permission::Granted,
            camera_permission: Permission::Granted,
            picks: Mutex::new(Vec::new()),
            permission_requests: AtomicU32::new(0),
            pick_requests: AtomicU32::new(0),
        }
    }

    /// Create a mock that yields the given video reference once.
    pub fn with_video(uri: impl Into<String>) -> Self {
        Self {
            picks: Mutex::new(vec![MediaPick::Video(uri.into())]),
            ..Self::new()
        }
    }

    /// Set the library permission response.
    pub fn library_permission(mut self, permission: Permission) -> Self {
        self.library_permission = permission;
        self
    }

    /// Set the camera permission response.
    pub fn camera_permission(mut self, permission: Permission) -> Self {
        self.camera_permission = permission;
        self
    }

    /// Queue a pick result (consumed in order; empty queue yields Canceled).
    pub async fn queue_pick(&self, pick: MediaPick) {
        self.picks.lock().await.push(pick);
    }

    /// Number of permission requests made.
    pub fn permission_requests(&self) -> u32 {
        self.permission_requests.load(Ordering::SeqCst)
    }

    /// Number of pick/record requests made.
    pub fn pick_requests(&self) -> u32 {
        self.pick_requests.load(Ordering::SeqCst)
    }

    async fn next_pick(&self) -> MediaPick {
        self.pick_requests.fetch_add(1, Ordering::SeqCst);
        let mut picks = self.picks.lock().await;
        if picks.is_empty() {
            MediaPick::Canceled
        } else {
            picks.remove(0)
        }
    }
}

impl Default for MockMedia {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaCapability for MockMedia {
    async fn request_library_permission(&self) -> Permission {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.library_permission
    }

    async fn pick_video(&self) -> MediaPick {
        self.next_pick().await
    }

    async fn request_camera_permission(&self) -> Permission {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.camera_permission
    }

    async fn record_video(&self) -> MediaPick {
        self.next_pick().await
    }
}
