//! Achievement Ledger for ByteEdu
//!
//! The append-only, locally persisted record of verified contributions:
//!
//! - [`Achievement`]: one verified contribution (category, title, reward)
//! - [`KeyValueStore`]: persistence seam with in-memory and file-backed impls
//! - [`LedgerRepository`]: load/append over the stored sequence, newest first
//! - [`aggregate`]: summary statistics for the profile and history views
//!
//! Loads fail soft (absent or corrupt data is an empty ledger); appends
//! propagate write failures so callers never silently lose an entry.

pub mod profile;
pub mod repository;
pub mod stats;
pub mod store;
pub mod types;

// Re-export main types
pub use profile::{did_code, ProfileSummary};
pub use repository::{LedgerRepository, DEFAULT_STORAGE_KEY};
pub use stats::{aggregate, LedgerStats};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{Achievement, ContributionType, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
