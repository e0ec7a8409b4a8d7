//! Profile summary derived from the achievement ledger.
//!
//! The profile view loads the ledger once on mount and treats its copy as a
//! snapshot; there is no change notification between views. The identity
//! code is simulated client-side by string concatenation, the same as the
//! mobile client (no real chain lookup).

use crate::stats::{aggregate, LedgerStats};
use crate::types::Achievement;

/// DID method prefix for ByteEdu identities.
const DID_PREFIX: &str = "did:byteedu";

/// Build the simulated decentralized-identity code for a wallet address.
pub fn did_code(wallet_address: &str) -> String {
    format!("{}:{}", DID_PREFIX, wallet_address)
}

/// Summary shown on the profile view.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    /// Simulated DID code
    pub did: String,
    /// Number of verified contributions
    pub contributions_count: usize,
    /// Aggregate ledger statistics
    pub stats: LedgerStats,
}

impl ProfileSummary {
    /// Compute the summary from a loaded ledger snapshot.
    pub fn from_ledger(entries: &[Achievement], wallet_address: &str) -> Self {
        let stats = aggregate(entries);
        Self {
            did: did_code(wallet_address),
            contributions_count: stats.count,
            stats,
        }
    }
}
