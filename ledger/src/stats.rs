//! Aggregation over the in-memory ledger.

use crate::types::Achievement;

/// Summary statistics computed from the full ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStats {
    /// Number of verified contributions
    pub count: usize,
    /// Sum of token rewards
    pub total_tokens: u64,
    /// Mean impact score over the raw 0-10 scale; 0.0 for an empty ledger
    pub average_impact_score: f32,
}

impl LedgerStats {
    /// Average impact rounded onto the 0-100 display scale used alongside
    /// percentage-style scores.
    pub fn impact_percent(&self) -> u32 {
        (self.average_impact_score * 10.0).round() as u32
    }
}

/// Compute summary statistics over the ledger.
///
/// Pure function over the loaded sequence; an empty ledger yields all
/// zeros rather than a division by zero.
pub fn aggregate(entries: &[Achievement]) -> LedgerStats {
    if entries.is_empty() {
        return LedgerStats {
            count: 0,
            total_tokens: 0,
            average_impact_score: 0.0,
        };
    }

    let total_tokens = entries.iter().map(|e| e.tokens_earned as u64).sum();
    let impact_sum: f32 = entries.iter().map(|e| e.impact_score).sum();

    LedgerStats {
        count: entries.len(),
        total_tokens,
        average_impact_score: impact_sum / entries.len() as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContributionType;

    fn achievement(tokens: u32, impact: f32) -> Achievement {
        Achievement::new(ContributionType::Quiz, "entry", "", tokens, impact)
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_tokens, 0);
        assert_eq!(stats.average_impact_score, 0.0);
        assert_eq!(stats.impact_percent(), 0);
    }

    #[test]
    fn test_aggregate_totals() {
        let entries = vec![
            achievement(75, 8.5),
            achievement(75, 8.5),
            achievement(50, 7.0),
        ];

        let stats = aggregate(&entries);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_tokens, 200);
        assert!((stats.average_impact_score - 8.0).abs() < 1e-6);
        assert_eq!(stats.impact_percent(), 80);
    }

    #[test]
    fn test_impact_percent_rounds() {
        let stats = aggregate(&[achievement(75, 8.46)]);
        assert_eq!(stats.impact_percent(), 85);
    }
}
