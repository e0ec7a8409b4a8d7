//! Outcome decision policy for the simulated verifier.
//!
//! There is no real verification backend; the outcome is a deterministic
//! rotation over the per-session submission counter. The policy is a trait
//! so a real verifier can replace the rotation later without touching the
//! state machine.

use crate::types::Outcome;

/// Rotation stand-in for a real verifier's decision.
///
/// `outcome(i)` cycles `Success, Duplicate, Failed` from i = 0, so the
/// first submission in a session always succeeds.
pub fn decide(submission_index: u64) -> Outcome {
    match submission_index % 3 {
        0 => Outcome::Success,
        1 => Outcome::Duplicate,
        _ => Outcome::Failed,
    }
}

/// Pluggable decision function over the submission index.
pub trait OutcomePolicy: Send + Sync {
    /// Decide the outcome for the given submission index.
    fn decide(&self, submission_index: u64) -> Outcome;
}

/// The default rotating policy.
pub struct RotationPolicy;

impl OutcomePolicy for RotationPolicy {
    fn decide(&self, submission_index: u64) -> Outcome {
        decide(submission_index)
    }
}

/// Policy returning a fixed outcome, for tests.
pub struct FixedPolicy(pub Outcome);

impl OutcomePolicy for FixedPolicy {
    fn decide(&self, _submission_index: u64) -> Outcome {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation() {
        let expected = [
            Outcome::Success,
            Outcome::Duplicate,
            Outcome::Failed,
            Outcome::Success,
            Outcome::Duplicate,
            Outcome::Failed,
            Outcome::Success,
        ];
        for (i, outcome) in expected.iter().enumerate() {
            assert_eq!(decide(i as u64), *outcome, "submission {}", i);
        }
    }

    #[test]
    fn test_fixed_policy() {
        let policy = FixedPolicy(Outcome::Duplicate);
        assert_eq!(policy.decide(0), Outcome::Duplicate);
        assert_eq!(policy.decide(99), Outcome::Duplicate);
    }
}
