//! Confidence-weighted vote over role signals.

use hexarch_core::constants::{
    AGREEMENT_BOOST, MAX_FUSED_CONFIDENCE, MIN_SIGNAL_CONFIDENCE, ROLE_COMMIT_THRESHOLD,
};
use hexarch_core::ArchRole;

use super::types::{RoleAssignment, RoleSignal};

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    votes: u32,
    best: f64,
}

/// Fuse signals into one role.
///
/// 1. Drop signals below the minimum confidence or without a role.
/// 2. The role with the most votes wins; ties go to the higher single
///    confidence, then to [`ArchRole`] declaration order.
/// 3. Confidence is the winner's best signal, boosted when two or more
///    signals agree, capped.
/// 4. Below the commit threshold the role becomes `Unclassified`, keeping
///    the confidence.
pub fn fuse_signals(signals: &[RoleSignal]) -> RoleAssignment {
    let mut tallies = [Tally::default(); ArchRole::ALL.len()];
    for signal in signals {
        if signal.confidence < MIN_SIGNAL_CONFIDENCE || !signal.role.is_classified() {
            continue;
        }
        let tally = &mut tallies[signal.role as usize];
        tally.votes += 1;
        tally.best = tally.best.max(signal.confidence);
    }

    let mut winner: Option<(ArchRole, Tally)> = None;
    for (role, tally) in ArchRole::ALL.iter().copied().zip(tallies) {
        if tally.votes == 0 {
            continue;
        }
        let better = match winner {
            None => true,
            Some((_, current)) => {
                tally.votes > current.votes
                    || (tally.votes == current.votes && tally.best > current.best)
            }
        };
        if better {
            winner = Some((role, tally));
        }
    }

    let Some((role, tally)) = winner else {
        return RoleAssignment::unclassified();
    };

    let confidence = if tally.votes >= 2 {
        (tally.best + AGREEMENT_BOOST).min(MAX_FUSED_CONFIDENCE)
    } else {
        tally.best
    };

    if confidence < ROLE_COMMIT_THRESHOLD {
        RoleAssignment::new(ArchRole::Unclassified, confidence)
    } else {
        RoleAssignment::new(role, confidence)
    }
}
