//! Offer planning per roster epoch.
//!
//! A peer moves `not-started → offer-scheduled` when the planner hands it out;
//! the `offer-sent` step belongs to the send-offer use case. The planner only
//! does work when the candidate set changes, so repeated recomputation with
//! the same roster is a no-op.

use std::collections::HashSet;

use super::{entity::Member, initiator::should_initiate, value_object::MemberId};

/// Per-session offer bookkeeping.
#[derive(Debug, Default)]
pub struct OfferPlanner {
    /// Peers that already had an offer scheduled in the current epoch
    started: HashSet<MemberId>,
    /// Sorted, comma-joined candidate ids seen last time
    last_candidate_key: String,
}

impl OfferPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the peers to offer to now.
    ///
    /// Returns an empty list when the candidate set is unchanged since the last
    /// call. Otherwise prunes departed peers from the started set and returns
    /// every new candidate for which `me` is the initiator, marking them as
    /// started.
    pub fn plan(&mut self, members: &[Member], me: &MemberId) -> Vec<MemberId> {
        let candidates = candidate_peers(members, me);
        let key = candidate_key(&candidates);
        if key == self.last_candidate_key {
            return Vec::new();
        }
        tracing::debug!("candidate peers changed: [{}] -> [{}]", self.last_candidate_key, key);
        self.last_candidate_key = key;

        let current: HashSet<&MemberId> = candidates.iter().collect();
        self.started.retain(|peer| current.contains(peer));

        let mut scheduled = Vec::new();
        for peer in candidates {
            if self.started.contains(&peer) || !should_initiate(me, &peer) {
                continue;
            }
            self.started.insert(peer.clone());
            scheduled.push(peer);
        }
        scheduled
    }

    /// Whether an offer was already scheduled for `peer` in this epoch
    pub fn is_started(&self, peer: &MemberId) -> bool {
        self.started.contains(peer)
    }

    /// Number of peers with a scheduled offer
    pub fn started_count(&self) -> usize {
        self.started.len()
    }
}

/// All members other than the local participant, sorted by id.
pub fn candidate_peers(members: &[Member], me: &MemberId) -> Vec<MemberId> {
    let mut candidates: Vec<MemberId> = members
        .iter()
        .filter(|m| !m.is_me && &m.id != me)
        .map(|m| m.id.clone())
        .collect();
    candidates.sort();
    candidates.dedup();
    candidates
}

fn candidate_key(candidates: &[MemberId]) -> String {
    candidates
        .iter()
        .map(MemberId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
