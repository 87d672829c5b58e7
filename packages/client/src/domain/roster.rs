//! Roster reconciliation.
//!
//! The stage shows the union of the snapshot captured at room entry and the
//! member list polled from the API. Both are keyed by [`MemberId`]; live
//! entries win on collision.

use std::collections::HashMap;

use super::{
    entity::{MediaFlags, Member, PolledMember},
    value_object::MemberId,
};

/// Resolve the local participant's identity.
///
/// Persisted identity first, then the snapshot member flagged as me.
/// `None` means bring-up must wait.
pub fn resolve_self_id(persisted: Option<MemberId>, snapshot: &[Member]) -> Option<MemberId> {
    persisted.or_else(|| snapshot.iter().find(|m| m.is_me).map(|m| m.id.clone()))
}

/// Convert polled records into stage members.
///
/// When the local participant is known but missing from the polled list, an
/// entry for them is appended: the snapshot entry if there is one, otherwise
/// a placeholder.
pub fn live_members(
    polled: &[PolledMember],
    self_id: Option<&MemberId>,
    snapshot: &[Member],
) -> Vec<Member> {
    let self_number = self_id.and_then(MemberId::user_number);

    let mut members: Vec<Member> = polled
        .iter()
        .map(|p| Member {
            id: MemberId::from_user_number(p.user_number),
            name: p.nickname.clone(),
            role: p.role,
            email: String::new(),
            avatar_url: p.avatar_url.clone(),
            is_me: self_number == Some(p.user_number),
            media: MediaFlags::default(),
        })
        .collect();

    if let Some(self_id) = self_id
        && !members.iter().any(|m| &m.id == self_id)
    {
        let me = snapshot
            .iter()
            .find(|m| &m.id == self_id)
            .cloned()
            .map(|m| Member { is_me: true, ..m })
            .unwrap_or_else(|| Member::placeholder_me(self_id.clone()));
        members.push(me);
    }

    members
}

/// Union of the snapshot and live lists, deduplicated by id.
///
/// Snapshot order first, then live-only members in live order. A live entry
/// replaces the snapshot entry with the same id in place.
pub fn merge_rosters(snapshot: &[Member], live: &[Member]) -> Vec<Member> {
    let mut merged: Vec<Member> = Vec::with_capacity(snapshot.len() + live.len());
    let mut index: HashMap<MemberId, usize> = HashMap::new();

    for member in snapshot.iter().chain(live.iter()) {
        match index.get(&member.id) {
            Some(&pos) => merged[pos] = member.clone(),
            None => {
                index.insert(member.id.clone(), merged.len());
                merged.push(member.clone());
            }
        }
    }

    merged
}

/// Identity used for offer bring-up.
///
/// Snapshot me, then live me, then the resolved identity.
pub fn effective_self_id(
    snapshot: &[Member],
    live: &[Member],
    resolved: Option<&MemberId>,
) -> Option<MemberId> {
    snapshot
        .iter()
        .find(|m| m.is_me)
        .or_else(|| live.iter().find(|m| m.is_me))
        .map(|m| m.id.clone())
        .or_else(|| resolved.cloned())
}
