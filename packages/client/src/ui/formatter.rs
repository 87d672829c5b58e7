//! Room stage formatting utilities for terminal display.

use studyroom_shared::time::timestamp_to_room_rfc3339;

use crate::{
    domain::{MediaStreamHandle, Member, Role, StreamsByUser, TrackKind},
    session::{FailedOffer, RoomStage},
};

const RULE: &str = "============================================================\n";

/// Formatter for the room stage
pub struct StageFormatter;

impl StageFormatter {
    /// Format the whole stage: room header, members and their streams
    ///
    /// # Arguments
    ///
    /// * `stage` - The room stage to render
    ///
    /// # Returns
    ///
    /// A formatted multi-line string
    pub fn format_stage(stage: &RoomStage) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(RULE);
        output.push_str(&format!("Room: {} ({})\n", stage.info.title, stage.info.id));
        output.push_str(&format!(
            "Entered at {}\n",
            timestamp_to_room_rfc3339(stage.joined_at)
        ));
        output.push_str("Members:\n");

        if stage.members.is_empty() {
            output.push_str("(No members)\n");
        } else {
            for member in &stage.members {
                output.push_str(&Self::format_member(member, &stage.streams));
            }
        }

        output.push_str(RULE);
        output
    }

    /// Format one member line
    pub fn format_member(member: &Member, streams: &StreamsByUser) -> String {
        let me_suffix = if member.is_me { " (me)" } else { "" };
        let owner_suffix = if member.role == Role::Owner {
            " [owner]"
        } else {
            ""
        };
        let stream = match streams.get(&member.id) {
            Some(Some(handle)) => Self::format_stream(handle),
            Some(None) => "waiting".to_string(),
            None => "-".to_string(),
        };
        format!(
            "{} {}{}{} - stream: {}\n",
            member.id, member.name, me_suffix, owner_suffix, stream
        )
    }

    /// Format a stream handle as `id (audio+video)`
    pub fn format_stream(handle: &MediaStreamHandle) -> String {
        let tracks: Vec<&str> = handle
            .tracks
            .iter()
            .map(|kind| match kind {
                TrackKind::Audio => "audio",
                TrackKind::Video => "video",
            })
            .collect();
        if tracks.is_empty() {
            handle.id.clone()
        } else {
            format!("{} ({})", handle.id, tracks.join("+"))
        }
    }

    /// Format the list of offers that failed after retry
    pub fn format_failed_offers(failed: &[FailedOffer]) -> String {
        failed
            .iter()
            .map(|offer| {
                format!(
                    "! offer to {} failed after {} attempt(s) at {}: {}\n",
                    offer.peer,
                    offer.attempts,
                    timestamp_to_room_rfc3339(offer.failed_at),
                    offer.error
                )
            })
            .collect()
    }
}
