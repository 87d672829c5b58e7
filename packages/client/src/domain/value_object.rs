//! Value objects of the media-room domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::MemberIdError;

/// Prefix of canonical member identifiers (`u-<n>`).
pub const MEMBER_ID_PREFIX: &str = "u-";

/// Room member identifier.
///
/// The canonical form is `u-<n>` where `<n>` is the numeric user id issued by
/// the API. Identifiers outside that form are accepted (snapshots may carry
/// them) but rank last in the initiator ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberId(String);

impl MemberId {
    /// Create a new MemberId
    ///
    /// # Errors
    ///
    /// Returns [`MemberIdError::Empty`] when the identifier is blank.
    pub fn new(id: String) -> Result<Self, MemberIdError> {
        if id.trim().is_empty() {
            return Err(MemberIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Build the canonical `u-<n>` identifier for a numeric user id
    pub fn from_user_number(user_number: u64) -> Self {
        Self(format!("{}{}", MEMBER_ID_PREFIX, user_number))
    }

    /// Normalize a raw identifier into the `u-` form.
    ///
    /// Identifiers that already carry the prefix are kept as-is.
    pub fn normalized(raw: &str) -> Result<Self, MemberIdError> {
        if raw.starts_with(MEMBER_ID_PREFIX) {
            Self::new(raw.to_string())
        } else {
            Self::new(format!("{}{}", MEMBER_ID_PREFIX, raw))
        }
    }

    /// Numeric suffix of the identifier, if it has one.
    ///
    /// The suffix is the segment after the first `-`, or the whole identifier
    /// when there is no `-`.
    pub fn user_number(&self) -> Option<u64> {
        let suffix = match self.0.split('-').nth(1) {
            Some(segment) => segment,
            None => self.0.as_str(),
        };
        suffix.trim().parse::<u64>().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MemberId {
    type Error = MemberIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MemberId> for String {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
