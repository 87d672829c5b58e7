//! Persisted identity parsing.
//!
//! The local participant's user record is persisted as JSON by the web
//! client. Older records used different key spellings for the identifier, so
//! several are accepted.

use serde_json::Value;

use super::{port::IdentityStore, value_object::MemberId};

/// Keys checked for the user identifier, in order
const USER_ID_KEYS: &[&str] = &["userId", "userid", "UserId", "id", "user_id", "ID"];

/// Extract the member identity from a persisted user record.
///
/// Accepts a non-negative integer (an integral float such as `12.0` included)
/// or a string holding one. Anything else, including malformed JSON, is
/// treated as "no identity".
pub fn parse_persisted_user(raw: &str) -> Option<MemberId> {
    let user: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("persisted user is not valid JSON: {}", e);
            return None;
        }
    };

    let id = USER_ID_KEYS
        .iter()
        .find_map(|key| user.get(*key).filter(|v| !v.is_null()))?;

    let user_number = match id {
        Value::Number(n) => n.as_u64().or_else(|| integral_float(n.as_f64()?)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;

    Some(MemberId::from_user_number(user_number))
}

fn integral_float(value: f64) -> Option<u64> {
    (value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64).then_some(value as u64)
}

/// Load the local participant's identity from `store`.
///
/// Read failures are treated like a missing record.
pub fn load_persisted_identity(store: &dyn IdentityStore) -> Option<MemberId> {
    match store.load() {
        Ok(Some(raw)) => parse_persisted_user(&raw),
        Ok(None) => None,
        Err(e) => {
            tracing::debug!("ignoring persisted identity: {}", e);
            None
        }
    }
}
