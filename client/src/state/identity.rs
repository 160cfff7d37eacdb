//! User identity derived from the session token.
//!
//! The token's payload segment is decoded without verifying the signature
//! and the `unique_name` claim is read as the numeric user id. The API uses
//! it to stamp `createdUserId` / `modifiedUserId`; it must not be treated as
//! proof of identity.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use base64ct::{Base64Unpadded, Base64UrlUnpadded, Encoding};

/// Claim carrying the numeric user id.
pub const USER_ID_CLAIM: &str = "unique_name";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not valid base64")]
    InvalidEncoding,
    #[error("token payload is not a JSON object: {0}")]
    InvalidPayload(String),
    #[error("token payload has no `{USER_ID_CLAIM}` claim")]
    MissingClaim,
    #[error("`{USER_ID_CLAIM}` claim is not a numeric id: {0}")]
    InvalidClaim(String),
}

/// User id for the current session, or `None` when no token is stored.
///
/// # Errors
///
/// Returns an error when a token is present but cannot be decoded.
pub fn current_user_id(token: Option<&str>) -> Result<Option<i64>, IdentityError> {
    token.map(user_id_from_token).transpose()
}

/// Decode the user id from a `header.payload.signature` token.
///
/// # Errors
///
/// Returns an error for a missing segment, bad base64, non-object JSON, or
/// a missing or non-numeric claim.
pub fn user_id_from_token(token: &str) -> Result<i64, IdentityError> {
    let payload = token
        .trim()
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(IdentityError::MissingPayload)?;
    let bytes = decode_segment(payload)?;
    let claims: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&bytes).map_err(|e| IdentityError::InvalidPayload(e.to_string()))?;
    let claim = claims.get(USER_ID_CLAIM).ok_or(IdentityError::MissingClaim)?;
    parse_user_id(claim)
}

/// Accept both the URL-safe and the standard alphabet, padded or not.
fn decode_segment(segment: &str) -> Result<Vec<u8>, IdentityError> {
    let unpadded = segment.trim_end_matches('=');
    Base64UrlUnpadded::decode_vec(unpadded)
        .or_else(|_| Base64Unpadded::decode_vec(unpadded))
        .map_err(|_| IdentityError::InvalidEncoding)
}

fn parse_user_id(claim: &serde_json::Value) -> Result<i64, IdentityError> {
    match claim {
        serde_json::Value::Number(n) => n.as_i64().ok_or_else(|| IdentityError::InvalidClaim(n.to_string())),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| IdentityError::InvalidClaim(s.clone())),
        other => Err(IdentityError::InvalidClaim(other.to_string())),
    }
}
