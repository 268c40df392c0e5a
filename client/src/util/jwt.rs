//! Access-token payload decoding.
//!
//! The client never verifies signatures: tokens come from our own backend and
//! are only read for display decisions. Anything that fails to decode is
//! treated as an anonymous session.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Role claim carried by ordinary accounts; it grants no extra actions.
pub const BASIC_ROLE: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("token has no payload segment")]
    Malformed,
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims the client cares about. Every other claim is ignored, whatever
/// its type.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// Kept untyped so an odd `groups` shape only costs the role.
    #[serde(default)]
    pub groups: Option<serde_json::Value>,
}

impl TokenClaims {
    /// First group the user belongs to, used as the display role.
    ///
    /// `None` unless `groups` is a list whose first entry is a string.
    pub fn primary_group(&self) -> Option<&str> {
        self.groups.as_ref()?.as_array()?.first()?.as_str()
    }
}

/// Decode the payload (second segment) of a JWT.
///
/// Accepts both the URL-safe and standard alphabets, with or without padding.
///
/// # Errors
///
/// Returns [`JwtError`] when the payload segment is missing, is not base64,
/// or does not hold a JSON object matching [`TokenClaims`].
pub fn decode_claims(token: &str) -> Result<TokenClaims, JwtError> {
    let payload = token.split('.').nth(1).ok_or(JwtError::Malformed)?;
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Resolve the display role for an optional access token.
///
/// Decode failures are logged and mapped to `None` so a corrupt token behaves
/// like no token at all.
pub fn resolve_role(token: Option<&str>) -> Option<String> {
    let token = token?;
    match decode_claims(token) {
        Ok(claims) => claims.primary_group().map(str::to_owned),
        Err(e) => {
            log::debug!("ignoring undecodable access token: {e}");
            None
        }
    }
}
