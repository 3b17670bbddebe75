//! Claims carried by, and requested for, issued tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The signed payload of an issued token: a snapshot of the principal's data and
/// the absolute expiry in seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims<T> {
    pub object: T,
    pub exp: i64,
}

/// Claims a caller may supply when requesting a token.
///
/// Only `exp`, the token lifetime in minutes, is honored. Any other key is
/// accepted so that callers can pass arbitrary maps, but it is not copied into
/// the signed payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomClaims {
    pub fn with_exp(minutes: i64) -> Self {
        Self {
            exp: Some(minutes),
            ..Default::default()
        }
    }

    pub(crate) fn ignored_keys(&self) -> Vec<&str> {
        self.extra.keys().map(String::as_str).collect()
    }
}
