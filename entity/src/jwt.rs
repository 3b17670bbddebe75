use serde::{Deserialize, Serialize};

/// The token type reported alongside every issued token.
pub const BEARER: &str = "Bearer";

/// Represents an issued JSON Web Token (JWT).
/// Note: This struct does not have a corresponding entity in the database.
///
/// - `token`: the signed, compact-serialized JWT.
/// - `exp`: the absolute expiry as seconds since the Unix epoch, duplicated here so
///   callers don't have to decode the token to read it.
/// - `token_type`: always `"Bearer"`, serialized as `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwt {
    pub token: String,
    pub exp: i64,
    #[serde(rename = "type")]
    pub token_type: String,
}

impl Jwt {
    pub fn bearer(token: String, exp: i64) -> Self {
        Self {
            token,
            exp,
            token_type: BEARER.to_owned(),
        }
    }
}
