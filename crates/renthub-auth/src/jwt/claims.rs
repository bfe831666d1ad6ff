//! JWT claims structure used in access tokens.

use serde::{Deserialize, Serialize};

/// JWT claims payload embedded in every access token.
///
/// The subject is the numeric user id serialized as a string, per the
/// usual JWT convention. The decoder rejects tokens whose subject is not
/// a valid integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID, as a decimal string.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
