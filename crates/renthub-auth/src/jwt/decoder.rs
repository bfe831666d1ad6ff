//! Bearer token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use renthub_core::config::auth::AuthConfig;
use renthub_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens and extracts the subject user id.
///
/// Every failure mode — malformed token, bad signature, expiry, missing
/// or non-numeric subject — surfaces as an authentication error, never a
/// partial payload.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning the subject user id.
    pub fn decode(&self, token: &str) -> Result<i64, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    // Covers a missing subject claim, among other payload defects
                    jsonwebtoken::errors::ErrorKind::Json(_) => {
                        AppError::authentication("Invalid token payload")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::authentication("Invalid subject claim in token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use renthub_core::error::ErrorKind;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_issue_then_decode() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let (token, _exp) = encoder.issue(42).unwrap();
        assert_eq!(decoder.decode(&token).unwrap(), 42);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        let err = decoder.decode("not.a.token").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..test_config()
        };
        let (token, _) = JwtEncoder::new(&other).issue(42).unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "42".to_string(),
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn test_non_numeric_subject_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-number".to_string(),
            iat: now,
            exp: now + 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_missing_subject_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        #[derive(serde::Serialize)]
        struct NoSubject {
            iat: i64,
            exp: i64,
        }

        let now = chrono::Utc::now().timestamp();
        let token = encode(
            &Header::default(),
            &NoSubject { iat: now, exp: now + 300 },
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
