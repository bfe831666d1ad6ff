//! Password policy enforcement.

use renthub_core::config::auth::AuthConfig;
use renthub_core::error::AppError;
use tracing::warn;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum accepted length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Checks a candidate password against the policy.
    ///
    /// Length violations are hard errors. Weak-but-long-enough passwords
    /// are accepted with a warning record (never the password itself).
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Two {
            warn!(score = ?estimate.score(), "Weak password accepted at registration");
        }

        Ok(())
    }
}
