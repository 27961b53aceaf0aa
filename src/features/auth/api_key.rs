use sha2::{Digest, Sha256};

use crate::core::config::AdminConfig;
use crate::core::error::AppError;

/// Checks the admin API key presented on protected read endpoints.
///
/// When enforcement is off every request passes. When it is on and no key is
/// configured, every request is rejected.
pub struct ApiKeyValidator {
    expected_digest: Option<[u8; 32]>,
    enforced: bool,
}

impl ApiKeyValidator {
    pub fn new(api_key: Option<&str>, enforced: bool) -> Self {
        Self {
            expected_digest: api_key.map(digest),
            enforced,
        }
    }

    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.api_key.as_deref(), config.enforced)
    }

    pub fn is_enforced(&self) -> bool {
        self.enforced
    }

    pub fn has_key(&self) -> bool {
        self.expected_digest.is_some()
    }

    pub fn validate(&self, presented: Option<&str>) -> Result<(), AppError> {
        if !self.enforced {
            return Ok(());
        }

        let (Some(expected), Some(presented)) = (self.expected_digest.as_ref(), presented) else {
            return Err(AppError::Unauthorized("Unauthorized".to_string()));
        };

        // Digests have a fixed length, so the comparison time does not depend
        // on how much of the key matches.
        let presented = digest(presented);
        let diff = expected
            .iter()
            .zip(presented.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        if diff == 0 {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Unauthorized".to_string()))
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
