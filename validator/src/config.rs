//! Validator configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use slp_messages::ProtocolMessage;
use slp_types::{TokenAmount, TokenId, TokenType};

use crate::error::{ConfigError, UnsupportedReason};

/// Caller-supplied policy for a validation call.
///
/// Every field is optional; the default configuration judges every
/// message on consensus rules alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Only judge messages of this token type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforced_token_type: Option<TokenType>,

    /// Only judge messages for this token (hex in TOML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id_filter: Option<TokenId>,

    /// For SEND, the exact quantity the caller expects to be destroyed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_burn: Option<TokenAmount>,
}

impl ValidatorConfig {
    pub fn enforcing(token_type: TokenType) -> Self {
        Self {
            enforced_token_type: Some(token_type),
            ..Self::default()
        }
    }

    pub fn filtering(token_id: TokenId) -> Self {
        Self {
            token_id_filter: Some(token_id),
            ..Self::default()
        }
    }

    pub fn with_expected_burn(mut self, burn: TokenAmount) -> Self {
        self.expected_burn = Some(burn);
        self
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Whether `message` falls inside this configuration's scope.
    pub fn admits(&self, message: &ProtocolMessage) -> Result<(), UnsupportedReason> {
        if let Some(enforced) = self.enforced_token_type {
            if message.token_type != enforced {
                return Err(UnsupportedReason::TokenTypeNotEnforced {
                    enforced,
                    found: message.token_type,
                });
            }
        }
        if let Some(expected) = self.token_id_filter {
            let found = message.token_id();
            if found != Some(expected) {
                return Err(UnsupportedReason::TokenIdFiltered { expected, found });
            }
        }
        Ok(())
    }
}
