//! SDK error model.

use thiserror::Error;

/// Result type used across the SDK.
pub type CommerceResult<T> = Result<T, CommerceError>;

/// Commerce-domain error.
///
/// Keep this focused on deterministic argument/state failures. Transport
/// concerns (the sink) are never surfaced here; telemetry loss is not an
/// error the host has to handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A value failed validation (e.g. blank product name or sku).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Purchase/refund was attempted without usable transaction attributes.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A cart blob could not be serialized or parsed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl CommerceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_transaction(msg: impl Into<String>) -> Self {
        Self::InvalidTransaction(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
