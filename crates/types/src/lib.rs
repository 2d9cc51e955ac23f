//! # PharmOps Types
//!
//! Closed vocabulary shared by every PharmOps crate.
//!
//! Each identifier is a Rust enum with:
//! - a stable wire identifier (`as_str`, `FromStr`, string-based serde)
//! - a human-readable display label (`label`)
//! - an `ALL` slice in declaration order
//!
//! Parsing an identifier outside the closed set fails with [`IdError`].

#[macro_use]
mod identifier;

pub mod access;
pub mod care;
pub mod status;
pub mod text;
pub mod validation;

pub use access::{Feature, Permission, RoleId};
pub use care::{AdmissionType, DeliveryMode, Department, SeverityLevel};
pub use status::{AdmissionStatus, DeliveryStatus, MessageCategory, PrescriptionStatus};
pub use text::{PersonName, TextError};
pub use validation::ValidationPattern;

/// Errors returned when a wire identifier is outside its closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown admission type: {0}")]
    UnknownAdmissionType(String),

    #[error("unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },
}

impl IdError {
    /// The raw value that failed to parse.
    pub fn value(&self) -> &str {
        match self {
            IdError::UnknownRole(value)
            | IdError::UnknownAdmissionType(value)
            | IdError::Unknown { value, .. } => value,
        }
    }
}
