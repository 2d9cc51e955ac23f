use pharmops_types::{IdError, ValidationPattern};

/// Errors returned by registry lookups, validation and catalog export.
///
/// All variants are local and recoverable. Lookups are pure, so retrying a failed call with
/// the same input always fails the same way.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown admission type: {0}")]
    UnknownAdmissionType(String),
    #[error("value does not match the {pattern} pattern")]
    ValidationMismatch { pattern: ValidationPattern },
    #[error("unknown {kind}: {value}")]
    UnknownIdentifier { kind: &'static str, value: String },
    #[error("unknown message key: {0}")]
    UnknownMessage(String),
    #[error("message {key} requires variable {{{variable}}}")]
    MissingTemplateVariable { key: &'static str, variable: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("identity backend error: {0}")]
    Identity(String),
    #[error("failed to serialize catalog as JSON: {0}")]
    JsonSerialization(serde_json::Error),
    #[error("failed to serialize catalog as YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to write catalog file: {0}")]
    FileWrite(std::io::Error),
}

impl From<IdError> for RegistryError {
    fn from(err: IdError) -> Self {
        match err {
            IdError::UnknownRole(value) => RegistryError::UnknownRole(value),
            IdError::UnknownAdmissionType(value) => RegistryError::UnknownAdmissionType(value),
            IdError::Unknown { kind, value } => RegistryError::UnknownIdentifier { kind, value },
        }
    }
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
