//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the REST layer.
//! The helpers here take optional raw values rather than reading the environment themselves,
//! so the binaries decide where values come from and tests never touch process-wide state.

use crate::constants::{DEFAULT_ORGANISATION_NAME, DEFAULT_REST_ADDR, MAX_ORGANISATION_NAME_LEN};
use crate::{RegistryError, RegistryResult};
use std::net::SocketAddr;

/// Runtime configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    rest_addr: SocketAddr,
    organisation_name: String,
}

impl RuntimeConfig {
    /// Create a new `RuntimeConfig`.
    pub fn new(rest_addr: SocketAddr, organisation_name: String) -> RegistryResult<Self> {
        let organisation_name = organisation_name.trim().to_string();
        if organisation_name.is_empty() {
            return Err(RegistryError::InvalidInput(
                "organisation name cannot be empty".into(),
            ));
        }
        if organisation_name.chars().count() > MAX_ORGANISATION_NAME_LEN {
            return Err(RegistryError::InvalidInput(format!(
                "organisation name exceeds maximum length of {} characters",
                MAX_ORGANISATION_NAME_LEN
            )));
        }

        Ok(Self {
            rest_addr,
            organisation_name,
        })
    }

    /// Build a configuration from optional raw values, falling back to defaults.
    ///
    /// Empty or whitespace-only values are treated as unset.
    pub fn from_values(
        rest_addr: Option<String>,
        organisation_name: Option<String>,
    ) -> RegistryResult<Self> {
        let rest_addr = rest_addr_from_value(rest_addr)?;
        let organisation_name = non_blank(organisation_name)
            .unwrap_or_else(|| DEFAULT_ORGANISATION_NAME.to_string());
        Self::new(rest_addr, organisation_name)
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn organisation_name(&self) -> &str {
        &self.organisation_name
    }
}

/// Parse the REST bind address from an optional string value.
///
/// If `value` is `None` or blank, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_value(value: Option<String>) -> RegistryResult<SocketAddr> {
    let raw = non_blank(value).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
    raw.parse::<SocketAddr>()
        .map_err(|e| RegistryError::InvalidInput(format!("invalid REST address {raw:?}: {e}")))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_values_missing() {
        let cfg = RuntimeConfig::from_values(None, None).expect("defaults are valid");
        assert_eq!(cfg.rest_addr().to_string(), DEFAULT_REST_ADDR);
        assert_eq!(cfg.organisation_name(), DEFAULT_ORGANISATION_NAME);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let cfg = RuntimeConfig::from_values(Some("  ".into()), Some("".into()))
            .expect("blank values fall back");
        assert_eq!(cfg.rest_addr().to_string(), DEFAULT_REST_ADDR);
        assert_eq!(cfg.organisation_name(), DEFAULT_ORGANISATION_NAME);
    }

    #[test]
    fn explicit_values_are_used() {
        let cfg = RuntimeConfig::from_values(
            Some("127.0.0.1:8080".into()),
            Some("  St Elsewhere  ".into()),
        )
        .expect("valid values");
        assert_eq!(cfg.rest_addr().port(), 8080);
        assert_eq!(cfg.organisation_name(), "St Elsewhere");
    }

    #[test]
    fn rejects_unparseable_address() {
        let err = rest_addr_from_value(Some("localhost".into())).expect_err("no port");
        assert!(matches!(err, RegistryError::InvalidInput(msg) if msg.contains("invalid REST address")));
    }

    #[test]
    fn rejects_overlong_organisation_name() {
        let addr = rest_addr_from_value(None).expect("default address");
        let err = RuntimeConfig::new(addr, "x".repeat(MAX_ORGANISATION_NAME_LEN + 1))
            .expect_err("too long");
        assert!(matches!(err, RegistryError::InvalidInput(msg) if msg.contains("maximum length")));
    }
}
