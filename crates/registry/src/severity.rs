//! Severity levels for alerts and requests.

use crate::RegistryResult;
use pharmops_types::SeverityLevel;
use serde::Serialize;

/// Display metadata for one severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeverityProfile {
    pub level: SeverityLevel,
    pub label: &'static str,
    /// 1 is the most severe.
    pub priority: u8,
    /// Colour tag used by the presentation layer.
    pub color: &'static str,
}

pub fn profile(level: SeverityLevel) -> SeverityProfile {
    let (priority, color) = match level {
        SeverityLevel::Critical => (1, "red"),
        SeverityLevel::High => (2, "orange"),
        SeverityLevel::Medium => (3, "yellow"),
        SeverityLevel::Low => (4, "green"),
    };
    SeverityProfile {
        level,
        label: level.label(),
        priority,
        color,
    }
}

/// Every severity profile, most severe first.
pub fn profiles() -> Vec<SeverityProfile> {
    let mut out: Vec<_> = SeverityLevel::ALL.iter().map(|l| profile(*l)).collect();
    out.sort_by_key(|p| p.priority);
    out
}

/// Parse a severity identifier and return its profile.
pub fn parse(value: &str) -> RegistryResult<SeverityProfile> {
    let level: SeverityLevel = value.parse()?;
    Ok(profile(level))
}
