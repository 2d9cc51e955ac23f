//! Serialisable snapshot of every registry table.
//!
//! Presentation components consume the registry as one document rather than calling each
//! lookup. The snapshot borrows the static tables, so building it allocates only the
//! top-level vectors.

use crate::admission::{self, AdmissionProfile};
use crate::constants::{CATALOG_VERSION, PRODUCT_NAME};
use crate::departments::{self, DepartmentProfile};
use crate::messages::{SystemMessage, MESSAGES};
use crate::roles::{self, RoleProfile};
use crate::severity::{self, SeverityProfile};
use crate::validation;
use crate::{RegistryError, RegistryResult};
use pharmops_types::{AdmissionStatus, DeliveryStatus, PrescriptionStatus, ValidationPattern};
use serde::Serialize;
use std::path::Path;

/// On-disk format for [`Catalog::write_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    pub product: &'static str,
    pub version: u32,
    pub roles: Vec<&'static RoleProfile>,
    pub admission_types: Vec<&'static AdmissionProfile>,
    pub severity_levels: Vec<SeverityProfile>,
    pub departments: Vec<DepartmentProfile>,
    pub validation_patterns: Vec<PatternEntry>,
    pub statuses: StatusTables,
    pub messages: &'static [SystemMessage],
}

#[derive(Clone, Debug, Serialize)]
pub struct PatternEntry {
    pub name: ValidationPattern,
    pub label: &'static str,
    pub regex: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct LabelEntry {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct StatusTables {
    pub prescription: Vec<LabelEntry>,
    pub delivery: Vec<LabelEntry>,
    pub admission: Vec<LabelEntry>,
}

impl Catalog {
    /// Build a snapshot of every table.
    pub fn snapshot() -> Self {
        Self {
            product: PRODUCT_NAME,
            version: CATALOG_VERSION,
            roles: roles::profiles().collect(),
            admission_types: admission::profiles().collect(),
            severity_levels: severity::profiles(),
            departments: departments::profiles(),
            validation_patterns: ValidationPattern::ALL
                .iter()
                .map(|p| PatternEntry {
                    name: *p,
                    label: p.label(),
                    regex: validation::regex(*p).as_str(),
                })
                .collect(),
            statuses: StatusTables {
                prescription: PrescriptionStatus::ALL
                    .iter()
                    .map(|s| LabelEntry {
                        id: s.as_str(),
                        label: s.label(),
                    })
                    .collect(),
                delivery: DeliveryStatus::ALL
                    .iter()
                    .map(|s| LabelEntry {
                        id: s.as_str(),
                        label: s.label(),
                    })
                    .collect(),
                admission: AdmissionStatus::ALL
                    .iter()
                    .map(|s| LabelEntry {
                        id: s.as_str(),
                        label: s.label(),
                    })
                    .collect(),
            },
            messages: MESSAGES,
        }
    }

    pub fn to_json(&self) -> RegistryResult<String> {
        serde_json::to_string_pretty(self).map_err(RegistryError::JsonSerialization)
    }

    pub fn to_yaml(&self) -> RegistryResult<String> {
        serde_yaml::to_string(self).map_err(RegistryError::YamlSerialization)
    }

    pub fn render(&self, format: ExportFormat) -> RegistryResult<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Yaml => self.to_yaml(),
        }
    }

    /// Render the catalog and write it to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path, format: ExportFormat) -> RegistryResult<()> {
        let text = self.render(format)?;
        std::fs::write(path, text).map_err(RegistryError::FileWrite)?;
        tracing::info!("wrote {:?} catalog to {}", format, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_covers_every_table() {
        let catalog = Catalog::snapshot();
        assert_eq!(catalog.roles.len(), pharmops_types::RoleId::ALL.len());
        assert_eq!(catalog.admission_types.len(), 4);
        assert_eq!(catalog.severity_levels.len(), 4);
        assert_eq!(
            catalog.validation_patterns.len(),
            ValidationPattern::ALL.len()
        );
        assert_eq!(catalog.statuses.delivery.len(), DeliveryStatus::ALL.len());
        assert_eq!(catalog.messages.len(), MESSAGES.len());
    }

    #[test]
    fn json_uses_wire_identifiers() {
        let json = Catalog::snapshot().to_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["product"], PRODUCT_NAME);
        assert_eq!(value["roles"][5]["id"], "delivery_staff");
        assert_eq!(value["admission_types"][3]["delivery_mode"], "pharmacy");
        assert_eq!(value["validation_patterns"][2]["name"], "patientId");
        assert_eq!(value["statuses"]["delivery"][1]["id"], "in_transit");
    }

    #[test]
    fn yaml_export_parses_back() {
        let yaml = Catalog::snapshot().to_yaml().expect("yaml");
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("valid yaml");
        assert_eq!(value["roles"][0]["id"].as_str(), Some("admin"));
        assert_eq!(value["severity_levels"][0]["color"].as_str(), Some("red"));
    }

    #[test]
    fn write_to_creates_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");

        Catalog::snapshot()
            .write_to(&path, ExportFormat::Json)
            .expect("write catalog");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.contains("\"pharmacist\""));
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("catalog.yaml");

        let err = Catalog::snapshot()
            .write_to(&path, ExportFormat::Yaml)
            .expect_err("parent directory does not exist");
        assert!(matches!(err, RegistryError::FileWrite(_)));
    }
}
