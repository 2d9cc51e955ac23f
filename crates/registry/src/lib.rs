//! # PharmOps Registry
//!
//! Static configuration for the PharmOps hospital pharmacy product.
//!
//! This crate owns the read-only tables the rest of the product is built on:
//! - role definitions with their permission and feature sets
//! - admission routing (priority and delivery mode)
//! - severity levels, departments and workflow statuses
//! - input validation patterns and user-facing system messages
//!
//! Everything is immutable process-wide data, so lookups are safe from any number of threads
//! without locking.
//!
//! **No transport concerns**: HTTP lives in `api-rest`, terminal output in `pharmops-cli`.
//! Authentication and persistence belong to the external backend behind [`identity`].

pub mod admission;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod departments;
pub mod error;
pub mod identity;
pub mod messages;
pub mod roles;
pub mod severity;
pub mod validation;

pub use admission::{AdmissionProfile, AdmissionRoute};
pub use catalog::{Catalog, ExportFormat};
pub use config::RuntimeConfig;
pub use departments::DepartmentProfile;
pub use error::{RegistryError, RegistryResult};
pub use messages::SystemMessage;
pub use roles::RoleProfile;
pub use severity::SeverityProfile;

pub use pharmops_types as types;
pub use pharmops_types::{
    AdmissionType, DeliveryMode, Department, Feature, MessageCategory, Permission, RoleId,
    SeverityLevel, ValidationPattern,
};

/// Role and admission lookups.
///
/// This is a zero-sized type used for namespacing registry queries. String-keyed methods parse
/// the identifier and delegate to their typed counterparts, which cannot fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoleCapabilityRegistry;

impl RoleCapabilityRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Describe a role by its wire identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownRole`] if `role_id` is not one of the known roles.
    pub fn describe(&self, role_id: &str) -> RegistryResult<&'static RoleProfile> {
        let role: RoleId = role_id.parse()?;
        Ok(self.describe_role(role))
    }

    pub fn describe_role(&self, role: RoleId) -> &'static RoleProfile {
        roles::profile(role)
    }

    /// Route an admission by its wire identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownAdmissionType`] if `admission_type_id` is not one of the
    /// known admission types.
    pub fn route_admission(&self, admission_type_id: &str) -> RegistryResult<AdmissionRoute> {
        let admission: AdmissionType = admission_type_id.parse()?;
        Ok(self.route(admission))
    }

    pub fn route(&self, admission: AdmissionType) -> AdmissionRoute {
        admission::profile(admission).route()
    }

    /// Every role profile in declaration order.
    pub fn roles(&self) -> Vec<&'static RoleProfile> {
        roles::profiles().collect()
    }

    /// Every admission profile in declaration order.
    pub fn admission_types(&self) -> Vec<&'static AdmissionProfile> {
        admission::profiles().collect()
    }

    /// Admission profiles ordered by priority, highest first. Ties keep declaration order.
    pub fn admissions_by_priority(&self) -> Vec<&'static AdmissionProfile> {
        admission::by_priority()
    }

    pub fn has_permission(&self, role: RoleId, permission: Permission) -> bool {
        roles::profile(role).has_permission(permission)
    }

    pub fn can_access(&self, role: RoleId, feature: Feature) -> bool {
        roles::profile(role).can_access(feature)
    }

    /// Roles granted `permission`, in declaration order.
    pub fn roles_with_permission(&self, permission: Permission) -> Vec<RoleId> {
        roles::profiles()
            .filter(|p| p.has_permission(permission))
            .map(|p| p.id)
            .collect()
    }
}
