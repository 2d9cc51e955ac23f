//! JSON request and response bodies.
//!
//! These are wire types: identifiers are plain strings so the OpenAPI schema stays flat and
//! independent of the registry's Rust enums.

use pharmops_registry::{
    AdmissionProfile, DepartmentProfile, RoleProfile, SeverityProfile, SystemMessage,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleRes {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub features: Vec<String>,
}

impl From<&RoleProfile> for RoleRes {
    fn from(p: &RoleProfile) -> Self {
        Self {
            id: p.id.as_str().into(),
            display_name: p.display_name.into(),
            description: p.description.into(),
            permissions: p.permissions.iter().map(|x| x.as_str().into()).collect(),
            features: p.features.iter().map(|x| x.as_str().into()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListRolesRes {
    pub roles: Vec<RoleRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdmissionRes {
    pub id: String,
    pub label: String,
    pub priority: u8,
    pub delivery_mode: String,
}

impl From<&AdmissionProfile> for AdmissionRes {
    fn from(p: &AdmissionProfile) -> Self {
        Self {
            id: p.id.as_str().into(),
            label: p.label.into(),
            priority: p.priority,
            delivery_mode: p.delivery_mode.as_str().into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListAdmissionsRes {
    pub admission_types: Vec<AdmissionRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteRes {
    pub admission_type: String,
    pub priority: u8,
    pub delivery_mode: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeverityRes {
    pub level: String,
    pub label: String,
    pub priority: u8,
    pub color: String,
}

impl From<&SeverityProfile> for SeverityRes {
    fn from(p: &SeverityProfile) -> Self {
        Self {
            level: p.level.as_str().into(),
            label: p.label.into(),
            priority: p.priority,
            color: p.color.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListSeveritiesRes {
    pub severity_levels: Vec<SeverityRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentRes {
    pub id: String,
    pub code: String,
    pub name: String,
}

impl From<&DepartmentProfile> for DepartmentRes {
    fn from(p: &DepartmentProfile) -> Self {
        Self {
            id: p.id.as_str().into(),
            code: p.code.into(),
            name: p.name.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDepartmentsRes {
    pub departments: Vec<DepartmentRes>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub key: String,
    pub category: String,
    pub template: String,
}

impl From<&SystemMessage> for MessageRes {
    fn from(m: &SystemMessage) -> Self {
        Self {
            key: m.key.into(),
            category: m.category.as_str().into(),
            template: m.template.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListMessagesRes {
    pub messages: Vec<MessageRes>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessagesQuery {
    /// Restrict to one category: `success`, `error` or `warning`.
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateReq {
    /// Pattern name, for example `email` or `patientId`.
    pub pattern: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateRes {
    pub pattern: String,
    pub valid: bool,
}
