//! Seam to the external identity/session backend.
//!
//! Authentication and account storage live in a hosted backend. This module fixes the
//! contract the rest of the product relies on and validates registration input against the
//! registry before anything is sent over the wire.

use crate::roles::{self, RoleProfile};
use crate::validation;
use crate::{RegistryError, RegistryResult};
use pharmops_types::{Department, PersonName, RoleId, ValidationPattern};
use serde::Serialize;

/// A signed-in staff member as reported by the identity backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub user_id: String,
    pub name: PersonName,
    pub email: String,
    pub role: RoleId,
    pub department: Department,
}

/// Contract of the external identity backend.
pub trait IdentityBackend {
    type Error: std::fmt::Display;

    /// The currently signed-in user, if any.
    fn current_user(&self) -> Result<Option<SessionUser>, Self::Error>;

    /// Create a staff account and return its session.
    fn register_staff(&self, registration: &StaffRegistration) -> Result<SessionUser, Self::Error>;
}

/// Validated input for creating a staff account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffRegistration {
    name: PersonName,
    email: String,
    phone: Option<String>,
    role: RoleId,
    department: Department,
    license_number: Option<String>,
}

/// Roles that dispense, prescribe or administer medication must hold a professional licence.
pub fn requires_license(role: RoleId) -> bool {
    matches!(role, RoleId::Pharmacist | RoleId::Doctor | RoleId::Nurse)
}

impl StaffRegistration {
    /// Validate raw form input.
    ///
    /// Email is trimmed and lower-cased; phone and licence are trimmed and treated as absent
    /// when blank.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidInput`] for an unusable name or a missing licence on a
    ///   clinical role
    /// - [`RegistryError::ValidationMismatch`] for a malformed email, phone or licence
    /// - [`RegistryError::UnknownRole`] / [`RegistryError::UnknownIdentifier`] for a role or
    ///   department outside the closed sets
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<&str>,
        role: &str,
        department: &str,
        license_number: Option<&str>,
    ) -> RegistryResult<Self> {
        let name = PersonName::new(name)
            .map_err(|e| RegistryError::InvalidInput(format!("name: {e}")))?;

        let email = email.trim().to_lowercase();
        validation::validate(ValidationPattern::Email, &email)?;

        let phone = non_blank(phone);
        if let Some(phone) = &phone {
            validation::validate(ValidationPattern::Phone, phone)?;
        }

        let role: RoleId = role.trim().parse()?;
        let department: Department = department.trim().parse()?;

        let license_number = non_blank(license_number);
        match &license_number {
            Some(license) => validation::validate(ValidationPattern::LicenseNumber, license)?,
            None if requires_license(role) => {
                return Err(RegistryError::InvalidInput(format!(
                    "a licence number is required for the {} role",
                    role.as_str()
                )));
            }
            None => {}
        }

        Ok(Self {
            name,
            email,
            phone,
            role,
            department,
            license_number,
        })
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn role(&self) -> RoleId {
        self.role
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn license_number(&self) -> Option<&str> {
        self.license_number.as_deref()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Register a validated staff member with the backend.
pub fn register_staff<B: IdentityBackend>(
    backend: &B,
    registration: &StaffRegistration,
) -> RegistryResult<SessionUser> {
    let user = backend.register_staff(registration).map_err(|e| {
        tracing::warn!(
            "staff registration for role {} rejected by identity backend: {}",
            registration.role(),
            e
        );
        RegistryError::Identity(e.to_string())
    })?;

    if user.role != registration.role() {
        return Err(RegistryError::Identity(format!(
            "backend assigned role {} but {} was requested",
            user.role,
            registration.role()
        )));
    }

    tracing::info!("registered staff account {} as {}", user.user_id, user.role);
    Ok(user)
}

/// Resolve the signed-in user together with their role profile.
pub fn current_profile<B: IdentityBackend>(
    backend: &B,
) -> RegistryResult<Option<(SessionUser, &'static RoleProfile)>> {
    let user = backend
        .current_user()
        .map_err(|e| RegistryError::Identity(e.to_string()))?;

    Ok(user.map(|u| {
        let profile = roles::profile(u.role);
        (u, profile)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmops_types::Feature;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeBackend {
        signed_in: Mutex<Option<SessionUser>>,
        reject_with: Option<String>,
        override_role: Option<RoleId>,
    }

    impl IdentityBackend for FakeBackend {
        type Error = String;

        fn current_user(&self) -> Result<Option<SessionUser>, Self::Error> {
            Ok(self.signed_in.lock().map_err(|e| e.to_string())?.clone())
        }

        fn register_staff(
            &self,
            registration: &StaffRegistration,
        ) -> Result<SessionUser, Self::Error> {
            if let Some(reason) = &self.reject_with {
                return Err(reason.clone());
            }
            let user = SessionUser {
                user_id: "user-1".into(),
                name: registration.name().clone(),
                email: registration.email().to_string(),
                role: self.override_role.unwrap_or(registration.role()),
                department: registration.department(),
            };
            *self.signed_in.lock().map_err(|e| e.to_string())? = Some(user.clone());
            Ok(user)
        }
    }

    fn pharmacist() -> StaffRegistration {
        StaffRegistration::new(
            " Ada  Lovelace ",
            "Ada@Hospital.org ",
            Some("+44 20 7946 0958"),
            "pharmacist",
            "pharmacy",
            Some("RP1234567"),
        )
        .expect("valid registration")
    }

    #[test]
    fn normalises_registration_input() {
        let reg = pharmacist();
        assert_eq!(reg.name().as_str(), "Ada Lovelace");
        assert_eq!(reg.email(), "ada@hospital.org");
        assert_eq!(reg.role(), RoleId::Pharmacist);
        assert_eq!(reg.department(), Department::Pharmacy);
        assert_eq!(reg.license_number(), Some("RP1234567"));
    }

    #[test]
    fn rejects_malformed_email() {
        let err = StaffRegistration::new("Ada", "not-an-email", None, "admin", "administration", None)
            .expect_err("bad email");
        assert!(matches!(
            err,
            RegistryError::ValidationMismatch {
                pattern: ValidationPattern::Email
            }
        ));
    }

    #[test]
    fn rejects_unknown_role() {
        let err = StaffRegistration::new("Ada", "a@b.com", None, "surgeon", "surgery", None)
            .expect_err("unknown role");
        assert!(matches!(err, RegistryError::UnknownRole(r) if r == "surgeon"));
    }

    #[test]
    fn rejects_unknown_department() {
        let err = StaffRegistration::new("Ada", "a@b.com", None, "receptionist", "canteen", None)
            .expect_err("unknown department");
        assert!(matches!(
            err,
            RegistryError::UnknownIdentifier { kind: "department", .. }
        ));
    }

    #[test]
    fn clinical_roles_require_licence() {
        let err = StaffRegistration::new("Ada", "a@b.com", None, "nurse", "cardiology", Some("  "))
            .expect_err("missing licence");
        assert!(matches!(err, RegistryError::InvalidInput(msg) if msg.contains("licence")));

        assert!(
            StaffRegistration::new("Ada", "a@b.com", None, "delivery_staff", "pharmacy", None)
                .is_ok()
        );
    }

    #[test]
    fn blank_phone_is_absent() {
        let reg = StaffRegistration::new("Ada", "a@b.com", Some(" "), "admin", "administration", None)
            .expect("valid");
        assert_eq!(reg.phone(), None);
    }

    #[test]
    fn register_then_resolve_profile() {
        let backend = FakeBackend::default();
        let user = register_staff(&backend, &pharmacist()).expect("registered");
        assert_eq!(user.role, RoleId::Pharmacist);

        let (current, profile) = current_profile(&backend)
            .expect("backend reachable")
            .expect("signed in");
        assert_eq!(current, user);
        assert!(profile.can_access(Feature::Inventory));
    }

    #[test]
    fn no_current_user_before_registration() {
        let backend = FakeBackend::default();
        assert!(current_profile(&backend).expect("reachable").is_none());
    }

    #[test]
    fn backend_rejection_maps_to_identity_error() {
        let backend = FakeBackend {
            reject_with: Some("email already registered".into()),
            ..Default::default()
        };
        let err = register_staff(&backend, &pharmacist()).expect_err("rejected");
        assert!(matches!(err, RegistryError::Identity(msg) if msg.contains("already registered")));
    }

    #[test]
    fn role_mismatch_from_backend_is_rejected() {
        let backend = FakeBackend {
            override_role: Some(RoleId::Admin),
            ..Default::default()
        };
        let err = register_staff(&backend, &pharmacist()).expect_err("role mismatch");
        assert!(matches!(err, RegistryError::Identity(msg) if msg.contains("assigned role admin")));
    }
}
