//! Role definitions.
//!
//! Each [`RoleId`] maps to exactly one static [`RoleProfile`]. The mapping is a `match`, so
//! adding a role to the vocabulary without describing it here is a compile error.

use pharmops_types::{Feature, Permission, RoleId};
use serde::Serialize;

/// Display metadata and capabilities for one role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoleProfile {
    pub id: RoleId,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Granted permissions, in display order.
    pub permissions: &'static [Permission],
    /// Application areas the role can open, in navigation order.
    pub features: &'static [Feature],
}

impl RoleProfile {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn can_access(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

static ADMIN: RoleProfile = RoleProfile {
    id: RoleId::Admin,
    display_name: "Administrator",
    description: "Sets up the hospital workspace, manages staff accounts, departments and settings.",
    permissions: &[
        Permission::ManageUsers,
        Permission::ManageDepartments,
        Permission::ManageSettings,
        Permission::ViewPatients,
        Permission::RegisterPatients,
        Permission::AdmitPatients,
        Permission::ViewPrescriptions,
        Permission::ManageInventory,
        Permission::AssignDeliveries,
        Permission::ViewDeliveries,
        Permission::ViewReports,
        Permission::ViewNotifications,
    ],
    features: &[
        Feature::Dashboard,
        Feature::Staff,
        Feature::Departments,
        Feature::Patients,
        Feature::Admissions,
        Feature::Prescriptions,
        Feature::Inventory,
        Feature::Deliveries,
        Feature::Reports,
        Feature::Notifications,
        Feature::Settings,
    ],
};

static PHARMACIST: RoleProfile = RoleProfile {
    id: RoleId::Pharmacist,
    display_name: "Pharmacist",
    description: "Verifies prescriptions, dispenses medication and keeps pharmacy stock.",
    permissions: &[
        Permission::ViewPatients,
        Permission::ViewPrescriptions,
        Permission::VerifyPrescriptions,
        Permission::DispenseMedication,
        Permission::ManageInventory,
        Permission::AssignDeliveries,
        Permission::ViewDeliveries,
        Permission::ViewReports,
        Permission::ViewNotifications,
    ],
    features: &[
        Feature::Dashboard,
        Feature::Patients,
        Feature::Prescriptions,
        Feature::Inventory,
        Feature::Deliveries,
        Feature::Reports,
        Feature::Notifications,
    ],
};

static DOCTOR: RoleProfile = RoleProfile {
    id: RoleId::Doctor,
    display_name: "Doctor",
    description: "Admits patients and writes prescriptions for the pharmacy to fulfil.",
    permissions: &[
        Permission::ViewPatients,
        Permission::AdmitPatients,
        Permission::CreatePrescriptions,
        Permission::ViewPrescriptions,
        Permission::ViewReports,
        Permission::ViewNotifications,
    ],
    features: &[
        Feature::Dashboard,
        Feature::Patients,
        Feature::Admissions,
        Feature::Prescriptions,
        Feature::Reports,
        Feature::Notifications,
    ],
};

static NURSE: RoleProfile = RoleProfile {
    id: RoleId::Nurse,
    display_name: "Nurse",
    description: "Receives bedside deliveries and records medication given on the ward.",
    permissions: &[
        Permission::ViewPatients,
        Permission::ViewPrescriptions,
        Permission::RecordAdministration,
        Permission::ViewDeliveries,
        Permission::ReceiveDeliveries,
        Permission::ViewNotifications,
    ],
    features: &[
        Feature::Dashboard,
        Feature::Patients,
        Feature::Admissions,
        Feature::Prescriptions,
        Feature::Deliveries,
        Feature::Notifications,
    ],
};

static RECEPTIONIST: RoleProfile = RoleProfile {
    id: RoleId::Receptionist,
    display_name: "Receptionist",
    description: "Registers arriving patients and opens admissions.",
    permissions: &[
        Permission::ViewPatients,
        Permission::RegisterPatients,
        Permission::AdmitPatients,
        Permission::ViewNotifications,
    ],
    features: &[
        Feature::Dashboard,
        Feature::Patients,
        Feature::Admissions,
        Feature::Notifications,
    ],
};

static DELIVERY_STAFF: RoleProfile = RoleProfile {
    id: RoleId::DeliveryStaff,
    display_name: "Delivery Staff",
    description: "Carries dispensed medication from the pharmacy to the bedside.",
    permissions: &[
        Permission::ViewDeliveries,
        Permission::UpdateDeliveryStatus,
        Permission::ViewNotifications,
    ],
    features: &[
        Feature::Dashboard,
        Feature::Deliveries,
        Feature::Notifications,
    ],
};

/// Returns the static profile for `role`.
pub fn profile(role: RoleId) -> &'static RoleProfile {
    match role {
        RoleId::Admin => &ADMIN,
        RoleId::Pharmacist => &PHARMACIST,
        RoleId::Doctor => &DOCTOR,
        RoleId::Nurse => &NURSE,
        RoleId::Receptionist => &RECEPTIONIST,
        RoleId::DeliveryStaff => &DELIVERY_STAFF,
    }
}

/// Every role profile in declaration order.
pub fn profiles() -> impl Iterator<Item = &'static RoleProfile> {
    RoleId::ALL.iter().map(|role| profile(*role))
}
