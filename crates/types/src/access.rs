//! Access-control vocabulary: roles, permissions and application features.

use crate::IdError;

identifier_enum! {
    /// A named category of system user.
    ///
    /// The set is closed: staff accounts are always assigned one of these roles and no role can
    /// be created at runtime.
    pub enum RoleId {
        /// Hospital system administrator.
        Admin => ("admin", "Administrator"),
        /// Pharmacist verifying and dispensing prescriptions.
        Pharmacist => ("pharmacist", "Pharmacist"),
        /// Prescribing doctor.
        Doctor => ("doctor", "Doctor"),
        /// Ward nurse administering medication.
        Nurse => ("nurse", "Nurse"),
        /// Front-desk staff registering and admitting patients.
        Receptionist => ("receptionist", "Receptionist"),
        /// Porter or runner moving medication to the bedside.
        DeliveryStaff => ("delivery_staff", "Delivery Staff"),
    }
    unknown = IdError::UnknownRole;
}

identifier_enum! {
    /// A single capability that can be granted to a role.
    pub enum Permission {
        ManageUsers => ("manage_users", "Manage staff accounts"),
        ManageDepartments => ("manage_departments", "Manage departments"),
        ManageSettings => ("manage_settings", "Manage system settings"),
        ViewPatients => ("view_patients", "View patients"),
        RegisterPatients => ("register_patients", "Register patients"),
        AdmitPatients => ("admit_patients", "Admit patients"),
        CreatePrescriptions => ("create_prescriptions", "Create prescriptions"),
        ViewPrescriptions => ("view_prescriptions", "View prescriptions"),
        VerifyPrescriptions => ("verify_prescriptions", "Verify prescriptions"),
        DispenseMedication => ("dispense_medication", "Dispense medication"),
        RecordAdministration => ("record_administration", "Record medication administration"),
        ManageInventory => ("manage_inventory", "Manage pharmacy inventory"),
        AssignDeliveries => ("assign_deliveries", "Assign deliveries"),
        ViewDeliveries => ("view_deliveries", "View deliveries"),
        UpdateDeliveryStatus => ("update_delivery_status", "Update delivery status"),
        ReceiveDeliveries => ("receive_deliveries", "Receive bedside deliveries"),
        ViewReports => ("view_reports", "View reports"),
        ViewNotifications => ("view_notifications", "View notifications"),
    }
    unknown = |value| IdError::Unknown { kind: "permission", value };
}

identifier_enum! {
    /// An area of the application a role may navigate to.
    pub enum Feature {
        Dashboard => ("dashboard", "Dashboard"),
        Patients => ("patients", "Patients"),
        Admissions => ("admissions", "Admissions"),
        Prescriptions => ("prescriptions", "Prescriptions"),
        Inventory => ("inventory", "Inventory"),
        Deliveries => ("deliveries", "Deliveries"),
        Reports => ("reports", "Reports"),
        Notifications => ("notifications", "Notifications"),
        Staff => ("staff", "Staff Management"),
        Departments => ("departments", "Departments"),
        Settings => ("settings", "Settings"),
    }
    unknown = |value| IdError::Unknown { kind: "feature", value };
}
