//! Workflow status enums displayed across the application.

use crate::IdError;

identifier_enum! {
    /// Lifecycle of a prescription from order to hand-over.
    pub enum PrescriptionStatus {
        Pending => ("pending", "Pending Verification"),
        Verified => ("verified", "Verified"),
        Dispensed => ("dispensed", "Dispensed"),
        Delivered => ("delivered", "Delivered"),
        Cancelled => ("cancelled", "Cancelled"),
    }
    unknown = |value| IdError::Unknown { kind: "prescription status", value };
}

identifier_enum! {
    /// Progress of a bedside delivery run.
    pub enum DeliveryStatus {
        Pending => ("pending", "Awaiting Pickup"),
        InTransit => ("in_transit", "In Transit"),
        Delivered => ("delivered", "Delivered"),
        Failed => ("failed", "Delivery Failed"),
    }
    unknown = |value| IdError::Unknown { kind: "delivery status", value };
}

identifier_enum! {
    /// Whether a patient is currently admitted.
    pub enum AdmissionStatus {
        Admitted => ("admitted", "Admitted"),
        Discharged => ("discharged", "Discharged"),
        Transferred => ("transferred", "Transferred"),
    }
    unknown = |value| IdError::Unknown { kind: "admission status", value };
}

identifier_enum! {
    /// Grouping for user-facing system messages.
    pub enum MessageCategory {
        Success => ("success", "Success"),
        Error => ("error", "Error"),
        Warning => ("warning", "Warning"),
    }
    unknown = |value| IdError::Unknown { kind: "message category", value };
}
