//! Care-pathway vocabulary: admission types, delivery modes, severities and departments.

use crate::IdError;

identifier_enum! {
    /// How a patient enters care.
    pub enum AdmissionType {
        Emergency => ("emergency", "Emergency Admission"),
        Planned => ("planned", "Planned Admission"),
        Transfer => ("transfer", "Transfer"),
        Outpatient => ("outpatient", "Outpatient"),
    }
    unknown = IdError::UnknownAdmissionType;
}

identifier_enum! {
    /// Where medication is handed over to the patient.
    pub enum DeliveryMode {
        /// Medicine is brought to the patient's bed.
        Bedside => ("bedside", "Bedside Delivery"),
        /// Patient collects from the pharmacy counter.
        Pharmacy => ("pharmacy", "Pharmacy Pickup"),
    }
    unknown = |value| IdError::Unknown { kind: "delivery mode", value };
}

identifier_enum! {
    /// Clinical urgency of an alert or request.
    pub enum SeverityLevel {
        Critical => ("critical", "Critical"),
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
    unknown = |value| IdError::Unknown { kind: "severity level", value };
}

identifier_enum! {
    /// Hospital department a staff member or admission belongs to.
    pub enum Department {
        Emergency => ("emergency", "Emergency"),
        IntensiveCare => ("intensive_care", "Intensive Care Unit"),
        Cardiology => ("cardiology", "Cardiology"),
        Neurology => ("neurology", "Neurology"),
        Oncology => ("oncology", "Oncology"),
        Orthopedics => ("orthopedics", "Orthopedics"),
        Pediatrics => ("pediatrics", "Pediatrics"),
        Maternity => ("maternity", "Maternity"),
        Surgery => ("surgery", "Surgery"),
        GeneralMedicine => ("general_medicine", "General Medicine"),
        Radiology => ("radiology", "Radiology"),
        Pharmacy => ("pharmacy", "Pharmacy"),
        Administration => ("administration", "Administration"),
    }
    unknown = |value| IdError::Unknown { kind: "department", value };
}
