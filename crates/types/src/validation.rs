//! Names of the input validation patterns.
//!
//! The matchers themselves live in `pharmops-registry`; this crate only fixes the closed set
//! of names so that callers can refer to a pattern without depending on `regex`.

use crate::IdError;

identifier_enum! {
    /// A named input format checked before data leaves the browser.
    pub enum ValidationPattern {
        Email => ("email", "Email address"),
        Phone => ("phone", "Phone number"),
        PatientId => ("patientId", "Patient ID"),
        AdmissionId => ("admissionId", "Admission ID"),
        PrescriptionId => ("prescriptionId", "Prescription ID"),
        ZipCode => ("zipCode", "ZIP code"),
        LicenseNumber => ("licenseNumber", "Licence number"),
    }
    unknown = |value| IdError::Unknown { kind: "validation pattern", value };
}
