//! Input validation patterns.
//!
//! Each [`ValidationPattern`] is backed by one regular expression compiled on first use and
//! shared for the rest of the process. Patterns are anchored, so a match always covers the
//! whole input.

use crate::{RegistryError, RegistryResult};
use pharmops_types::ValidationPattern;
use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("pattern compiles: ", $re)));
    };
}

pattern!(EMAIL, r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
pattern!(PHONE, r"^\+?[0-9][0-9 \-]{6,14}[0-9]$");
pattern!(PATIENT_ID, r"^PAT[0-9]{6}$");
pattern!(ADMISSION_ID, r"^ADM[0-9]{6}$");
pattern!(PRESCRIPTION_ID, r"^RX[0-9]{6}$");
pattern!(ZIP_CODE, r"^[0-9]{5}(-[0-9]{4})?$");
pattern!(LICENSE_NUMBER, r"^[A-Z]{2}[0-9]{6,8}$");

/// Returns the compiled matcher for `pattern`.
pub fn regex(pattern: ValidationPattern) -> &'static Regex {
    match pattern {
        ValidationPattern::Email => &*EMAIL,
        ValidationPattern::Phone => &*PHONE,
        ValidationPattern::PatientId => &*PATIENT_ID,
        ValidationPattern::AdmissionId => &*ADMISSION_ID,
        ValidationPattern::PrescriptionId => &*PRESCRIPTION_ID,
        ValidationPattern::ZipCode => &*ZIP_CODE,
        ValidationPattern::LicenseNumber => &*LICENSE_NUMBER,
    }
}

pub fn is_match(pattern: ValidationPattern, input: &str) -> bool {
    regex(pattern).is_match(input)
}

/// Checks `input` against `pattern`.
///
/// # Errors
///
/// Returns [`RegistryError::ValidationMismatch`] if the input does not match.
pub fn validate(pattern: ValidationPattern, input: &str) -> RegistryResult<()> {
    if is_match(pattern, input) {
        Ok(())
    } else {
        Err(RegistryError::ValidationMismatch { pattern })
    }
}

/// Checks `input` against the pattern called `name`.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownIdentifier`] if `name` is not a known pattern, or
/// [`RegistryError::ValidationMismatch`] if the input does not match.
pub fn validate_named(name: &str, input: &str) -> RegistryResult<()> {
    let pattern: ValidationPattern = name.parse()?;
    validate(pattern, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        for pattern in ValidationPattern::ALL {
            assert!(regex(*pattern).as_str().starts_with('^'));
        }
    }

    #[test]
    fn email() {
        assert!(is_match(ValidationPattern::Email, "a@b.com"));
        assert!(is_match(ValidationPattern::Email, "jane.doe+rx@hospital.org"));
        assert!(!is_match(ValidationPattern::Email, "not-an-email"));
        assert!(!is_match(ValidationPattern::Email, "a b@c.com"));
        assert!(!is_match(ValidationPattern::Email, "a@b"));
    }

    #[test]
    fn patient_id() {
        assert!(is_match(ValidationPattern::PatientId, "PAT123456"));
        assert!(!is_match(ValidationPattern::PatientId, "PAT123"));
        assert!(!is_match(ValidationPattern::PatientId, "pat123456"));
        assert!(!is_match(ValidationPattern::PatientId, "PAT1234567"));
    }

    #[test]
    fn admission_and_prescription_ids() {
        assert!(is_match(ValidationPattern::AdmissionId, "ADM000042"));
        assert!(!is_match(ValidationPattern::AdmissionId, "PAT000042"));
        assert!(is_match(ValidationPattern::PrescriptionId, "RX123456"));
        assert!(!is_match(ValidationPattern::PrescriptionId, "RX12345"));
    }

    #[test]
    fn phone() {
        assert!(is_match(ValidationPattern::Phone, "+44 20 7946 0958"));
        assert!(is_match(ValidationPattern::Phone, "555-123-4567"));
        assert!(!is_match(ValidationPattern::Phone, "12345"));
        assert!(!is_match(ValidationPattern::Phone, "call me"));
    }

    #[test]
    fn zip_code() {
        assert!(is_match(ValidationPattern::ZipCode, "90210"));
        assert!(is_match(ValidationPattern::ZipCode, "90210-1234"));
        assert!(!is_match(ValidationPattern::ZipCode, "9021"));
        assert!(!is_match(ValidationPattern::ZipCode, "90210-12"));
    }

    #[test]
    fn license_number() {
        assert!(is_match(ValidationPattern::LicenseNumber, "RP1234567"));
        assert!(!is_match(ValidationPattern::LicenseNumber, "rp1234567"));
        assert!(!is_match(ValidationPattern::LicenseNumber, "R1234567"));
    }

    #[test]
    fn validate_reports_pattern_on_mismatch() {
        assert!(validate(ValidationPattern::Email, "a@b.com").is_ok());
        let err = validate(ValidationPattern::Email, "not-an-email").expect_err("mismatch");
        assert!(matches!(
            err,
            RegistryError::ValidationMismatch {
                pattern: ValidationPattern::Email
            }
        ));
        assert_eq!(err.to_string(), "value does not match the email pattern");
    }

    #[test]
    fn validate_named_rejects_unknown_pattern() {
        assert!(validate_named("patientId", "PAT123456").is_ok());
        let err = validate_named("ssn", "123-45-6789").expect_err("unknown pattern");
        assert!(matches!(
            err,
            RegistryError::UnknownIdentifier { kind: "validation pattern", .. }
        ));
    }
}
