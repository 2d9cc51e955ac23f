//! Admission routing.
//!
//! An admission type decides how urgently medication is prepared and where it is handed over.
//! Inpatient pathways (`emergency`, `planned`, `transfer`) deliver to the bedside; `outpatient`
//! collects from the pharmacy.

use pharmops_types::{AdmissionType, DeliveryMode};
use serde::Serialize;

/// Routing metadata for one admission type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdmissionProfile {
    pub id: AdmissionType,
    pub label: &'static str,
    /// 1 is the highest priority.
    pub priority: u8,
    pub delivery_mode: DeliveryMode,
}

/// Result of routing an admission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AdmissionRoute {
    pub priority: u8,
    pub delivery_mode: DeliveryMode,
}

impl AdmissionProfile {
    pub fn route(&self) -> AdmissionRoute {
        AdmissionRoute {
            priority: self.priority,
            delivery_mode: self.delivery_mode,
        }
    }
}

// `planned` and `transfer` share priority 2. Ordering between them is unspecified.
static EMERGENCY: AdmissionProfile = AdmissionProfile {
    id: AdmissionType::Emergency,
    label: "Emergency Admission",
    priority: 1,
    delivery_mode: DeliveryMode::Bedside,
};

static PLANNED: AdmissionProfile = AdmissionProfile {
    id: AdmissionType::Planned,
    label: "Planned Admission",
    priority: 2,
    delivery_mode: DeliveryMode::Bedside,
};

static TRANSFER: AdmissionProfile = AdmissionProfile {
    id: AdmissionType::Transfer,
    label: "Transfer",
    priority: 2,
    delivery_mode: DeliveryMode::Bedside,
};

static OUTPATIENT: AdmissionProfile = AdmissionProfile {
    id: AdmissionType::Outpatient,
    label: "Outpatient",
    priority: 3,
    delivery_mode: DeliveryMode::Pharmacy,
};

/// Returns the static routing profile for `admission`.
pub fn profile(admission: AdmissionType) -> &'static AdmissionProfile {
    match admission {
        AdmissionType::Emergency => &EMERGENCY,
        AdmissionType::Planned => &PLANNED,
        AdmissionType::Transfer => &TRANSFER,
        AdmissionType::Outpatient => &OUTPATIENT,
    }
}

/// Every admission profile in declaration order.
pub fn profiles() -> impl Iterator<Item = &'static AdmissionProfile> {
    AdmissionType::ALL.iter().map(|a| profile(*a))
}

/// Admission profiles ordered by priority, highest first.
///
/// The sort is stable, so equal priorities keep declaration order. Callers must not rely on
/// that order.
pub fn by_priority() -> Vec<&'static AdmissionProfile> {
    let mut out: Vec<_> = profiles().collect();
    out.sort_by_key(|p| p.priority);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inpatient_pathways_deliver_to_bedside() {
        for admission in [
            AdmissionType::Emergency,
            AdmissionType::Planned,
            AdmissionType::Transfer,
        ] {
            assert_eq!(profile(admission).delivery_mode, DeliveryMode::Bedside);
        }
        assert_eq!(
            profile(AdmissionType::Outpatient).delivery_mode,
            DeliveryMode::Pharmacy
        );
    }

    #[test]
    fn priority_order_matches_clinical_urgency() {
        let emergency = profile(AdmissionType::Emergency).priority;
        let planned = profile(AdmissionType::Planned).priority;
        let transfer = profile(AdmissionType::Transfer).priority;
        let outpatient = profile(AdmissionType::Outpatient).priority;

        assert!(emergency < planned);
        assert_eq!(planned, transfer);
        assert!(transfer < outpatient);
    }

    #[test]
    fn labels_match_vocabulary() {
        for p in profiles() {
            assert_eq!(p.label, p.id.label());
        }
    }

    #[test]
    fn by_priority_puts_emergency_first_and_outpatient_last() {
        let ordered = by_priority();
        assert_eq!(ordered.first().map(|p| p.id), Some(AdmissionType::Emergency));
        assert_eq!(ordered.last().map(|p| p.id), Some(AdmissionType::Outpatient));
        assert!(ordered.windows(2).all(|w| w[0].priority <= w[1].priority));
    }

    #[test]
    fn route_copies_priority_and_mode() {
        let route = profile(AdmissionType::Transfer).route();
        assert_eq!(
            route,
            AdmissionRoute {
                priority: 2,
                delivery_mode: DeliveryMode::Bedside
            }
        );
    }
}
