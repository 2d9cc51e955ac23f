//! Hospital departments offered in staff registration and admission forms.

use pharmops_types::Department;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DepartmentProfile {
    pub id: Department,
    /// Short ward code printed on delivery labels.
    pub code: &'static str,
    pub name: &'static str,
}

pub fn profile(department: Department) -> DepartmentProfile {
    let code = match department {
        Department::Emergency => "ED",
        Department::IntensiveCare => "ICU",
        Department::Cardiology => "CARD",
        Department::Neurology => "NEUR",
        Department::Oncology => "ONC",
        Department::Orthopedics => "ORTH",
        Department::Pediatrics => "PED",
        Department::Maternity => "MAT",
        Department::Surgery => "SURG",
        Department::GeneralMedicine => "GEN",
        Department::Radiology => "RAD",
        Department::Pharmacy => "PHAR",
        Department::Administration => "ADM",
    };
    DepartmentProfile {
        id: department,
        code,
        name: department.label(),
    }
}

/// Every department in declaration order.
pub fn profiles() -> Vec<DepartmentProfile> {
    Department::ALL.iter().map(|d| profile(*d)).collect()
}
