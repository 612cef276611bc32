//! Employee entity model and DTOs.

use chrono::NaiveDate;
use roster_core::date_format;
use serde::{Deserialize, Serialize};

/// The authoritative in-memory record for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: String,
    pub full_name: String,
    pub birth_date: NaiveDate,
}

/// Wire-format representation of an employee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub employee_id: String,
    pub full_name: String,
    /// Rendered `dd-MMM-yyyy`.
    #[serde(with = "date_format")]
    pub birth_date: NaiveDate,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            birth_date: employee.birth_date,
        }
    }
}

/// DTO for creating a new employee. The id is supplied by the caller, not
/// generated.
///
/// Fields default to empty strings so that missing JSON keys surface as
/// "required" validation messages instead of a serde-level rejection, and
/// `birth_date` stays a raw string until validation has vouched for its
/// format.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub full_name: String,
    /// `dd-MMM-yyyy`.
    #[serde(default)]
    pub birth_date: String,
}

/// DTO for a partial update. The id comes from the request path and is
/// never overwritten.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[serde(default)]
    pub full_name: String,
    /// `dd-MMM-yyyy`.
    #[serde(default)]
    pub birth_date: String,
}
