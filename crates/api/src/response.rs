//! Shared response envelope types for API handlers.
//!
//! Success bodies carry a `{ data, status, message }` envelope (or the
//! listing variant echoing the effective page parameters). Use these typed
//! structs instead of ad-hoc `serde_json::json!` literals to get
//! compile-time type safety and consistent serialization.

use roster_store::models::employee::EmployeeDto;
use serde::Serialize;

/// `{ data, status, message }` envelope for create and update responses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    pub status: u16,
    pub message: &'static str,
}

/// `{ status, message }` acknowledgement, used by delete.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub status: u16,
    pub message: &'static str,
}

/// Inner `data` object of a listing response.
#[derive(Debug, Serialize)]
pub struct EmployeePage {
    pub employees: Vec<EmployeeDto>,
}

/// Paginated listing envelope, echoing the effective page parameters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub data: EmployeePage,
    pub status: u16,
    pub page_number: u32,
    pub page_size: u32,
}
