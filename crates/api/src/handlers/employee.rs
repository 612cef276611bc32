//! Handlers for the `/api/employee` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use roster_core::error::CoreError;
use roster_core::{date_format, validation};
use roster_store::models::employee::{CreateEmployee, Employee, EmployeeDto, UpdateEmployee};
use roster_store::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{AckResponse, DataResponse, EmployeePage, ListResponse};
use crate::state::AppState;

/// GET /api/employee
///
/// Paginated listing in ascending id order. An empty page (including an
/// empty store and out-of-range page numbers) reports 404 rather than an
/// empty body.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<ListResponse>> {
    let (page_number, page_size) = params.normalize();
    let employees = EmployeeRepo::list(&state.store, page_number, page_size)?;
    if employees.is_empty() {
        return Err(AppError::NotFound("No employees found.".to_string()));
    }

    let employees = employees.iter().map(EmployeeDto::from).collect();
    Ok(Json(ListResponse {
        data: EmployeePage { employees },
        status: 200,
        page_number,
        page_size,
    }))
}

/// GET /api/employee/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeDto>> {
    let employee = EmployeeRepo::find_by_id(&state.store, &id)?.ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "Employee",
            id,
        },
    ))?;
    Ok(Json(EmployeeDto::from(&employee)))
}

/// POST /api/employee
///
/// Validation runs first and reports every failing field at once. The
/// insert itself is a single atomic insert-if-absent, so two concurrent
/// creates for the same id cannot both succeed.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(
    StatusCode,
    [(header::HeaderName, String); 1],
    Json<DataResponse<EmployeeDto>>,
)> {
    validation::validate_create(&input.employee_id, &input.full_name, &input.birth_date)?;
    let birth_date = date_format::parse(&input.birth_date)?;

    let employee = Employee {
        employee_id: input.employee_id,
        full_name: input.full_name,
        birth_date,
    };
    let id = employee.employee_id.clone();

    let created = EmployeeRepo::insert_if_absent(&state.store, employee)?.ok_or(AppError::Core(
        CoreError::Conflict {
            entity: "Employee",
            id,
        },
    ))?;

    let location = format!("/api/employee/{}", created.employee_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataResponse {
            data: EmployeeDto::from(&created),
            status: 201,
            message: "You have add employee successfully",
        }),
    ))
}

/// PUT /api/employee/{id}
///
/// Overwrites `fullName` and `birthDate`; the id comes from the path and is
/// preserved. The overwrite is a single atomic update-if-present.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<DataResponse<EmployeeDto>>> {
    validation::validate_update(&input.full_name, &input.birth_date)?;
    let birth_date = date_format::parse(&input.birth_date)?;

    let updated = EmployeeRepo::update_if_present(&state.store, &id, &input.full_name, birth_date)?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    Ok(Json(DataResponse {
        data: EmployeeDto::from(&updated),
        status: 200,
        message: "You have edited employee successfully",
    }))
}

/// DELETE /api/employee/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AckResponse>> {
    let deleted = EmployeeRepo::delete(&state.store, &id)?;
    if deleted {
        Ok(Json(AckResponse {
            status: 200,
            message: "Employee deleted successfully.",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
    }
}
