//! Repository for the in-memory employee table.

use std::collections::btree_map::Entry;

use chrono::NaiveDate;

use crate::models::employee::Employee;
use crate::{MemStore, StoreError};

/// Provides CRUD operations for employees.
///
/// Existence checks are folded into the mutating operations
/// ([`EmployeeRepo::insert_if_absent`], [`EmployeeRepo::update_if_present`])
/// so callers never need a separate check-then-act sequence that could race
/// under concurrent requests.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List one page of employees in ascending id order.
    ///
    /// Offset-based: skips `(page_number - 1) * page_size` rows and takes up
    /// to `page_size`. An out-of-range page yields an empty Vec, not an
    /// error.
    pub fn list(
        store: &MemStore,
        page_number: u32,
        page_size: u32,
    ) -> Result<Vec<Employee>, StoreError> {
        let employees = store.employees.read().map_err(|_| StoreError::Poisoned)?;
        let offset = (page_number as usize)
            .saturating_sub(1)
            .saturating_mul(page_size as usize);
        Ok(employees
            .values()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    /// Find an employee by id.
    pub fn find_by_id(store: &MemStore, employee_id: &str) -> Result<Option<Employee>, StoreError> {
        let employees = store.employees.read().map_err(|_| StoreError::Poisoned)?;
        Ok(employees.get(employee_id).cloned())
    }

    /// Insert a new employee unless the id is already taken, in one atomic
    /// step.
    ///
    /// Returns `None` when an employee with the same id exists; the caller
    /// decides the error framing.
    pub fn insert_if_absent(
        store: &MemStore,
        employee: Employee,
    ) -> Result<Option<Employee>, StoreError> {
        let mut employees = store.employees.write().map_err(|_| StoreError::Poisoned)?;
        match employees.entry(employee.employee_id.clone()) {
            Entry::Occupied(_) => Ok(None),
            Entry::Vacant(slot) => Ok(Some(slot.insert(employee).clone())),
        }
    }

    /// Overwrite the mutable fields of an existing employee, preserving the
    /// id, in one atomic step.
    ///
    /// Returns `None` when no employee with the id exists.
    pub fn update_if_present(
        store: &MemStore,
        employee_id: &str,
        full_name: &str,
        birth_date: NaiveDate,
    ) -> Result<Option<Employee>, StoreError> {
        let mut employees = store.employees.write().map_err(|_| StoreError::Poisoned)?;
        Ok(employees.get_mut(employee_id).map(|employee| {
            employee.full_name = full_name.to_string();
            employee.birth_date = birth_date;
            employee.clone()
        }))
    }

    /// Remove an employee, reporting whether it was present.
    pub fn delete(store: &MemStore, employee_id: &str) -> Result<bool, StoreError> {
        let mut employees = store.employees.write().map_err(|_| StoreError::Poisoned)?;
        Ok(employees.remove(employee_id).is_some())
    }

    /// Total number of stored employees.
    pub fn count(store: &MemStore) -> Result<usize, StoreError> {
        let employees = store.employees.read().map_err(|_| StoreError::Poisoned)?;
        Ok(employees.len())
    }
}
