//! Request handlers for the employee resource.
//!
//! Handlers validate input, delegate to the repository in `roster_store`,
//! and map outcomes to responses via `AppError`.

pub mod employee;
