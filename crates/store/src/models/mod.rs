//! Entity models and transfer objects.

pub mod employee;
