use thiserror::Error;

/// Domain error taxonomy.
///
/// The `Display` strings are the exact user-visible messages; the API layer
/// maps variants to status codes and reuses these texts in response bodies.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lookup by id came up empty.
    #[error("{entity} with ID {id} not found.")]
    NotFound { entity: &'static str, id: String },

    /// A create collided with an already-stored id.
    #[error("{entity} with {id} ID already exists.")]
    Conflict { entity: &'static str, id: String },

    /// A date string did not match the `dd-MMM-yyyy` pattern.
    #[error("Invalid date format. Please use 'dd-MMM-yyyy'.")]
    MalformedDate,

    /// Anything unexpected; surfaces as a 500.
    #[error("{0}")]
    Internal(String),
}
