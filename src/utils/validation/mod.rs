//! Root module for the validation system.
//! Exposes the public API for input validation.

mod checks;
mod constants;
mod uniqueness;

// Re-export commonly used types and functions
pub use checks::{
    coerce_to_text, validate_email, validate_field_length, validate_payload, validate_phone,
    validate_required_field, ValidationError,
};
pub use constants::*;
pub use uniqueness::{is_unique, FieldText};
