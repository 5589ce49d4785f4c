//! Constants used throughout the validation system


/// Minimum length for validated name fields
pub const MIN_FIELD_LENGTH: usize = 3;
/// Minimum number of digits in a phone number
pub const MIN_PHONE_LENGTH: usize = 11;
/// Prefixes a phone number may start with
pub const PHONE_PREFIXES: [&str; 5] = ["070", "080", "090", "081", "091"];
