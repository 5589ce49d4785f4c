//! Duplicate detection over existing records.

/// Per-field text view of a stored record. Returning `None` for an unknown
/// field makes the scan treat it as empty text.
pub trait FieldText {
    fn field_text(&self, field: &str) -> Option<&str>;
}

/// Returns whether no existing record already holds `value` in `field`,
/// comparing case-insensitively after lower-casing both sides. Generic over
/// any sequence of records, so a keyed collection's `.values()` and a plain
/// slice pass through the same signature. Linear scan; the collections in
/// this system stay small.
pub fn is_unique<'a, I, R>(records: I, field: &str, value: &str) -> bool
where
    I: IntoIterator<Item = &'a R>,
    R: FieldText + 'a,
{
    let candidate = value.to_lowercase();
    records
        .into_iter()
        .all(|record| record.field_text(field).unwrap_or("").to_lowercase() != candidate)
}
