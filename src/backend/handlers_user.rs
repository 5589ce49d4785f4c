//! Handlers for the user endpoints.
//! Creation runs the full validation pipeline before a record is admitted;
//! the checks run in a fixed order and the first failure wins.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use http::StatusCode;
use log::info;
use serde_json::{json, Value};

use crate::database::{Collection, Store, User};
use crate::utils::error_messages::INTERNAL_ERROR;
use crate::utils::response::{
    bad_request_response, internal_error_response, not_found_response, success_response,
    ApiResponse,
};
use crate::utils::validation::{
    coerce_to_text, is_unique, validate_email, validate_field_length, validate_payload,
    validate_phone, validate_required_field, ValidationError, MIN_FIELD_LENGTH,
};

/// Fields every create request must carry, in the order they are checked.
const REQUIRED_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "phone"];

/// A user that passed every check, ready to be admitted.
#[derive(Debug)]
struct NewUser {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

/// Coerced text of a payload field, empty when absent.
fn field_text(payload: &Value, field: &str) -> String {
    payload.get(field).map(coerce_to_text).unwrap_or_default()
}

/// Runs the create-user checks in their fixed order against the payload and
/// the existing collection.
fn check_new_user(
    payload: Option<&Value>,
    users: &Collection<User>,
) -> Result<NewUser, ValidationError> {
    validate_payload(payload)?;
    let data = payload.ok_or(ValidationError::MalformedPayload)?;

    for field in REQUIRED_FIELDS {
        validate_required_field(data, field)?;
    }
    validate_field_length(data, "firstName", MIN_FIELD_LENGTH)?;
    validate_field_length(data, "lastName", MIN_FIELD_LENGTH)?;

    let email = field_text(data, "email");
    if !validate_email(&email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    let phone = field_text(data, "phone");
    if !validate_phone(&phone) {
        return Err(ValidationError::InvalidPhoneFormat);
    }

    if !is_unique(users.records().values(), "email", &email) {
        return Err(ValidationError::DuplicateValue {
            field: "email".to_string(),
            value: email,
        });
    }
    if !is_unique(users.records().values(), "phone", &phone) {
        return Err(ValidationError::DuplicateValue {
            field: "phone number".to_string(),
            value: phone,
        });
    }

    Ok(NewUser {
        first_name: field_text(data, "firstName"),
        last_name: field_text(data, "lastName"),
        email,
        phone,
    })
}

/// Validates and admits a new user, answering 201 with the stored record.
pub async fn create_user(
    State(store): State<Arc<Store>>,
    payload: Option<Json<Value>>,
) -> axum::response::Result<(StatusCode, Json<ApiResponse>)> {
    let payload = payload.map(|Json(value)| value);

    // One write lock spans the uniqueness scan and the insert.
    let mut users = store
        .users_mut()
        .map_err(|_| internal_error_response(INTERNAL_ERROR))?;

    let new_user = match check_new_user(payload.as_ref(), &users) {
        Ok(new_user) => new_user,
        Err(error) => return Ok(bad_request_response(&error.to_string())),
    };

    let user = users.insert_with(|id| User {
        id,
        first_name: new_user.first_name,
        last_name: new_user.last_name,
        email: new_user.email,
        phone: new_user.phone,
    });
    info!("User {} created", user.id);

    Ok(success_response(
        "User created successfully",
        json!(user),
        StatusCode::CREATED,
    ))
}

/// Fetches a single user by id.
pub async fn get_user(
    State(store): State<Arc<Store>>,
    Path(id): Path<u64>,
) -> axum::response::Result<(StatusCode, Json<ApiResponse>)> {
    let users = store
        .users()
        .map_err(|_| internal_error_response(INTERNAL_ERROR))?;

    match users.get(id) {
        Some(user) => Ok(success_response(
            "User retrieved successfully",
            json!(user),
            StatusCode::OK,
        )),
        None => Ok(not_found_response(&format!(
            "User with id '{}' not found",
            id
        ))),
    }
}

/// Lists every user, ordered by id.
pub async fn list_users(
    State(store): State<Arc<Store>>,
) -> axum::response::Result<(StatusCode, Json<ApiResponse>)> {
    let users = store
        .users()
        .map_err(|_| internal_error_response(INTERNAL_ERROR))?;

    let mut listing: Vec<&User> = users.records().values().collect();
    listing.sort_by_key(|user| user.id);

    Ok(success_response(
        "Users retrieved successfully",
        json!(listing),
        StatusCode::OK,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joshua() -> Value {
        json!({
            "firstName": "Joshua",
            "lastName": "Fashola",
            "email": "fashjosh2004@gmail.com",
            "phone": "08160840249",
        })
    }

    fn seeded_users() -> Collection<User> {
        let mut users = Collection::default();
        users.insert_with(|id| User {
            id,
            first_name: "Joshua".to_string(),
            last_name: "Fashola".to_string(),
            email: "fashjosh2004@gmail.com".to_string(),
            phone: "08160840249".to_string(),
        });
        users
    }

    #[test]
    fn test_accepts_a_valid_user() {
        let users = Collection::default();

        let new_user = check_new_user(Some(&joshua()), &users).expect("valid payload");
        assert_eq!(new_user.first_name, "Joshua");
        assert_eq!(new_user.last_name, "Fashola");
        assert_eq!(new_user.email, "fashjosh2004@gmail.com");
        assert_eq!(new_user.phone, "08160840249");
    }

    #[test]
    fn test_payload_checks_run_first() {
        let users = Collection::default();

        assert_eq!(
            check_new_user(None, &users).unwrap_err(),
            ValidationError::MalformedPayload
        );
        assert_eq!(
            check_new_user(Some(&json!({})), &users).unwrap_err(),
            ValidationError::EmptyPayload
        );
    }

    #[test]
    fn test_required_fields_are_checked_in_order() {
        let users = Collection::default();

        // Everything is missing; firstName is reported because it is
        // checked first.
        let payload = json!({ "note": "hello" });
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::MissingField("firstName".to_string())
        );

        let mut payload = joshua();
        payload.as_object_mut().expect("object").remove("phone");
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::MissingField("phone".to_string())
        );
    }

    #[test]
    fn test_length_checks_run_before_format_checks() {
        let users = Collection::default();

        // Both the name and the email are wrong; the name length check is
        // earlier in the order.
        let mut payload = joshua();
        payload["firstName"] = json!("Jo");
        payload["email"] = json!("not-an-email");
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::InvalidField {
                field: "firstName".to_string(),
                min_length: MIN_FIELD_LENGTH,
            }
        );
    }

    #[test]
    fn test_email_format_is_checked_before_phone_format() {
        let users = Collection::default();

        let mut payload = joshua();
        payload["email"] = json!("not-an-email");
        payload["phone"] = json!("123");
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::InvalidEmailFormat
        );

        let mut payload = joshua();
        payload["phone"] = json!("0712345678");
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::InvalidPhoneFormat
        );
    }

    #[test]
    fn test_duplicate_email_is_rejected_case_insensitively() {
        let users = seeded_users();

        let mut payload = joshua();
        payload["email"] = json!("FASHJOSH2004@GMAIL.COM");
        payload["phone"] = json!("07012345678");
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::DuplicateValue {
                field: "email".to_string(),
                value: "FASHJOSH2004@GMAIL.COM".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_phone_is_rejected_after_email() {
        let users = seeded_users();

        let mut payload = joshua();
        payload["email"] = json!("amina@example.com");
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::DuplicateValue {
                field: "phone number".to_string(),
                value: "08160840249".to_string(),
            }
        );
    }

    #[test]
    fn test_numeric_name_passes_required_but_fails_length() {
        let users = Collection::default();

        // A number coerces to non-empty text, so the required check lets it
        // through; the alphabetic rule then rejects it.
        let mut payload = joshua();
        payload["firstName"] = json!(123);
        assert_eq!(
            check_new_user(Some(&payload), &users).unwrap_err(),
            ValidationError::InvalidField {
                field: "firstName".to_string(),
                min_length: MIN_FIELD_LENGTH,
            }
        );
    }
}
