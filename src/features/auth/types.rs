//! Request and response types for the auth API. Login requests carry the
//! plaintext password and responses carry the bearer token, so neither may be
//! logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
/// Successful login payload. `user` is stored as-is; its shape belongs to the API.
pub struct LoginResponse {
    pub token: String,
    pub user: serde_json::Value,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// Body the API sends alongside a non-2xx status.
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_plain_field_names() {
        let request = LoginRequest {
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_value(&request).expect("Failed to serialize");
        assert_eq!(
            json,
            serde_json::json!({ "email": "jane@example.com", "password": "secret" })
        );
    }

    #[test]
    fn error_response_tolerates_missing_message() {
        let body: ErrorResponse = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(body.message, None);
    }
}
