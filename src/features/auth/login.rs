//! Login response handling and credential persistence. The network call lives
//! in `client`; everything here works on the status code and body so the rules
//! can be exercised without a browser.

use crate::{
    app_lib::AppError,
    features::{
        auth::types::{ErrorResponse, LoginResponse},
        session::store::{CredentialStore, TOKEN_KEY, USER_KEY},
    },
};

/// Message shown when a failed login carries no usable `message`.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";
/// Longest server message surfaced to the UI.
const MAX_MESSAGE_CHARS: usize = 200;

/// Turns the raw login response into a session payload or a user-facing error.
///
/// Any non-2xx status is a failure whatever the body says; the body's `message`
/// only supplies the wording.
pub fn interpret_login_response(status: u16, body: &str) -> Result<LoginResponse, AppError> {
    if !(200..300).contains(&status) {
        tracing::info!(status, "login rejected");
        return Err(AppError::Rejected(rejection_message(
            body,
            LOGIN_FALLBACK_MESSAGE,
        )));
    }

    serde_json::from_str(body)
        .map_err(|err| AppError::Parse(format!("Failed to decode login response: {err}")))
}

/// Extracts the API's `message` from an error body, or returns `fallback` when
/// the body is not JSON or the message is missing or blank.
pub fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|error| error.message)
        .map(|message| message.trim().chars().take(MAX_MESSAGE_CHARS).collect::<String>())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Writes the token (raw) and the user (JSON text) under the well-known keys.
/// Either both land or neither does: a failed write wipes whatever was
/// already written so the gate never sees a half-stored session.
pub fn persist_session(
    store: &dyn CredentialStore,
    response: &LoginResponse,
) -> Result<(), AppError> {
    let user = serde_json::to_string(&response.user)
        .map_err(|err| AppError::Serialization(format!("Failed to encode user: {err}")))?;

    let written = store
        .set(TOKEN_KEY, &response.token)
        .and_then(|()| store.set(USER_KEY, &user));
    if let Err(err) = written {
        tracing::warn!(error = %err, "failed to store session; rolling back");
        if let Err(cleanup) = store.clear() {
            tracing::warn!(error = %cleanup, "failed to roll back partial session");
        }
        return Err(err);
    }

    tracing::info!("session stored");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{interpret_login_response, persist_session, rejection_message};
    use crate::{
        app_lib::AppError,
        features::session::{
            gate::{Landing, resolve_root},
            store::{CredentialStore, MemoryStore, TOKEN_KEY, USER_KEY},
        },
    };

    #[test]
    fn successful_login_persists_token_and_user() {
        let store = MemoryStore::new();
        let response = interpret_login_response(200, r#"{"token":"t1","user":{"id":1}}"#)
            .expect("login should succeed");

        persist_session(&store, &response).expect("store should accept writes");

        assert_eq!(store.get(TOKEN_KEY).unwrap(), Some("t1".to_string()));
        assert_eq!(store.get(USER_KEY).unwrap(), Some(r#"{"id":1}"#.to_string()));
        assert_eq!(resolve_root(&store), Landing::Dashboard);
    }

    /// Accepts every write except the user blob, like a storage quota that
    /// runs out halfway through.
    struct UserWriteFails(MemoryStore);

    impl CredentialStore for UserWriteFails {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
            if key == USER_KEY {
                return Err(AppError::Storage("quota".to_string()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), AppError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn failed_user_write_leaves_the_user_signed_out() {
        let store = UserWriteFails(MemoryStore::new());
        let response = interpret_login_response(200, r#"{"token":"t1","user":{"id":1}}"#)
            .expect("login should succeed");

        let err = persist_session(&store, &response).expect_err("user write fails");

        assert_eq!(err, AppError::Storage("quota".to_string()));
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(resolve_root(&store), Landing::Login);
    }

    #[test]
    fn unauthorized_login_surfaces_server_message_and_writes_nothing() {
        let store = MemoryStore::new();
        let err = interpret_login_response(401, r#"{"message":"Invalid credentials"}"#)
            .expect_err("login should fail");

        assert_eq!(err, AppError::Rejected("Invalid credentials".to_string()));
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(resolve_root(&store), Landing::Login);
    }

    #[test]
    fn failure_status_wins_over_a_token_in_the_body() {
        let err = interpret_login_response(500, r#"{"token":"t1","user":{}}"#)
            .expect_err("non-2xx must fail");
        assert_eq!(err, AppError::Rejected("Login failed".to_string()));
    }

    #[test]
    fn non_json_error_body_uses_fallback() {
        let err = interpret_login_response(502, "<html>Bad Gateway</html>")
            .expect_err("non-2xx must fail");
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn success_without_token_is_a_parse_error() {
        let err = interpret_login_response(200, r#"{"user":{}}"#).expect_err("missing token");
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn rejection_message_ignores_blank_messages() {
        assert_eq!(rejection_message(r#"{"message":"  "}"#, "Sign up failed"), "Sign up failed");
        assert_eq!(rejection_message("", "Sign up failed"), "Sign up failed");
        assert_eq!(
            rejection_message(r#"{"message":" Email taken "}"#, "Sign up failed"),
            "Email taken"
        );
    }

    #[test]
    fn rejection_message_is_bounded() {
        let long = "x".repeat(500);
        let body = format!(r#"{{"message":"{long}"}}"#);
        assert_eq!(rejection_message(&body, "fallback").len(), 200);
    }
}
