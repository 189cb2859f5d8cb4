//! Client wrappers for the auth API endpoints. These helpers centralize paths
//! and response interpretation, keeping route code free of wire details.

use crate::{
    app_lib::{
        AppError,
        api::{post_form, post_json},
        config::{AppConfig, LOGIN_PATH, REGISTER_PATH},
    },
    features::auth::{
        login::{interpret_login_response, rejection_message},
        signup::{SignUpField, SignUpForm},
        types::{LoginRequest, LoginResponse},
    },
};
use web_sys::{File, FormData};

/// Message shown when a failed registration carries no usable `message`.
const REGISTER_FALLBACK_MESSAGE: &str = "Sign up failed";

/// Sends the credentials and returns the session payload on a 2xx answer.
/// Must never log the request.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let url = AppConfig::load().endpoint(LOGIN_PATH);
    let response = post_json(&url, request).await?;
    interpret_login_response(response.status, &response.body)
}

/// Submits the registration as multipart form data with an optional picture.
pub async fn register(form: &SignUpForm, picture: Option<&File>) -> Result<(), AppError> {
    let url = AppConfig::load().endpoint(REGISTER_PATH);
    let data = FormData::new()
        .map_err(|_| AppError::Serialization("Failed to create form data.".to_string()))?;

    for (name, value) in form.text_parts() {
        data.append_with_str(name, value)
            .map_err(|_| AppError::Serialization(format!("Failed to add `{name}`.")))?;
    }
    if let Some(file) = picture {
        data.append_with_blob_and_filename(
            SignUpField::ProfilePicture.as_str(),
            file,
            &file.name(),
        )
        .map_err(|_| AppError::Serialization("Failed to attach the profile picture.".to_string()))?;
    }

    let response = post_form(&url, data).await?;
    if response.is_success() {
        tracing::info!(with_picture = picture.is_some(), "registration accepted");
        Ok(())
    } else {
        tracing::info!(status = response.status, "registration rejected");
        Err(AppError::Rejected(rejection_message(
            &response.body,
            REGISTER_FALLBACK_MESSAGE,
        )))
    }
}
