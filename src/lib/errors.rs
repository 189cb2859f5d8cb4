use thiserror::Error;

/// Errors surfaced to the user by forms and feature clients.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    /// The API refused the request and said why; shown verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn rejected_displays_server_message_verbatim() {
        let err = AppError::Rejected("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn transport_errors_carry_a_prefix() {
        let err = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(err.to_string(), "Timeout: Request timed out. Please try again.");

        let err = AppError::Network("Unable to reach the server".to_string());
        assert_eq!(err.to_string(), "Network error: Unable to reach the server");

        let err = AppError::Config("Failed to initialize request timeout.".to_string());
        assert_eq!(err.to_string(), "Config error: Failed to initialize request timeout.");
    }
}
