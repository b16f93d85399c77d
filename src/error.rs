use reqwest::StatusCode;

/// A fatal configuration problem detected before the poll loop starts.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {}", .0)]
    MissingVar(&'static str),
}

/// Anything that can go wrong inside a single poll cycle. Every variant is
/// caught at the loop boundary; none of these terminate the process.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Endpoint returned {}", .0)]
    Http(StatusCode),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("{}", .0)]
    Response(#[from] ResponseError),
    #[error("{}", .0)]
    Status(#[from] StatusError),
    #[error("{}", .0)]
    Send(#[from] SendError),
}

/// The response body decoded but does not have the expected shape.
#[derive(thiserror::Error, Debug)]
pub enum ResponseError {
    #[error("Response is not a JSON object")]
    NotAnObject,
    #[error("Response is missing the \"{}\" key", .0)]
    MissingKey(&'static str),
    #[error("Unexpected type for \"{}\": expected {}", .0, .1)]
    WrongType(&'static str, &'static str),
    #[error("Error parsing homework records: {}", .0)]
    Records(#[from] serde_json::Error),
}

/// A homework record that cannot be turned into a notification.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StatusError {
    #[error("Homework record is missing \"homework_name\"")]
    MissingName,
    #[error("Unrecognized homework status: {}", .0)]
    UnknownStatus(String),
}

/// Failure delivering a message to the chat. `BadRequest` is kept distinct
/// so callers can tell a rejected payload apart from transient delivery
/// problems.
#[derive(thiserror::Error, Debug)]
pub enum SendError {
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("Bad request: {}", .0)]
    BadRequest(String),
    #[error("Telegram API error: {}", .0)]
    Api(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_missing_var() {
        let error = ConfigError::MissingVar("PRACTICUM_TOKEN");

        assert_eq!(
            error.to_string(),
            "Missing required environment variable: PRACTICUM_TOKEN",
        );
    }

    #[test]
    fn displays_http_status() {
        let error = Error::Http(StatusCode::SERVICE_UNAVAILABLE);

        assert_eq!(error.to_string(), "Endpoint returned 503 Service Unavailable");
    }

    #[test]
    fn wraps_status_error() {
        let error = Error::from(StatusError::UnknownStatus("staged".into()));

        assert_eq!(error.to_string(), "Unrecognized homework status: staged");
    }
}
