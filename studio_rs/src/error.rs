//! Error types for the contact flow and configuration.

use std::time::Duration;

use thiserror::Error;

use crate::contact::FormIssue;

/// Why a single delivery attempt did not succeed.
///
/// Every variant is surfaced to the visitor as the same generic failure
/// notice; the distinction only reaches the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The backend answered with a non-2xx status.
    #[error("backend rejected the message with HTTP {status}")]
    Rejected { status: u16 },

    /// The request could not be sent or the connection broke.
    #[error("transport failure: {0}")]
    Transport(String),

    /// No response within the configured request timeout.
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// The form could not be serialized.
    #[error("could not encode contact form: {0}")]
    Encode(String),
}

/// Why a submission was refused before any request was issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Another submission of the same form is still in flight.
    #[error("a submission is already in flight")]
    InFlight,

    /// Required fields are empty or the email is malformed.
    #[error("form is incomplete: {}", describe_issues(.0))]
    Invalid(Vec<FormIssue>),

    /// A completion arrived while no submission was in flight.
    #[error("no submission is in flight")]
    NotSubmitting,
}

fn describe_issues(issues: &[FormIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Problems resolving the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("backend URL is not configured (set STUDIO_BACKEND_URL or --backend-url)")]
    MissingBackendUrl,

    #[error("backend URL `{0}` must start with http:// or https://")]
    InvalidBackendUrl(String),

    #[error("invalid request timeout `{0}` (expected milliseconds)")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
}
