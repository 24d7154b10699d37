//! Error types and handling for the Sahayta core

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Application-level error type for configuration and startup problems
#[derive(Error, Debug)]
pub enum SahaytaError {
    /// Configuration-related errors (missing credential, invalid settings)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// HTTP client construction errors
    #[error("HTTP client error: {message}")]
    Client { message: String },
}

impl SahaytaError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new HTTP client error
    pub fn client<S: Into<String>>(message: S) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SahaytaError::Config { .. } => {
                "Weather service is not configured. Please contact the operator.".to_string()
            }
            SahaytaError::Client { .. } => {
                "Unable to prepare the connection to external services.".to_string()
            }
        }
    }
}

/// Why a lookup produced no result.
///
/// Only used for logging; callers treat every cause the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundCause {
    /// The upstream answered but had no match for the query
    NoMatch,
    /// The request did not finish within the client timeout
    Timeout,
    /// Connection or protocol failure before a response arrived
    Transport(String),
    /// The upstream answered with a non-success status
    Status(u16),
    /// The body could not be decoded or lacked required fields
    Malformed(String),
}

impl NotFoundCause {
    /// Whether the upstream itself misbehaved, as opposed to simply having no match
    #[must_use]
    pub fn is_upstream_failure(&self) -> bool {
        !matches!(self, NotFoundCause::NoMatch)
    }
}

impl fmt::Display for NotFoundCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundCause::NoMatch => write!(f, "no match"),
            NotFoundCause::Timeout => write!(f, "request timed out"),
            NotFoundCause::Transport(e) => write!(f, "transport error: {e}"),
            NotFoundCause::Status(code) => write!(f, "upstream status {code}"),
            NotFoundCause::Malformed(e) => write!(f, "malformed response: {e}"),
        }
    }
}

/// Outcome of a geocoding or weather lookup that yielded nothing usable
#[derive(Error, Debug, Clone, PartialEq)]
#[error("No result for '{query}' ({cause})")]
pub struct NotFound {
    pub query: String,
    pub cause: NotFoundCause,
}

impl NotFound {
    pub fn new<S: Into<String>>(query: S, cause: NotFoundCause) -> Self {
        Self {
            query: query.into(),
            cause,
        }
    }

    /// Same text for every cause
    #[must_use]
    pub fn user_message(&self) -> String {
        format!(
            "Unable to fetch data for '{}'. Please check the location name.",
            self.query
        )
    }
}

/// Which of the user-supplied location inputs an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationField {
    Start,
    End,
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationField::Start => write!(f, "start"),
            LocationField::End => write!(f, "end"),
        }
    }
}

fn join_fields(fields: &[LocationField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures of route planning and single-location lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// One or both location names were empty after trimming
    #[error("Missing location input: {}", join_fields(.fields))]
    MissingInput { fields: Vec<LocationField> },

    /// One or both locations could not be geocoded
    #[error("Could not resolve location: {}", join_fields(.fields))]
    UnresolvedLocation { fields: Vec<LocationField> },
}

impl RouteError {
    /// Fields the error refers to, in input order
    #[must_use]
    pub fn fields(&self) -> &[LocationField] {
        match self {
            RouteError::MissingInput { fields } | RouteError::UnresolvedLocation { fields } => {
                fields
            }
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RouteError::MissingInput { fields } if fields.len() > 1 => {
                "Please enter both start and destination locations.".to_string()
            }
            RouteError::MissingInput { fields } => {
                format!("Please enter the {} location.", join_fields(fields))
            }
            RouteError::UnresolvedLocation { fields } if fields.len() > 1 => {
                "Could not locate either location. Please check the names.".to_string()
            }
            RouteError::UnresolvedLocation { fields } => format!(
                "Could not locate the {} location. Please check the name.",
                join_fields(fields)
            ),
        }
    }
}
