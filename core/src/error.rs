//! Error types for the newsfeed API client.
//!
//! # Design
//! Failures are data, not control flow: every verb returns `Err(ApiError)`
//! instead of panicking or collapsing into an empty-looking success.
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the resource does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `HttpError` with
//! the raw status code and body for debugging.

use std::fmt;

/// Errors returned by `RequestHandler` and `NewsFeedClient` methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested resource does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The request never completed: connect failure, timeout, DNS, or I/O.
    Transport(String),

    /// An endpoint template placeholder could not be resolved from the
    /// supplied path parameters.
    TemplateError(String),

    /// Query or body parameters could not be serialized to their wire form.
    SerializationError(String),

    /// The response body could not be converted into the expected model.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
            ApiError::TemplateError(msg) => {
                write!(f, "endpoint template: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
