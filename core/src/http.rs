//! HTTP wire types shared between request building and dispatch.
//!
//! # Design
//! Requests and responses are plain data with owned fields. `RequestHandler`
//! builds an `HttpRequest` value, executes it on its agent, and interprets
//! the resulting `HttpResponse`; keeping both sides as values makes request
//! construction and response decoding testable without a socket.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `RequestHandler` from an `Endpoint` plus the configured headers;
/// `url` is the fully joined target, `query` the flattened pairs appended at
/// dispatch time.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Value of the `Content-Type` header, if the server sent one.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the body is declared as JSON. Prefix match, so parameterized
    /// values like `application/json; charset=utf-8` count.
    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.trim_start().starts_with("application/json"))
    }
}

/// A response body in its parsed-but-unvalidated form.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The server declared JSON and the body parsed as JSON.
    Json(serde_json::Value),
    /// Any other content type; the body is passed through untouched.
    Text(String),
}

/// Uniform success envelope: the HTTP status together with the decoded
/// value. Every verb returns a `Reply` so no call path drops the status.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: u16,
    pub value: T,
}
