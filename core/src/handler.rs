//! Generic transport wrapper: one blocking HTTP call per verb, normalized
//! into `Result<Reply<_>, ApiError>`.
//!
//! # Design
//! `RequestHandler` owns a `ureq::Agent` plus a `ClientConfig`. Each verb
//! resolves the URL, applies the configured headers, dispatches the call,
//! checks the status (2xx passes, 404 becomes `NotFound`, anything else
//! `HttpError`), and decodes the body by declared content type. The typed
//! variants additionally validate the decoded JSON into the response model.
//! Status interpretation is done here, not by the agent — automatic
//! status-as-error is disabled so 4xx/5xx bodies stay readable.
//!
//! One round trip per call; no retries, no caching. Configuration mutation
//! takes `&mut self`, so concurrent callers must synchronize externally.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use ureq::Agent;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Payload, Reply};

/// Synchronous, blocking HTTP wrapper around a configured agent.
#[derive(Clone)]
pub struct RequestHandler {
    agent: Agent,
    config: ClientConfig,
}

impl RequestHandler {
    pub fn new(config: ClientConfig) -> Self {
        let agent = build_agent(config.timeout);
        Self { agent, config }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ClientConfig::new(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Merge `headers` into the configured set; existing keys are
    /// overwritten, new keys added. There is no removal operation.
    pub fn set_headers(&mut self, headers: impl IntoIterator<Item = (String, String)>) {
        self.config.merge_headers(headers);
    }

    /// Replace the request timeout. The timeout lives in the agent config,
    /// so the agent is rebuilt; subsequent calls use the new value.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.config.timeout = timeout;
        self.agent = build_agent(timeout);
    }

    /// GET `endpoint`, validated into `T`.
    pub fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<Reply<T>, ApiError> {
        let reply = self.get_raw(endpoint)?;
        let value = validate("GET", endpoint.path(), reply.value)?;
        Ok(Reply {
            status: reply.status,
            value,
        })
    }

    /// GET `endpoint` without a response model; the payload comes back as
    /// parsed JSON or raw text, by content type.
    pub fn get_raw(&self, endpoint: &Endpoint) -> Result<Reply<Payload>, ApiError> {
        self.run(HttpMethod::Get, endpoint, None)
    }

    /// POST `body` as JSON, validated into `T`.
    pub fn post<B, T>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<Reply<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let reply = self.post_raw(endpoint, body)?;
        let value = validate("POST", endpoint.path(), reply.value)?;
        Ok(Reply {
            status: reply.status,
            value,
        })
    }

    /// POST `body` as JSON without a response model.
    pub fn post_raw<B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<Reply<Payload>, ApiError> {
        let body = match body {
            Some(data) => match serde_json::to_string(data) {
                Ok(text) => Some(text),
                Err(error) => {
                    log::error!("POST {} body serialization failed: {error}", endpoint.path());
                    return Err(ApiError::SerializationError(error.to_string()));
                }
            },
            None => None,
        };
        self.run(HttpMethod::Post, endpoint, body)
    }

    /// DELETE `endpoint`. The response body is never schema-checked.
    pub fn delete(&self, endpoint: &Endpoint) -> Result<Reply<Payload>, ApiError> {
        self.run(HttpMethod::Delete, endpoint, None)
    }

    fn run(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        body: Option<String>,
    ) -> Result<Reply<Payload>, ApiError> {
        let verb = method.as_str();
        log::debug!("{verb} {} starting", endpoint.path());

        let request = self.build_request(method, endpoint, body);
        log::debug!(
            "{verb} {} query={:?} body={:?}",
            request.url,
            request.query,
            request.body
        );

        match self.execute(&request) {
            Ok(reply) => {
                log::info!("{verb} {} succeeded [status: {}]", request.url, reply.status);
                Ok(reply)
            }
            Err(error) => {
                log::error!("{verb} {} failed: {error}", request.url);
                Err(error)
            }
        }
    }

    fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        body: Option<String>,
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: endpoint.url(&self.config.base_url),
            query: endpoint.query_pairs().to_vec(),
            headers: self
                .config
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            body,
        }
    }

    fn execute(&self, request: &HttpRequest) -> Result<Reply<Payload>, ApiError> {
        let response = self.dispatch(request)?;
        log::debug!("response body - {}", response.body);
        check_status(&response)?;
        let payload = decode(&response)?;
        Ok(Reply {
            status: response.status,
            value: payload,
        })
    }

    /// Perform the round trip and capture the response as plain data.
    fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match request.method {
            HttpMethod::Get | HttpMethod::Delete => {
                let mut builder = match request.method {
                    HttpMethod::Get => self.agent.get(&request.url),
                    _ => self.agent.delete(&request.url),
                };
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                for (key, value) in &request.query {
                    builder = builder.query(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                for (key, value) in &request.query {
                    builder = builder.query(key.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder
                        .content_type("application/json")
                        .send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|error| ApiError::Transport(error.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|error| ApiError::Transport(error.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn build_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Parse the body by declared content type: JSON when the server says so,
/// raw text otherwise. A JSON-declared body that does not parse is an error.
fn decode(response: &HttpResponse) -> Result<Payload, ApiError> {
    if response.is_json() {
        serde_json::from_str(&response.body)
            .map(Payload::Json)
            .map_err(|error| ApiError::DeserializationError(error.to_string()))
    } else {
        Ok(Payload::Text(response.body.clone()))
    }
}

/// Convert a decoded payload into the response model. A text payload can
/// never satisfy a model, so it fails here rather than crashing downstream.
fn validate<T: DeserializeOwned>(verb: &str, path: &str, payload: Payload) -> Result<T, ApiError> {
    let result = match payload {
        Payload::Json(value) => serde_json::from_value(value)
            .map_err(|error| ApiError::DeserializationError(error.to_string())),
        Payload::Text(_) => Err(ApiError::DeserializationError(
            "expected a JSON body for the response model, got text".to_string(),
        )),
    };
    if let Err(error) = &result {
        log::error!("{verb} {path} response validation failed: {error}");
    }
    result
}
