//! Domain bindings for the newsfeed API.
//!
//! # Design
//! `NewsFeedClient` composes a `RequestHandler` instead of extending it:
//! the generic verbs stay on the handler (reachable through `handler()`),
//! and the domain type exposes only the fixed endpoint set. Each binding
//! pairs an endpoint template with its path-parameter record and response
//! model; the `fetch_*` methods carry the status code, the bare-named
//! conveniences drop it.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::handler::RequestHandler;
use crate::http::{Payload, Reply};
use crate::types::{NewsDetail, QueueDeletePath, QueueList, SeedPath, SendNewsList};

const SEND_NEWS_BY_HOURS: &str = "send-news/get-news/by/hours";
const QUEUE_BY_HOURS: &str = "queue/get-news/by/hours";
const DETAIL_BY_SEED: &str = "all-news/detail-by-seed/{seed}";
const DELETE_BY_QUEUE: &str = "queue/delete-news/{channel}/{id_post}";

/// Typed accessors for the newsfeed resources.
#[derive(Clone)]
pub struct NewsFeedClient {
    handler: RequestHandler,
}

impl NewsFeedClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            handler: RequestHandler::new(config),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ClientConfig::new(base_url))
    }

    /// The underlying transport wrapper, for callers that need the generic
    /// verbs or raw payloads.
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    pub fn set_headers(&mut self, headers: impl IntoIterator<Item = (String, String)>) {
        self.handler.set_headers(headers);
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.handler.set_timeout(timeout);
    }

    /// News sent over the recent hours window, with the response status.
    pub fn fetch_send_news(&self) -> Result<Reply<SendNewsList>, ApiError> {
        self.handler.get(&Endpoint::new(SEND_NEWS_BY_HOURS))
    }

    /// News still queued over the recent hours window, with the status.
    pub fn fetch_queue(&self) -> Result<Reply<QueueList>, ApiError> {
        self.handler.get(&Endpoint::new(QUEUE_BY_HOURS))
    }

    /// Full record for one item, looked up by its seed.
    pub fn fetch_detail_by_seed(&self, seed: &str) -> Result<Reply<NewsDetail>, ApiError> {
        let params = SeedPath {
            seed: seed.to_string(),
        };
        self.handler
            .get(&Endpoint::with_path(DETAIL_BY_SEED, &params)?)
    }

    /// Remove one item from the queue by channel and post id. The response
    /// body is returned as-is, never schema-checked.
    pub fn delete_queued(&self, channel: &str, id_post: i64) -> Result<Reply<Payload>, ApiError> {
        let params = QueueDeletePath {
            channel: channel.to_string(),
            id_post,
        };
        self.handler
            .delete(&Endpoint::with_path(DELETE_BY_QUEUE, &params)?)
    }

    /// `fetch_send_news` without the status code.
    pub fn send_news(&self) -> Result<SendNewsList, ApiError> {
        self.fetch_send_news().map(|reply| reply.value)
    }

    /// `fetch_queue` without the status code.
    pub fn queue(&self) -> Result<QueueList, ApiError> {
        self.fetch_queue().map(|reply| reply.value)
    }

    /// `fetch_detail_by_seed` without the status code.
    pub fn detail_by_seed(&self, seed: &str) -> Result<NewsDetail, ApiError> {
        self.fetch_detail_by_seed(seed).map(|reply| reply.value)
    }
}
