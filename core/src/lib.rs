//! Synchronous client for the newsfeed service.
//!
//! # Overview
//! Binds the service's endpoints (queued news, sent news, detail-by-seed,
//! queue deletion) to typed request/response models. `RequestHandler` owns
//! the generic marshalling: URL construction from endpoint templates,
//! query/body serialization, the blocking round trip, status checking, and
//! content-type-aware response decoding. `NewsFeedClient` is the thin
//! domain facade composed on top.
//!
//! # Design
//! - Every verb returns `Reply { status, value }` inside a `Result`, so no
//!   call path drops the status code or makes a failure look like an empty
//!   result.
//! - `ApiError` keeps transport and validation failures distinguishable.
//! - One blocking round trip per call; no retries, no caching, no
//!   connection strategy beyond what the agent provides.
//! - All calls log through the `log` facade at debug/info/error levels.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod handler;
pub mod http;
pub mod types;

pub use client::NewsFeedClient;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use handler::RequestHandler;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Payload, Reply};
pub use types::{NewsBrief, NewsDetail, QueueDeletePath, QueueList, SeedPath, SendNewsList};
