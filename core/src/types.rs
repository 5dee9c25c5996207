//! Domain models for the newsfeed API.
//!
//! # Design
//! These types mirror the service's payloads but are defined independently
//! of the mock-server crate; integration tests catch schema drift.
//! Path-parameter records exist only to fill endpoint templates — they are
//! never sent as a body or query string.

use serde::{Deserialize, Serialize};

/// One queued or already-sent item, as listed by the by-hours feeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsBrief {
    pub seed: String,
    pub channel: String,
    pub id_post: i64,
}

/// Body of `queue/get-news/by/hours`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueList {
    pub queue: Vec<NewsBrief>,
}

/// Body of `send-news/get-news/by/hours`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendNewsList {
    pub send: Vec<NewsBrief>,
}

/// Body of `all-news/detail-by-seed/{seed}`: the full record for one item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsDetail {
    pub seed: String,
    pub channel: String,
    pub content: String,
    pub id_post: i64,
    pub outlinks: Vec<String>,
}

/// Path parameters for `all-news/detail-by-seed/{seed}`.
#[derive(Debug, Clone, Serialize)]
pub struct SeedPath {
    pub seed: String,
}

/// Path parameters for `queue/delete-news/{channel}/{id_post}`.
#[derive(Debug, Clone, Serialize)]
pub struct QueueDeletePath {
    pub channel: String,
    pub id_post: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_roundtrips_through_json() {
        let detail = NewsDetail {
            seed: "seed123".to_string(),
            channel: "tech".to_string(),
            content: "body text".to_string(),
            id_post: 42,
            outlinks: vec!["https://example.com/a".to_string()],
        };
        let json = serde_json::to_string(&detail).unwrap();
        let back: NewsDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detail);
    }

    #[test]
    fn detail_rejects_missing_id_post() {
        let result: Result<NewsDetail, _> = serde_json::from_str(
            r#"{"seed":"s","channel":"c","content":"x","outlinks":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn queue_list_parses_from_queue_key() {
        let list: QueueList = serde_json::from_str(
            r#"{"queue":[{"seed":"s1","channel":"tech","id_post":1}]}"#,
        )
        .unwrap();
        assert_eq!(list.queue.len(), 1);
        assert_eq!(list.queue[0].seed, "s1");
    }

    #[test]
    fn send_list_parses_from_send_key() {
        let list: SendNewsList =
            serde_json::from_str(r#"{"send":[{"seed":"s2","channel":"eco","id_post":2}]}"#)
                .unwrap();
        assert_eq!(list.send.len(), 1);
        assert_eq!(list.send[0].id_post, 2);
    }

    #[test]
    fn seed_path_serializes_to_one_field() {
        let json = serde_json::to_value(SeedPath {
            seed: "seed123".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"seed": "seed123"}));
    }
}
