use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsDetail {
    pub seed: String,
    pub channel: String,
    pub content: String,
    pub id_post: i64,
    pub outlinks: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsBrief {
    pub seed: String,
    pub channel: String,
    pub id_post: i64,
}

impl From<&NewsDetail> for NewsBrief {
    fn from(detail: &NewsDetail) -> Self {
        Self {
            seed: detail.seed.clone(),
            channel: detail.channel.clone(),
            id_post: detail.id_post,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueueList {
    pub queue: Vec<NewsBrief>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendNewsList {
    pub send: Vec<NewsBrief>,
}

/// In-memory news store, one bucket per feed, keyed by seed.
#[derive(Debug, Default)]
pub struct Store {
    pub queue: HashMap<String, NewsDetail>,
    pub send: HashMap<String, NewsDetail>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_state(Db::default())
}

pub fn app_with_state(db: Db) -> Router {
    Router::new()
        .route("/queue/get-news/by/hours", get(list_queue))
        .route("/send-news/get-news/by/hours", get(list_send))
        .route("/all-news/detail-by-seed/{seed}", get(detail_by_seed))
        .route(
            "/queue/delete-news/{channel}/{id_post}",
            delete(delete_from_queue),
        )
        .route("/queue/add-news", post(add_news))
        .route("/health", get(health))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_queue(State(db): State<Db>) -> Json<QueueList> {
    let store = db.read().await;
    Json(QueueList {
        queue: store.queue.values().map(NewsBrief::from).collect(),
    })
}

async fn list_send(State(db): State<Db>) -> Json<SendNewsList> {
    let store = db.read().await;
    Json(SendNewsList {
        send: store.send.values().map(NewsBrief::from).collect(),
    })
}

async fn detail_by_seed(
    State(db): State<Db>,
    Path(seed): Path<String>,
) -> Result<Json<NewsDetail>, StatusCode> {
    let store = db.read().await;
    store
        .queue
        .get(&seed)
        .or_else(|| store.send.get(&seed))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_from_queue(
    State(db): State<Db>,
    Path((channel, id_post)): Path<(String, i64)>,
) -> Result<Json<NewsBrief>, StatusCode> {
    let mut store = db.write().await;
    let seed = store
        .queue
        .iter()
        .find(|(_, detail)| detail.channel == channel && detail.id_post == id_post)
        .map(|(seed, _)| seed.clone())
        .ok_or(StatusCode::NOT_FOUND)?;
    let removed = store.queue.remove(&seed).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(NewsBrief::from(&removed)))
}

async fn add_news(
    State(db): State<Db>,
    Json(input): Json<NewsDetail>,
) -> (StatusCode, Json<NewsBrief>) {
    let brief = NewsBrief::from(&input);
    db.write().await.queue.insert(input.seed.clone(), input);
    (StatusCode::CREATED, Json(brief))
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> NewsDetail {
        NewsDetail {
            seed: "seed123".to_string(),
            channel: "tech".to_string(),
            content: "body text".to_string(),
            id_post: 42,
            outlinks: vec!["https://example.com/a".to_string()],
        }
    }

    #[test]
    fn detail_serializes_expected_fields() {
        let json = serde_json::to_value(detail()).unwrap();
        assert_eq!(json["seed"], "seed123");
        assert_eq!(json["channel"], "tech");
        assert_eq!(json["id_post"], 42);
        assert_eq!(json["outlinks"][0], "https://example.com/a");
    }

    #[test]
    fn brief_keeps_queue_identity() {
        let brief = NewsBrief::from(&detail());
        assert_eq!(brief.seed, "seed123");
        assert_eq!(brief.channel, "tech");
        assert_eq!(brief.id_post, 42);
    }

    #[test]
    fn queue_list_serializes_under_queue_key() {
        let json = serde_json::to_value(QueueList {
            queue: vec![NewsBrief::from(&detail())],
        })
        .unwrap();
        assert_eq!(json["queue"][0]["seed"], "seed123");
    }

    #[test]
    fn send_list_serializes_under_send_key() {
        let json = serde_json::to_value(SendNewsList {
            send: vec![NewsBrief::from(&detail())],
        })
        .unwrap();
        assert_eq!(json["send"][0]["seed"], "seed123");
    }

    #[test]
    fn detail_rejects_missing_seed() {
        let result: Result<NewsDetail, _> = serde_json::from_str(
            r#"{"channel":"tech","content":"x","id_post":1,"outlinks":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn detail_roundtrips_through_json() {
        let json = serde_json::to_string(&detail()).unwrap();
        let back: NewsDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detail());
    }
}
