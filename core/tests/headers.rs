//! Configured headers and query pairs on the wire.
//!
//! # Design
//! Boots a small echo router and asserts what actually arrives at the
//! server: merged headers (later `set_headers` calls overwrite, earlier
//! keys survive) and query strings with `None` fields omitted.

use axum::{extract::RawQuery, http::HeaderMap, routing::get, Json, Router};
use newsfeed_core::{Endpoint, Payload, RequestHandler};

async fn echo_headers(headers: HeaderMap) -> Json<serde_json::Value> {
    let mut out = serde_json::Map::new();
    for (name, value) in &headers {
        if let Ok(text) = value.to_str() {
            out.insert(
                name.as_str().to_string(),
                serde_json::Value::String(text.to_string()),
            );
        }
    }
    Json(serde_json::Value::Object(out))
}

async fn echo_query(RawQuery(query): RawQuery) -> String {
    query.unwrap_or_default()
}

fn start_echo_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let app = Router::new()
                .route("/echo-headers", get(echo_headers))
                .route("/echo-query", get(echo_query));
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn merged_headers_reach_the_wire() {
    let addr = start_echo_server();
    let mut handler = RequestHandler::with_base_url(&format!("http://{addr}"));

    handler.set_headers([("x-app".to_string(), "newsfeed".to_string())]);
    handler.set_headers([
        ("x-token".to_string(), "abc".to_string()),
        ("x-app".to_string(), "newsfeed-v2".to_string()),
    ]);

    let reply = handler.get_raw(&Endpoint::new("echo-headers")).unwrap();
    let Payload::Json(echoed) = reply.value else {
        panic!("expected JSON echo body");
    };
    assert_eq!(echoed["x-token"], "abc");
    assert_eq!(echoed["x-app"], "newsfeed-v2");
}

#[test]
fn query_pairs_reach_the_wire_with_none_fields_omitted() {
    let addr = start_echo_server();
    let handler = RequestHandler::with_base_url(&format!("http://{addr}"));

    #[derive(serde::Serialize)]
    struct FeedQuery {
        hours: u32,
        channel: Option<String>,
    }

    let endpoint = Endpoint::new("echo-query")
        .query(&FeedQuery {
            hours: 5,
            channel: None,
        })
        .unwrap();
    let reply = handler.get_raw(&endpoint).unwrap();
    assert_eq!(reply.value, Payload::Text("hours=5".to_string()));
}

#[test]
fn endpoints_without_query_params_send_no_query_string() {
    let addr = start_echo_server();
    let handler = RequestHandler::with_base_url(&format!("http://{addr}"));

    let reply = handler.get_raw(&Endpoint::new("echo-query")).unwrap();
    assert_eq!(reply.value, Payload::Text(String::new()));
}
