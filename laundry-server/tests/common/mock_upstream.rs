use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Router;
use laundry_server::configs::{Upstream, UpstreamHeaders};
use tokio::net::TcpListener;

pub const ROOM_PATH: &str = "/api/currentRoomData";

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
}

#[derive(Clone)]
struct UpstreamState {
    body: &'static str,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// Room status service stand-in answering every request with `body`.
pub struct MockUpstream {
    pub address: SocketAddr,
    pub seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockUpstream {
    pub async fn start(body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        Self::serve(listener, body)
    }

    pub fn serve(listener: TcpListener, body: &'static str) -> Self {
        let address = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route(ROOM_PATH, get(room_data))
            .with_state(UpstreamState {
                body,
                seen: seen.clone(),
            });

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { address, seen }
    }

    pub fn upstream(&self) -> Upstream {
        upstream_at(self.address)
    }
}

pub fn upstream_at(address: SocketAddr) -> Upstream {
    Upstream {
        url: format!("http://{address}{ROOM_PATH}"),
        school_desc_key: "405".to_string(),
        location: "1362511".to_string(),
        user_contact: "9789088494".to_string(),
        headers: UpstreamHeaders {
            accept: "application/json, text/plain, */*".to_string(),
            referer: "https://www.laundryview.com/home/405/1362511".to_string(),
            user_agent: "laundry-test".to_string(),
        },
    }
}

/// An address nothing listens on.
pub fn closed_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

async fn room_data(
    State(state): State<UpstreamState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> &'static str {
    state.seen.lock().unwrap().push(SeenRequest { query, headers });
    state.body
}
