use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::any;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use winewise_web::ai_gateway::{AiGatewayClient, DEFAULT_MODEL};
use winewise_web::catalog::CatalogClient;
use winewise_web::state::AppState;

/// An in-process HTTP server standing in for the wine API or the AI gateway.
/// Serves canned responses by path and counts every request it receives.
pub struct FakeUpstream {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

struct UpstreamState {
    responses: HashMap<String, (StatusCode, Value)>,
    hits: Arc<AtomicUsize>,
}

async fn serve_canned(
    State(state): State<Arc<UpstreamState>>,
    Path(path): Path<String>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    match state.responses.get(&format!("/{path}")) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response(),
    }
}

pub async fn spawn_upstream(responses: Vec<(&str, StatusCode, Value)>) -> FakeUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = Arc::new(UpstreamState {
        responses: responses
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body)))
            .collect(),
        hits: hits.clone(),
    });

    let app = Router::new()
        .route("/*path", any(serve_canned))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        base_url: format!("http://{addr}"),
        hits,
    }
}

/// All six category endpoints, empty by default, with selected paths
/// overridden.
pub fn category_routes(
    overrides: Vec<(&'static str, StatusCode, Value)>,
) -> Vec<(&'static str, StatusCode, Value)> {
    let mut routes: HashMap<&'static str, (StatusCode, Value)> =
        ["/reds", "/whites", "/sparkling", "/rose", "/dessert", "/port"]
            .into_iter()
            .map(|path| (path, (StatusCode::OK, json!([]))))
            .collect();

    for (path, status, body) in overrides {
        routes.insert(path, (status, body));
    }

    routes
        .into_iter()
        .map(|(path, (status, body))| (path, status, body))
        .collect()
}

pub fn raw_wine(
    id: u32,
    name: &str,
    winery: &str,
    location: &str,
    average: Value,
    reviews: Value,
) -> Value {
    json!({
        "id": id,
        "wine": name,
        "winery": winery,
        "rating": {"average": average, "reviews": reviews},
        "location": location,
        "image": format!("https://images.example.com/wine-{id}.jpg"),
    })
}

/// The gateway's chat-completions envelope around one reply text.
pub fn gateway_reply(content: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

fn unroutable_catalog() -> CatalogClient {
    CatalogClient::new("http://127.0.0.1:9".to_string())
}

fn unroutable_gateway() -> AiGatewayClient {
    AiGatewayClient::new(
        "http://127.0.0.1:9".to_string(),
        "test_api_key".to_string(),
        DEFAULT_MODEL.to_string(),
    )
}

/// App state whose catalog client points at the fake wine API.
pub fn catalog_state(wine_api: &FakeUpstream) -> Arc<AppState> {
    Arc::new(AppState {
        catalog: CatalogClient::new(wine_api.base_url.clone()),
        ai: unroutable_gateway(),
    })
}

/// App state with a custom catalog client (for cache-duration overrides).
pub fn catalog_state_with(catalog: CatalogClient) -> Arc<AppState> {
    Arc::new(AppState {
        catalog,
        ai: unroutable_gateway(),
    })
}

/// App state whose AI client points at the fake gateway.
pub fn sommelier_state(gateway: &FakeUpstream) -> Arc<AppState> {
    Arc::new(AppState {
        catalog: unroutable_catalog(),
        ai: AiGatewayClient::new(
            format!("{}/v1/chat/completions", gateway.base_url),
            "test_api_key".to_string(),
            DEFAULT_MODEL.to_string(),
        ),
    })
}
