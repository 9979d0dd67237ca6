#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use axum_test::TestServer;
use botanica_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, ServerArgs},
};
use botanica_core::domain::common::DEFAULT_BILLING_PHRASES;
use serde_json::{Value, json};
use test_context::AsyncTestContext;

#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Status(u16, String),
}

#[derive(Default)]
struct StubState {
    replies: Mutex<HashMap<String, StubReply>>,
    hits: Mutex<Vec<String>>,
}

/// In-process stand-in for the Gemini `generateContent` endpoint.
pub struct GeminiStub {
    base_url: String,
    state: Arc<StubState>,
}

impl GeminiStub {
    pub async fn spawn() -> Self {
        let state = Arc::new(StubState::default());
        let app = Router::new()
            .route("/v1beta/models/{*rest}", post(generate_content))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1beta"),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn reply(&self, model: &str, reply: StubReply) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(model.to_string(), reply);
    }

    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }
}

async fn generate_content(
    State(state): State<Arc<StubState>>,
    Path(rest): Path<String>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let model = rest
        .strip_suffix(":generateContent")
        .unwrap_or(&rest)
        .to_string();
    state.hits.lock().unwrap().push(model.clone());

    let reply = state.replies.lock().unwrap().get(&model).cloned();
    match reply {
        Some(StubReply::Text(text)) => (
            StatusCode::OK,
            Json(json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            })),
        ),
        Some(StubReply::Status(code, message)) => (
            StatusCode::from_u16(code).unwrap(),
            Json(json!({ "error": { "code": code, "message": message } })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": { "code": 404, "message": format!("models/{model} is not found") }
            })),
        ),
    }
}

pub fn test_args(api_key: Option<&str>, base_url: &str, models: &[&str]) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            metrics: false,
        },
        llm: LlmArgs {
            gemini_api_key: api_key.map(str::to_string),
            gemini_base_url: base_url.to_string(),
            gemini_models: models.iter().map(|m| m.to_string()).collect(),
            request_timeout_secs: 5,
            probe_timeout_secs: 5,
            billing_phrases: DEFAULT_BILLING_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

pub async fn test_server(args: Args) -> TestServer {
    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

pub fn recipe_json(product_name: &str) -> String {
    json!({
        "productName": product_name,
        "ingredients": [
            { "name": "Honey", "amount": "1 tbsp", "benefit": "Draws in moisture" },
            { "name": "Rose water", "amount": "2 tbsp", "benefit": "Balances oil" }
        ],
        "preparation": ["Warm the honey", "Stir in the rose water"],
        "application": "Smooth over clean skin and rest for ten minutes.",
        "frequency": "Once a week",
        "warnings": "Patch test first."
    })
    .to_string()
}

pub fn curly_oily_profile() -> Value {
    json!({
        "hairType": "Curly",
        "skinType": "Oily",
        "condition": "Frizz",
        "goal": "Shine & glow",
        "detailedCondition": "",
        "personalGoals": ""
    })
}

pub struct GeminiContext {
    pub stub: GeminiStub,
}

impl GeminiContext {
    pub async fn server(&self, models: &[&str]) -> TestServer {
        test_server(test_args(Some("test-key"), self.stub.base_url(), models)).await
    }
}

impl AsyncTestContext for GeminiContext {
    async fn setup() -> Self {
        Self {
            stub: GeminiStub::spawn().await,
        }
    }
}
