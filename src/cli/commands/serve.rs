//! HTTP API server over the answering engine.
//!
//! Thin adapter: the endpoints map requests onto the engine's operations and
//! its errors onto status codes, nothing more.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::PodbotnikError;
use crate::rag::{AnswerEngine, Source};
use crate::registry::EpisodeSummary;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    engine: AnswerEngine,
}

/// Run the HTTP API server.
pub async fn run_serve(
    host: &str,
    port: u16,
    transcripts: Option<String>,
    settings: Settings,
) -> anyhow::Result<()> {
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let transcripts = match transcripts.map(PathBuf::from).or(settings.transcripts_file()) {
        Some(path) => path,
        None => {
            Output::error("No transcripts file. Pass --transcripts or set general.transcripts_file.");
            anyhow::bail!("no transcripts file configured");
        }
    };

    // Ingestion completes before the server starts taking requests.
    let engine = super::load_engine(&transcripts, None, &settings).await?;
    let episode_count = engine.list_episodes().len();

    let state = Arc::new(AppState { engine });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/episodes", get(list_episodes))
        .route("/ask", post(ask))
        .route("/search", post(search))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Podbotnik API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    Output::kv("Episodes loaded", &episode_count.to_string());
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Episodes", "GET  /episodes");
    Output::kv("Ask (RAG)", "POST /ask");
    Output::kv("Search", "POST /search");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct AskRequest {
    question: String,
    #[serde(default)]
    max_context_segments: usize,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
    sources: Vec<Source>,
    context_used: usize,
}

#[derive(Deserialize)]
struct SearchRequest {
    query: String,
    #[serde(default = "default_search_limit")]
    max_results: usize,
}

fn default_search_limit() -> usize {
    5
}

#[derive(Serialize)]
struct SearchResponse {
    sources: Vec<Source>,
    count: usize,
}

#[derive(Serialize)]
struct EpisodesResponse {
    episodes: Vec<EpisodeSummary>,
    count: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(e: PodbotnikError) -> axum::response::Response {
    let status = match &e {
        PodbotnikError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_episodes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let episodes = state.engine.list_episodes();
    Json(EpisodesResponse {
        count: episodes.len(),
        episodes,
    })
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> impl IntoResponse {
    match state
        .engine
        .answer(&req.question, req.max_context_segments)
        .await
    {
        Ok(result) => Json(AskResponse {
            answer: result.answer,
            sources: result.sources,
            context_used: result.context_used,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> impl IntoResponse {
    match state.engine.search(&req.query, req.max_results).await {
        Ok(hits) => {
            let sources = state.engine.sources_for(&hits);
            Json(SearchResponse {
                count: sources.len(),
                sources,
            })
            .into_response()
        }
        Err(e) => error_response(e),
    }
}
