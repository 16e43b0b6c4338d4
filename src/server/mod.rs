//! Blog HTTP server

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::cms::{ContentRepository, QueryOptions, RepositoryError};
use crate::config::BlogConfig;
use crate::content::{Neighbors, ReadingTime};
use crate::feed::Feed;
use crate::templates::TemplateRenderer;
use crate::Voyage;

/// Server state
struct ServerState {
    config: BlogConfig,
    repo: Arc<dyn ContentRepository>,
    renderer: TemplateRenderer,
}

/// Start the blog server
pub async fn start(voyage: &Voyage, ip: &str, port: u16) -> Result<()> {
    let repo = Arc::new(voyage.client()?);
    let state = Arc::new(ServerState {
        config: voyage.config.clone(),
        repo,
        renderer: TemplateRenderer::new()?,
    });

    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(listing_page))
        .route("/post/:uid", get(post_page))
        .route("/api/posts", get(load_more))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Listing page: first page of summaries plus the load-more cursor
async fn listing_page(State(state): State<Arc<ServerState>>) -> Response {
    let opts = listing_options(&state.config);

    let page = match state.repo.query_page(&opts).await {
        Ok(page) => page,
        Err(e) => return fetch_failure(&state, "listing fetch failed", e),
    };

    let feed = Feed::new(page);
    rendered(
        state
            .renderer
            .listing(&state.config, feed.loaded(), feed.cursor()),
        StatusCode::OK,
    )
}

#[derive(Debug, Deserialize)]
struct LoadMoreParams {
    cursor: String,
}

/// JSON endpoint backing the load-more button; follows the opaque
/// cursor and returns the next page as-is
async fn load_more(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<LoadMoreParams>,
) -> Response {
    match state.repo.fetch_url(&params.cursor).await {
        Ok(page) => Json(page).into_response(),
        Err(e) => {
            tracing::error!("cursor fetch failed: {}", e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

/// Post detail page
async fn post_page(
    State(state): State<Arc<ServerState>>,
    Path(uid): Path<String>,
) -> Response {
    let document = match state.repo.get_by_uid(&uid).await {
        Ok(document) => document,
        Err(e) => return fetch_failure(&state, "post fetch failed", e),
    };

    let Some(document) = document else {
        return rendered(
            state.renderer.not_found(&state.config, &uid),
            StatusCode::NOT_FOUND,
        );
    };

    let detail = document.to_detail();
    let reading = ReadingTime::estimate(&detail.content);

    let batch = match state
        .repo
        .query_page(&QueryOptions::new(state.config.neighbor_batch))
        .await
    {
        Ok(page) => page.results,
        Err(e) => return fetch_failure(&state, "neighbor fetch failed", e),
    };
    let neighbors = Neighbors::resolve(&batch, &detail.uid);

    rendered(
        state
            .renderer
            .post(&state.config, &detail, reading, &neighbors),
        StatusCode::OK,
    )
}

fn listing_options(config: &BlogConfig) -> QueryOptions {
    let type_name = &config.document_type;
    QueryOptions::new(config.page_size).with_fetch(vec![
        format!("{}.title", type_name),
        format!("{}.subtitle", type_name),
        format!("{}.author", type_name),
    ])
}

fn rendered(result: Result<String>, status: StatusCode) -> Response {
    match result {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("template render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn fetch_failure(state: &ServerState, context: &str, error: RepositoryError) -> Response {
    tracing::error!("{}: {}", context, error);
    rendered(
        state.renderer.error_page(&state.config),
        StatusCode::BAD_GATEWAY,
    )
}
