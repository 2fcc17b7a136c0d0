//! Read-only HTTP API over the stored transaction list.
//!
//! GET /api/transactions?page=&limit=
//! GET /api/transactions/search?transaction_date=&credit=&transaction_details=&page=&limit=

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use saoke_core::{PageRequest, QueryError, SearchFilter, Transaction, paginate, search_page};
use saoke_store::{KeyValueSource, RedisStore, load};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone)]
struct AppState<S> {
    store: S,
    key: String,
}

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    page: Option<String>,
    limit: Option<String>,
    transaction_date: Option<String>,
    credit: Option<String>,
    transaction_details: Option<String>,
}

/// Empty query values (`?page=`) count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn page_request(page: Option<String>, limit: Option<String>) -> Result<PageRequest, QueryError> {
    PageRequest::parse(present(page).as_deref(), present(limit).as_deref())
}

fn query_error(e: QueryError) -> Response {
    let status = match e {
        QueryError::NoMatches => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, e.to_string()).into_response()
}

async fn fetch_all<S>(state: &AppState<S>) -> Result<Vec<Transaction>, Response>
where
    S: KeyValueSource + Clone + Send + 'static,
{
    let mut store = state.store.clone();
    let key = state.key.clone();
    let loaded = tokio::task::spawn_blocking(move || load(&mut store, &key)).await;
    match loaded {
        Ok(Ok(txns)) => Ok(txns),
        Ok(Err(e)) => {
            error!("loading transactions failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())
        }
        Err(e) => {
            error!("store task failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}

async fn list_transactions<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListParams>,
) -> Response
where
    S: KeyValueSource + Clone + Send + Sync + 'static,
{
    let req = match page_request(params.page, params.limit) {
        Ok(r) => r,
        Err(e) => return query_error(e),
    };
    let txns = match fetch_all(&state).await {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    match paginate(&txns, req) {
        Ok(page) => Json(page.to_vec()).into_response(),
        Err(e) => query_error(e),
    }
}

async fn search_transactions<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    S: KeyValueSource + Clone + Send + Sync + 'static,
{
    let req = match page_request(params.page, params.limit) {
        Ok(r) => r,
        Err(e) => return query_error(e),
    };
    // A credit that is not a number cannot match anything.
    let credit = match present(params.credit) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(_) => return query_error(QueryError::NoMatches),
        },
        None => None,
    };
    let filter = SearchFilter {
        transaction_date: present(params.transaction_date),
        credit,
        transaction_details: present(params.transaction_details),
    };

    let txns = match fetch_all(&state).await {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    match search_page(&txns, &filter, req) {
        Ok(page) => Json(page).into_response(),
        Err(e) => query_error(e),
    }
}

fn router<S>(store: S, key: String) -> Router
where
    S: KeyValueSource + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/transactions", get(list_transactions::<S>))
        .route("/api/transactions/search", get(search_transactions::<S>))
        .with_state(AppState { store, key })
}

pub async fn serve(addr: &str, store: RedisStore, key: String) -> Result<()> {
    let app = router(store, key);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("server listening on {}", addr);
    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
