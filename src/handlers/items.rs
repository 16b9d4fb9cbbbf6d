use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::{debug, info};

use crate::{
    error::AppResult,
    extract::{AppJson, AppPath, AppQuery},
    models::{CreateItem, Item, ListParams, UpdateItem},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let (skip, limit) = (params.skip(), params.limit());
    let page = state
        .store
        .read()
        .await
        .list(&params.filters(), skip, limit)?;

    debug!(
        count = page.items.len(),
        total = page.total,
        skip,
        limit,
        "Listed items"
    );

    Ok((
        StatusCode::OK,
        Json(json!({
            "items": page.items,
            "count": page.items.len(),
            "total": page.total,
            "skip": skip,
            "limit": limit,
        })),
    ))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let mut store = state.store.write().await;
    let item = store.create(payload)?;
    let live = store.len();
    drop(store);

    info!(id = item.id, name = %item.name, live, "Created item");

    Ok((StatusCode::CREATED, Json(item)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> AppResult<Json<Item>> {
    let item = state.store.read().await.get(id)?;
    debug!(id, "Fetched item");
    Ok(Json(item))
}

// ── Replace ───────────────────────────────────────────────────────────────────

pub async fn replace_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(payload): AppJson<CreateItem>,
) -> AppResult<Json<Item>> {
    let item = state.store.write().await.replace(id, payload)?;
    info!(id, name = %item.name, "Replaced item");
    Ok(Json(item))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(patch): AppJson<UpdateItem>,
) -> AppResult<Json<Item>> {
    let item = state.store.write().await.update(id, &patch)?;
    info!(id, "Updated item");
    Ok(Json(item))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> AppResult<StatusCode> {
    state.store.write().await.delete(id)?;
    info!(id, "Deleted item");
    Ok(StatusCode::NO_CONTENT)
}
