//! Item listing and category filter endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, header};
use catalog::{ItemCollection, ItemSource, load_or_empty};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ItemSource> {
    pub items: S,
}

// -- Request types --

/// Body of `POST /items/filter`.
#[derive(Debug, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub category: Option<Value>,
}

impl FilterRequest {
    /// Parses a raw request body.
    ///
    /// Bodies without a JSON content type and empty JSON bodies are read as
    /// `{}`, so they select the unfiltered collection.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self, ApiError> {
        if body.is_empty() || !has_json_content_type(headers) {
            return Ok(Self::default());
        }
        let Json(req) = Json::<Self>::from_bytes(body)?;
        Ok(req)
    }

    /// Returns the category to filter by, or `None` when the field is
    /// absent or falsy (`null`, `false`, `0`, `""`).
    pub fn selected_category(&self) -> Option<&Value> {
        self.category.as_ref().filter(|value| is_truthy(value))
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// -- Handlers --

/// GET /items — return the full item collection.
#[tracing::instrument(skip(state))]
pub async fn list<S: ItemSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ItemCollection> {
    metrics::counter!("items_requests_total", "endpoint" => "list").increment(1);
    Json(load_or_empty(&state.items).await)
}

/// POST /items/filter — return the items whose `category` matches the
/// request's `category` exactly.
///
/// A request without a JSON content type, or with an empty body, is treated
/// as `{}`.
#[tracing::instrument(skip(state, headers, body))]
pub async fn filter<S: ItemSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ItemCollection>, ApiError> {
    metrics::counter!("items_requests_total", "endpoint" => "filter").increment(1);

    let req = FilterRequest::from_body(&headers, &body?)?;

    let collection = load_or_empty(&state.items).await;

    let Some(category) = req.selected_category() else {
        return Ok(Json(collection));
    };

    let filtered = collection.filter_by_category(category);
    tracing::debug!(%category, matched = filtered.len(), "filtered items");
    Ok(Json(filtered))
}
