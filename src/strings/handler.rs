//! HTTP handlers for the string store API
//!
//! Provides 5 REST endpoints:
//! - POST   /strings                             — analyze and store a string
//! - GET    /strings                             — list with structured filters
//! - GET    /strings/filter-by-natural-language  — list via natural-language query
//! - GET    /strings/:string_value               — fetch one record by value
//! - DELETE /strings/:string_value               — delete one record by value
//!
//! Path values are percent-decoded by the `Path` extractor before hashing,
//! so clients address records by the original string, not its digest.

use crate::analysis;
use crate::error::{Error, Result};
use crate::query::QueryParser;
use crate::strings::filter::{ContainsMatch, StringFilters};
use crate::strings::store::StringStore;
use crate::strings::types::{
    InterpretedQuery, ListQuery, ListResponse, NaturalLanguageQuery, NaturalLanguageResponse,
    StringRecord,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Shared state for string store handlers
#[derive(Clone)]
pub struct StringsState {
    pub store: Arc<StringStore>,
    pub parser: Arc<QueryParser>,
}

/// Create the strings router with all REST endpoints.
///
/// The natural-language route is a static path and therefore takes
/// priority over the `:string_value` capture.
pub fn strings_router(state: StringsState) -> Router {
    Router::new()
        .route("/strings", post(create_string).get(list_strings))
        .route(
            "/strings/filter-by-natural-language",
            get(filter_by_natural_language),
        )
        .route(
            "/strings/:string_value",
            get(get_string).delete(delete_string),
        )
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /strings
///
/// The body is inspected as raw JSON rather than deserialized into a
/// typed request, because an absent `value` field and a present
/// non-string one must produce different statuses (400 vs 422).
async fn create_string(
    State(state): State<StringsState>,
    body: Option<Json<serde_json::Value>>,
) -> Result<impl IntoResponse> {
    let body = body.map(|Json(v)| v).unwrap_or(serde_json::Value::Null);

    let value = match body.get("value") {
        None | Some(serde_json::Value::Null) => {
            return Err(Error::Validation(
                "Missing \"value\" field in request body".to_string(),
            ))
        }
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(Error::InvalidType(
                "Invalid data type for \"value\" (must be string)".to_string(),
            ))
        }
    };

    let record = analysis::analyze(&value);
    if !state.store.try_insert(record.clone()).await {
        return Err(Error::Conflict(
            "String already exists in the system".to_string(),
        ));
    }

    tracing::debug!(id = %record.id, length = record.properties.length, "stored string");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/:string_value
async fn get_string(
    State(state): State<StringsState>,
    Path(string_value): Path<String>,
) -> Result<Json<StringRecord>> {
    let hash = analysis::sha256_hex(&string_value);
    state
        .store
        .get(&hash)
        .await
        .map(Json)
        .ok_or_else(|| Error::NotFound("String does not exist in the system".to_string()))
}

/// GET /strings
async fn list_strings(
    State(state): State<StringsState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    let filters = StringFilters::from_list_query(&params)?;

    let data: Vec<StringRecord> = state
        .store
        .values()
        .await
        .into_iter()
        .filter(|record| filters.matches(record, ContainsMatch::CaseSensitive))
        .collect();

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// GET /strings/filter-by-natural-language
async fn filter_by_natural_language(
    State(state): State<StringsState>,
    Query(params): Query<NaturalLanguageQuery>,
) -> Result<Json<NaturalLanguageResponse>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| Error::Validation("Missing query parameter".to_string()))?;

    let filters = state.parser.parse(&query)?;
    tracing::debug!(query = %query, ?filters, "interpreted natural-language query");

    let data: Vec<StringRecord> = state
        .store
        .values()
        .await
        .into_iter()
        .filter(|record| filters.matches(record, ContainsMatch::CaseInsensitive))
        .collect();

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters: filters,
        },
    }))
}

/// DELETE /strings/:string_value
async fn delete_string(
    State(state): State<StringsState>,
    Path(string_value): Path<String>,
) -> Result<StatusCode> {
    let hash = analysis::sha256_hex(&string_value);
    if state.store.remove(&hash).await.is_none() {
        return Err(Error::NotFound(
            "String does not exist in the system".to_string(),
        ));
    }

    tracing::debug!(hash = %hash, "deleted string");
    Ok(StatusCode::NO_CONTENT)
}
