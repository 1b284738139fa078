//! HTTP routes.
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | `POST` | `/v1.0` | search result page |
//! | `GET` | `/v1.0/index?filter=` | sorted index names |
//! | `GET` | `/v1.0/criteria?index=` | filterable criteria |
//! | `GET` | `/v1.0/resultproperties?index=` | result property paths |

use std::collections::BTreeSet;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query as QueryParams, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use sift_core::{Criteria, Query, SearchResult};

use crate::auth::BearerToken;
use crate::error::{Error, Result};
use crate::server::AppState;

/// API version prefix.
pub const API_PREFIX: &str = "/v1.0";

/// Index pattern used when none is given.
const MATCH_ALL_INDICES: &str = "*";

/// Parameters of the index listing.
#[derive(Debug, Default, Deserialize)]
pub struct IndexFilter {
    /// Wildcard over index names.
    pub filter: Option<String>,
}

/// Parameters of the introspection endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct IndexName {
    /// Substring of the index names to include.
    pub index: Option<String>,
}

impl IndexName {
    /// `*name*`, or every index when no name is given.
    pub fn pattern(&self) -> String {
        match self.index.as_deref() {
            Some(name) if !name.is_empty() => format!("*{name}*"),
            _ => MATCH_ALL_INDICES.to_string(),
        }
    }
}

/// Build the router for all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(API_PREFIX, post(search))
        .route(&format!("{API_PREFIX}/index"), get(indices))
        .route(&format!("{API_PREFIX}/criteria"), get(criteria))
        .route(&format!("{API_PREFIX}/resultproperties"), get(result_properties))
        .with_state(state)
}

async fn search(
    State(state): State<AppState>,
    token: BearerToken,
    body: std::result::Result<Json<Query>, JsonRejection>,
) -> Result<Json<SearchResult>> {
    let Json(query) = body.map_err(|rejection| Error::InvalidBody {
        status: rejection.status().as_u16(),
        message: rejection.body_text(),
    })?;
    tracing::debug!(index = %query.index_name, filters = query.filter.len(), "search");
    let result = state.service.execute_search(&query, token.as_str()).await?;
    Ok(Json(result))
}

async fn indices(
    State(state): State<AppState>,
    token: BearerToken,
    QueryParams(params): QueryParams<IndexFilter>,
) -> Result<Json<BTreeSet<String>>> {
    let pattern = params
        .filter
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| MATCH_ALL_INDICES.to_string());
    tracing::debug!(%pattern, "list indices");
    Ok(Json(state.service.get_indices(token.as_str(), &pattern).await?))
}

async fn criteria(
    State(state): State<AppState>,
    token: BearerToken,
    QueryParams(params): QueryParams<IndexName>,
) -> Result<Json<Vec<Criteria>>> {
    let pattern = params.pattern();
    tracing::debug!(%pattern, "list criteria");
    Ok(Json(state.service.get_criteria(token.as_str(), &pattern).await?))
}

async fn result_properties(
    State(state): State<AppState>,
    token: BearerToken,
    QueryParams(params): QueryParams<IndexName>,
) -> Result<Json<BTreeSet<String>>> {
    let pattern = params.pattern();
    tracing::debug!(%pattern, "list result properties");
    Ok(Json(
        state
            .service
            .get_result_properties(token.as_str(), &pattern)
            .await?,
    ))
}
