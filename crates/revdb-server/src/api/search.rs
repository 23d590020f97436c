//! Typeahead search.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use revdb_search::{params::non_blank, suggest, SearchResponse, SearchTerm};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub q: Option<String>,
    pub country: Option<String>,
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let country = non_blank(params.country.as_deref())
        .unwrap_or_else(|| state.default_country.to_string());

    // Too-short queries never reach the catalog.
    let Some(term) = SearchTerm::parse(params.q.as_deref()) else {
        let empty = SearchResponse::empty(params.q.as_deref().unwrap_or_default(), &country);
        return Ok(Json(ApiResponse::new(req_id.0, empty)));
    };

    let catalog = revdb_db::list_catalog(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(
        req_id.0,
        suggest(&term, &country, &catalog),
    )))
}
