//! Listing/browse and per-business review pages.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use revdb_core::{country_terms, matches_country};
use revdb_db::ReviewItem;
use revdb_search::{
    run_listing, Listing, ListingParams, ListingQuery, Page, ReviewPageParams, ReviewPageQuery,
};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState};

pub(super) async fn list_businesses(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ApiResponse<Listing>>, ApiError> {
    let query = ListingQuery::from_params(&params, &state.default_country);

    let catalog = if query.term_too_short {
        Vec::new()
    } else {
        revdb_db::list_catalog(&state.pool)
            .await
            .map_err(|e| map_db_error(req_id.0.clone(), &e))?
    };

    let listing = run_listing(catalog, &query);
    tracing::debug!(
        request_id = %req_id.0,
        country = %query.country,
        total = listing.total(),
        "listing served"
    );

    Ok(Json(ApiResponse::new(req_id.0, listing)))
}

pub(super) async fn list_business_reviews(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
    Query(params): Query<ReviewPageParams>,
) -> Result<Json<ApiResponse<Page<ReviewItem>>>, ApiError> {
    let query = ReviewPageQuery::from_params(&params, &state.default_country);

    let business = revdb_db::get_business_by_slug(&state.pool, &slug)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "business not found"))?;

    if !matches_country(business.country.as_deref(), &country_terms(&query.country)) {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            "business not found in selected country",
        ));
    }

    let page = revdb_db::list_review_page(&state.pool, business.id, &query)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, page)))
}
