//! Category analytics for the selected country, plus catalog lookups.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use revdb_core::{category_by_slug, category_family, country_terms, related_categories, CategoryEntry};
use revdb_search::{category_analytics, params::non_blank, CategoryAnalytics};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CategoryParams {
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CategoriesData {
    country: String,
    #[serde(flatten)]
    analytics: CategoryAnalytics,
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<ApiResponse<CategoriesData>>, ApiError> {
    let country = non_blank(params.country.as_deref())
        .unwrap_or_else(|| state.default_country.to_string());

    let counts = revdb_db::count_businesses_by_category(&state.pool, &country_terms(&country))
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(
        req_id.0,
        CategoriesData {
            country,
            analytics: category_analytics(&counts),
        },
    )))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CategoryDetail {
    slug: &'static str,
    name: &'static str,
    family: &'static str,
    /// Other catalog categories in the same family.
    related: Vec<&'static CategoryEntry>,
}

pub(super) async fn get_category(
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryDetail>>, ApiError> {
    let entry = category_by_slug(&slug)
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "category not found"))?;

    let related = related_categories(entry.name)
        .into_iter()
        .filter(|c| c.slug != entry.slug)
        .collect();

    Ok(Json(ApiResponse::new(
        req_id.0,
        CategoryDetail {
            slug: entry.slug,
            name: entry.name,
            family: category_family(entry.name),
            related,
        },
    )))
}
