//! Country picker list.

use axum::{extract::State, Extension, Json};
use revdb_core::sanitize_country_list;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CountriesData {
    default_country: String,
    countries: Vec<String>,
}

/// Never fails: a catalog error degrades to the default country alone.
pub(super) async fn list_countries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<CountriesData>> {
    let default_country = state.default_country.to_string();

    let countries = match revdb_db::list_distinct_countries(&state.pool).await {
        Ok(values) => sanitize_country_list(values, &default_country),
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "country list fetch failed");
            vec![default_country.clone()]
        }
    };

    Json(ApiResponse::new(
        req_id.0,
        CountriesData {
            default_country,
            countries,
        },
    ))
}
