//! Pricing API route handlers.

use axum::{
    extract::{Path, Query},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;

use super::calculators::{
    estimate_general_job, estimate_laundry_weight, estimate_staircase_job, inefficiency_factor,
    price_surcharge_factor,
};
use super::catalog::{catalog, CURRENCY};
use super::models::{JobRequest, StaircaseJobRequest};
use super::requests::{EstimateInput, FactorsQuery, LaundryWeightRequest};
use super::responses::{
    EstimateEnvelope, FactorsResponse, LaundryWeightResponse, ServiceEstimateResponse,
    ServiceListResponse,
};
use super::services::estimate_by_slug;

/// Catalog and estimator endpoints. Stateless, so they mount on any router.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/services", get(list_services))
        .route("/api/pricing/factors", get(factors))
        .route("/api/pricing/general", post(general_estimate))
        .route("/api/pricing/staircase", post(staircase_estimate))
        .route("/api/pricing/laundry-weight", post(laundry_weight))
        .route("/api/pricing/services/:slug/estimate", post(service_estimate))
}

/// GET /api/services
async fn list_services() -> Json<ServiceListResponse> {
    Json(ServiceListResponse {
        currency: CURRENCY,
        services: catalog(),
    })
}

/// GET /api/pricing/factors?worker_count=N
async fn factors(Query(query): Query<FactorsQuery>) -> Json<FactorsResponse> {
    Json(FactorsResponse {
        worker_count: query.worker_count,
        inefficiency_factor: inefficiency_factor(query.worker_count),
        price_surcharge_factor: price_surcharge_factor(query.worker_count),
    })
}

/// POST /api/pricing/general
async fn general_estimate(Json(request): Json<JobRequest>) -> Json<EstimateEnvelope> {
    Json(estimate_general_job(&request).into())
}

/// POST /api/pricing/staircase
async fn staircase_estimate(Json(request): Json<StaircaseJobRequest>) -> Json<EstimateEnvelope> {
    Json(estimate_staircase_job(&request).into())
}

/// POST /api/pricing/laundry-weight
async fn laundry_weight(Json(request): Json<LaundryWeightRequest>) -> Json<LaundryWeightResponse> {
    Json(LaundryWeightResponse {
        employee_count: request.employee_count,
        weight_kg: estimate_laundry_weight(request.employee_count),
    })
}

/// POST /api/pricing/services/:slug/estimate
async fn service_estimate(
    Path(slug): Path<String>,
    Json(input): Json<EstimateInput>,
) -> Result<Json<ServiceEstimateResponse>> {
    let (service, estimate) = estimate_by_slug(&slug, &input)?;
    if estimate.is_none() {
        tracing::debug!("No estimate available for service {} with {:?}", slug, input);
    }
    Ok(Json(ServiceEstimateResponse::new(service, estimate)))
}
