//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::{CatalogService, ServiceUnit, CURRENCY};
use super::models::JobEstimate;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn sek(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
        }
    }
}

/// Estimate body with prices tagged by currency
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
    pub price_before_surcharge: MoneyResponse,
    pub price_with_surcharge: MoneyResponse,
    pub surcharge: MoneyResponse,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_area: Option<Decimal>,
}

impl From<JobEstimate> for EstimateResponse {
    fn from(estimate: JobEstimate) -> Self {
        Self {
            hours: estimate.hours,
            surcharge: MoneyResponse::sek(estimate.surcharge()),
            price_before_surcharge: MoneyResponse::sek(estimate.price_before_surcharge),
            price_with_surcharge: MoneyResponse::sek(estimate.price_with_surcharge),
            total_area: estimate.total_area,
        }
    }
}

/// Response for the raw estimators; `estimate` is null when unavailable
#[derive(Debug, Serialize)]
pub struct EstimateEnvelope {
    pub estimate: Option<EstimateResponse>,
}

impl From<Option<JobEstimate>> for EstimateEnvelope {
    fn from(estimate: Option<JobEstimate>) -> Self {
        Self {
            estimate: estimate.map(EstimateResponse::from),
        }
    }
}

/// Response for a catalog service estimate
#[derive(Debug, Serialize)]
pub struct ServiceEstimateResponse {
    pub service: &'static str,
    pub title: &'static str,
    pub unit: ServiceUnit,
    pub estimate: Option<EstimateResponse>,
}

impl ServiceEstimateResponse {
    pub fn new(service: &'static CatalogService, estimate: Option<JobEstimate>) -> Self {
        Self {
            service: service.slug,
            title: service.title,
            unit: service.unit,
            estimate: estimate.map(EstimateResponse::from),
        }
    }
}

/// Response for the service listing
#[derive(Debug, Serialize)]
pub struct ServiceListResponse {
    pub currency: &'static str,
    pub services: &'static [CatalogService],
}

/// Response for crew-size factors
#[derive(Debug, Serialize)]
pub struct FactorsResponse {
    pub worker_count: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub inefficiency_factor: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_surcharge_factor: Decimal,
}

/// Response for laundry weight estimation
#[derive(Debug, Serialize)]
pub struct LaundryWeightResponse {
    pub employee_count: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub weight_kg: Decimal,
}
