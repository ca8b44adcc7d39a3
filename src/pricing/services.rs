//! Catalog-aware estimation.
//!
//! The one place booking flows turn a catalog service plus customer
//! configuration into an estimate. Request-shape problems are errors;
//! a degenerate configuration is `Ok(None)`, the same as the raw estimators.

use rust_decimal::Decimal;

use super::calculators::{estimate_general_job, estimate_laundry_weight, estimate_staircase_job};
use super::catalog::{find_service, CatalogService};
use super::models::{JobEstimate, ServiceCategory, StaircaseJobRequest};
use super::requests::EstimateInput;

/// Pricing request errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("No service found with slug '{slug}'")]
    UnknownService { slug: String },

    #[error("Service '{service}' needs '{field}' to be estimated")]
    MissingInput {
        service: &'static str,
        field: &'static str,
    },
}

impl PricingError {
    fn missing(service: &CatalogService, field: &'static str) -> Self {
        PricingError::MissingInput {
            service: service.slug,
            field,
        }
    }
}

/// Estimate a catalog service for the given configuration.
///
/// * `GeneralArea` / `FixedPriceCatalog` - `quantity` is area or item count
/// * `LaundryByWeight` - `quantity` in kg when positive, else derived from
///   `employee_count`
/// * `Staircase` - `stairwell_count`, `floors_per_stairwell`, `has_elevator`
pub fn estimate_service(
    service: &CatalogService,
    input: &EstimateInput,
) -> Result<Option<JobEstimate>, PricingError> {
    let worker_count = input.worker_count();

    match service.category {
        ServiceCategory::GeneralArea | ServiceCategory::FixedPriceCatalog => {
            let quantity = input
                .quantity
                .ok_or_else(|| PricingError::missing(service, "quantity"))?;
            Ok(estimate_general_job(&service.job_request(quantity, worker_count)))
        }
        ServiceCategory::LaundryByWeight => {
            // A positive weight wins; otherwise the head count decides.
            let weight = match (input.quantity, input.employee_count) {
                (Some(weight), _) if weight > Decimal::ZERO => weight,
                (_, Some(employees)) => estimate_laundry_weight(employees),
                (Some(weight), None) => weight,
                (None, None) => return Err(PricingError::missing(service, "employee_count")),
            };
            Ok(estimate_general_job(&service.job_request(weight, worker_count)))
        }
        ServiceCategory::Staircase => {
            let stairwell_count = input
                .stairwell_count
                .ok_or_else(|| PricingError::missing(service, "stairwell_count"))?;
            let floors_per_stairwell = input
                .floors_per_stairwell
                .ok_or_else(|| PricingError::missing(service, "floors_per_stairwell"))?;
            Ok(estimate_staircase_job(&StaircaseJobRequest {
                stairwell_count,
                floors_per_stairwell,
                worker_count,
                has_elevator: input.has_elevator,
            }))
        }
    }
}

/// Look up a service by slug and estimate it.
pub fn estimate_by_slug(
    slug: &str,
    input: &EstimateInput,
) -> Result<(&'static CatalogService, Option<JobEstimate>), PricingError> {
    let service = find_service(slug).ok_or_else(|| PricingError::UnknownService {
        slug: slug.to_string(),
    })?;
    let estimate = estimate_service(service, input)?;
    Ok((service, estimate))
}
