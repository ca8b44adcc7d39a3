//! Pricing engine module for the booking site.
//!
//! Turns a job's physical parameters (area, weight, item count, staircase
//! geometry, crew size) into an estimated duration and price. The math lives
//! in [`calculators`]; [`services`] applies it to the [`catalog`].

pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    capacity_for_category, estimate_general_job, estimate_laundry_weight, estimate_staircase_job,
    inefficiency_factor, price_surcharge_factor, round_dp, round_hours, round_money,
};
pub use catalog::{catalog, find_service, CatalogService, ServiceUnit, CURRENCY};
pub use models::{JobEstimate, JobRequest, ServiceCategory, ServiceCategoryTag, StaircaseJobRequest};
pub use requests::EstimateInput;
pub use routes::router;
pub use services::{estimate_by_slug, estimate_service, PricingError};
