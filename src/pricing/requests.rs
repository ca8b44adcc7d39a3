//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query for the crew-size factor lookup
#[derive(Debug, Deserialize)]
pub struct FactorsQuery {
    #[serde(default = "default_worker_count")]
    pub worker_count: i32,
}

fn default_worker_count() -> i32 {
    1
}

/// Request to convert a head count into weekly laundry weight
#[derive(Debug, Deserialize)]
pub struct LaundryWeightRequest {
    pub employee_count: i32,
}

/// Customer configuration for estimating a catalog service.
///
/// Which fields matter depends on the service category; the rest are ignored.
/// This is also the configuration section of a booking draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateInput {
    /// Area in m², weight in kg, or item count.
    pub quantity: Option<Decimal>,
    /// Defaults to a single worker.
    pub worker_count: Option<i32>,
    pub stairwell_count: Option<i32>,
    pub floors_per_stairwell: Option<i32>,
    pub has_elevator: bool,
    /// Used for laundry when no weight is given.
    pub employee_count: Option<i32>,
}

impl EstimateInput {
    pub fn worker_count(&self) -> i32 {
        self.worker_count.unwrap_or(1)
    }
}
