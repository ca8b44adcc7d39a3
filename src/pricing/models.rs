//! Value types for pricing and estimation.
//!
//! Everything here is an immutable input or output of a single estimate call.
//! Nothing is cached or identified; a new estimate is computed on every change.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Throughput used when a service has no specific capacity classification.
pub const DEFAULT_CAPACITY_PER_WORKER_HOUR: Decimal = dec!(50);

/// How a service turns customer input into a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    /// Priced per square metre of floor or surface.
    #[default]
    GeneralArea,
    /// Priced per hour from stairwell and floor counts.
    Staircase,
    /// Priced per kilogram of laundry.
    LaundryByWeight,
    /// Priced per item at a fixed catalog price.
    FixedPriceCatalog,
}

/// Capacity classification assigned to a service when it is cataloged.
///
/// Unknown slugs parse to [`ServiceCategoryTag::Generic`], so anything
/// unclassified falls back to the default capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ServiceCategoryTag {
    Staircase,
    FloorCare,
    Window,
    Furniture,
    Generic,
}

impl ServiceCategoryTag {
    pub const ALL: [ServiceCategoryTag; 5] = [
        ServiceCategoryTag::Staircase,
        ServiceCategoryTag::FloorCare,
        ServiceCategoryTag::Window,
        ServiceCategoryTag::Furniture,
        ServiceCategoryTag::Generic,
    ];

    /// Units (square metres, items, ...) one worker handles per hour.
    pub const fn capacity_per_worker_hour(self) -> Decimal {
        match self {
            ServiceCategoryTag::Staircase => dec!(50),
            ServiceCategoryTag::FloorCare => dec!(60),
            ServiceCategoryTag::Window => dec!(40),
            ServiceCategoryTag::Furniture => dec!(30),
            ServiceCategoryTag::Generic => DEFAULT_CAPACITY_PER_WORKER_HOUR,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ServiceCategoryTag::Staircase => "staircase",
            ServiceCategoryTag::FloorCare => "floor-care",
            ServiceCategoryTag::Window => "window",
            ServiceCategoryTag::Furniture => "furniture",
            ServiceCategoryTag::Generic => "generic",
        }
    }

    pub fn from_slug(slug: &str) -> Self {
        let slug = slug.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(slug))
            .unwrap_or(ServiceCategoryTag::Generic)
    }
}

impl From<String> for ServiceCategoryTag {
    fn from(value: String) -> Self {
        Self::from_slug(&value)
    }
}

impl std::fmt::Display for ServiceCategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for area, weight or item based jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(default)]
    pub service_category: ServiceCategory,
    /// Area in m², weight in kg, or item count depending on the service.
    pub quantity: Decimal,
    pub worker_count: i32,
    pub capacity_per_worker_hour: Decimal,
    pub price_per_unit: Decimal,
}

/// Input for staircase cleaning, priced from building geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaircaseJobRequest {
    pub stairwell_count: i32,
    pub floors_per_stairwell: i32,
    pub worker_count: i32,
    #[serde(default)]
    pub has_elevator: bool,
}

/// Estimated duration and price of a job, rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobEstimate {
    /// Labor time in hours, one decimal.
    #[serde(with = "rust_decimal::serde::str")]
    pub hours: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_with_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_before_surcharge: Decimal,
    /// Only staircase estimates report the derived area.
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_area: Option<Decimal>,
}

impl JobEstimate {
    pub fn surcharge(&self) -> Decimal {
        self.price_with_surcharge - self.price_before_surcharge
    }
}
