//! Core pricing calculation functions.
//!
//! Pure functions for estimate math - no I/O, no logging, no shared state.
//! Degenerate inputs produce `None` ("estimate unavailable"), never an error.
//! Arithmetic runs at full precision; rounding happens only when the
//! [`JobEstimate`] is built.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::models::{JobEstimate, JobRequest, ServiceCategoryTag, StaircaseJobRequest};

/// Floor area assumed for one staircase floor, in m².
pub const STAIRCASE_AREA_PER_FLOOR: Decimal = dec!(50);

/// Staircase area one worker cleans per hour, in m².
pub const STAIRCASE_CAPACITY_PER_WORKER_HOUR: Decimal = dec!(50);

/// Labor rate charged for staircase cleaning, per hour.
pub const STAIRCASE_HOURLY_RATE: Decimal = dec!(300);

/// Time multiplier for buildings with an elevator.
pub const ELEVATOR_TIME_FACTOR: Decimal = dec!(0.9);

/// Laundry produced per employee per week, in kg.
pub const LAUNDRY_KG_PER_EMPLOYEE: Decimal = dec!(2.5);

/// Round half away from zero to the given number of decimal places.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use cleanbook_web::pricing::round_dp;
///
/// assert_eq!(round_dp(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_dp(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_dp(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_dp(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a price to whole öre.
pub fn round_money(amount: Decimal) -> Decimal {
    round_dp(amount, 2)
}

/// Round a duration to one decimal place.
pub fn round_hours(hours: Decimal) -> Decimal {
    round_dp(hours, 1)
}

/// Coordination loss from putting several workers on one job.
///
/// 1 → 1.0, 2 → 1.1, 3 → 1.2, 4 → 1.3, and `1 + (n - 1) * 0.1` beyond that.
/// Counts below one are treated as a single worker.
pub fn inefficiency_factor(worker_count: i32) -> Decimal {
    match worker_count {
        i32::MIN..=1 => Decimal::ONE,
        2 => dec!(1.1),
        3 => dec!(1.2),
        4 => dec!(1.3),
        n => Decimal::ONE + Decimal::from(n - 1) * dec!(0.1),
    }
}

/// Price multiplier for larger crews. Caps at 1.10 from four workers up.
pub fn price_surcharge_factor(worker_count: i32) -> Decimal {
    match worker_count {
        i32::MIN..=1 => Decimal::ONE,
        2 => dec!(1.05),
        3 => dec!(1.08),
        _ => dec!(1.10),
    }
}

/// Hourly capacity for a service classification.
pub fn capacity_for_category(tag: ServiceCategoryTag) -> Decimal {
    tag.capacity_per_worker_hour()
}

/// Estimate time and price for an area, weight or item based job.
///
/// Returns `None` when capacity or worker count is not positive, when
/// quantity or unit price is negative, or when the numbers overflow.
/// A zero quantity is a valid, zero-sized job.
pub fn estimate_general_job(request: &JobRequest) -> Option<JobEstimate> {
    if request.capacity_per_worker_hour <= Decimal::ZERO || request.worker_count <= 0 {
        return None;
    }
    if request.quantity < Decimal::ZERO || request.price_per_unit < Decimal::ZERO {
        return None;
    }

    let workers = Decimal::from(request.worker_count);
    let hours = request
        .quantity
        .checked_div(request.capacity_per_worker_hour)?
        .checked_div(workers)?
        .checked_mul(inefficiency_factor(request.worker_count))?;

    let price_before_surcharge = request.quantity.checked_mul(request.price_per_unit)?;
    let price_with_surcharge =
        price_before_surcharge.checked_mul(price_surcharge_factor(request.worker_count))?;

    Some(JobEstimate {
        hours: round_hours(hours),
        price_with_surcharge: round_money(price_with_surcharge),
        price_before_surcharge: round_money(price_before_surcharge),
        total_area: None,
    })
}

/// Estimate staircase cleaning from stairwell and floor counts.
///
/// Each floor counts as [`STAIRCASE_AREA_PER_FLOOR`]; an elevator cuts the
/// time by 10%. Labor is billed at [`STAIRCASE_HOURLY_RATE`].
pub fn estimate_staircase_job(request: &StaircaseJobRequest) -> Option<JobEstimate> {
    if request.stairwell_count <= 0 || request.floors_per_stairwell <= 0 || request.worker_count <= 0
    {
        return None;
    }

    let total_area = Decimal::from(request.stairwell_count)
        .checked_mul(Decimal::from(request.floors_per_stairwell))?
        .checked_mul(STAIRCASE_AREA_PER_FLOOR)?;

    let elevator_factor = if request.has_elevator {
        ELEVATOR_TIME_FACTOR
    } else {
        Decimal::ONE
    };

    let crew_capacity =
        STAIRCASE_CAPACITY_PER_WORKER_HOUR.checked_mul(Decimal::from(request.worker_count))?;
    let hours = total_area
        .checked_div(crew_capacity)?
        .checked_mul(elevator_factor)?;

    let price_before_surcharge = hours.checked_mul(STAIRCASE_HOURLY_RATE)?;
    let price_with_surcharge =
        price_before_surcharge.checked_mul(price_surcharge_factor(request.worker_count))?;

    Some(JobEstimate {
        hours: round_hours(hours),
        price_with_surcharge: round_money(price_with_surcharge),
        price_before_surcharge: round_money(price_before_surcharge),
        total_area: Some(round_dp(total_area, 0)),
    })
}

/// Weekly laundry weight for a workplace, in whole kilograms.
///
/// Non-positive employee counts produce zero.
pub fn estimate_laundry_weight(employee_count: i32) -> Decimal {
    if employee_count <= 0 {
        return Decimal::ZERO;
    }
    round_dp(Decimal::from(employee_count) * LAUNDRY_KG_PER_EMPLOYEE, 0)
}
