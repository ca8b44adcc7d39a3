//! Customer booking flow: pick a service, configure it, schedule, contact.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::{
    estimate_service, find_service, CatalogService, EstimateInput, JobEstimate, ServiceCategory,
    ServiceUnit,
};

use super::validation::{require, ContactDetails, ContactFields, FieldError};
use super::WizardFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    Service,
    Configure,
    Schedule,
    Contact,
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BookingStep::Service => "service",
            BookingStep::Configure => "configure",
            BookingStep::Schedule => "schedule",
            BookingStep::Contact => "contact",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

/// Everything the customer has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingDraft {
    /// Catalog slug.
    pub service: Option<String>,
    pub configuration: EstimateInput,
    pub preferred_date: Option<NaiveDate>,
    pub time_slot: Option<TimeSlot>,
    pub contact: ContactDetails,
    pub address: String,
    pub notes: String,
}

impl BookingDraft {
    pub fn catalog_service(&self) -> Option<&'static CatalogService> {
        self.service.as_deref().and_then(find_service)
    }
}

/// Live estimate shown while the customer configures the booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingPreview {
    pub service: &'static str,
    pub title: &'static str,
    pub unit: ServiceUnit,
    pub estimate: JobEstimate,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookingFlow;

const CONTACT_FIELDS: ContactFields = ContactFields {
    name: "contact.name",
    email: "contact.email",
    phone: "contact.phone",
};

impl WizardFlow for BookingFlow {
    type Step = BookingStep;
    type Draft = BookingDraft;
    type Preview = BookingPreview;

    const NAME: &'static str = "booking";
    const STEPS: &'static [BookingStep] = &[
        BookingStep::Service,
        BookingStep::Configure,
        BookingStep::Schedule,
        BookingStep::Contact,
    ];

    fn validate(step: BookingStep, draft: &BookingDraft) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            BookingStep::Service => {
                if draft.catalog_service().is_none() {
                    errors.push(FieldError::new("service", "Choose a service"));
                }
            }
            BookingStep::Configure => match draft.catalog_service() {
                Some(service) => validate_configuration(service, &draft.configuration, &mut errors),
                None => errors.push(FieldError::new("service", "Choose a service")),
            },
            BookingStep::Schedule => {
                if draft.preferred_date.is_none() {
                    errors.push(FieldError::new("preferred_date", "Choose a date"));
                }
                if draft.time_slot.is_none() {
                    errors.push(FieldError::new("time_slot", "Choose a time of day"));
                }
            }
            BookingStep::Contact => {
                draft.contact.validate(&mut errors, CONTACT_FIELDS);
                require(&mut errors, "address", &draft.address);
            }
        }
        errors
    }

    fn preview(draft: &BookingDraft) -> Option<BookingPreview> {
        let service = draft.catalog_service()?;
        let estimate = estimate_service(service, &draft.configuration).ok()??;
        Some(BookingPreview {
            service: service.slug,
            title: service.title,
            unit: service.unit,
            estimate,
        })
    }
}

fn validate_configuration(
    service: &CatalogService,
    config: &EstimateInput,
    errors: &mut Vec<FieldError>,
) {
    if config.worker_count.is_some_and(|n| n < 1) {
        errors.push(FieldError::new(
            "configuration.worker_count",
            "At least one worker is needed",
        ));
    }

    let positive = |value: Option<i32>| value.is_some_and(|n| n > 0);
    match service.category {
        ServiceCategory::GeneralArea | ServiceCategory::FixedPriceCatalog => {
            if !config.quantity.is_some_and(|q| q > Decimal::ZERO) {
                errors.push(FieldError::new("configuration.quantity", "Enter a quantity"));
            }
        }
        ServiceCategory::LaundryByWeight => {
            let has_weight = config.quantity.is_some_and(|q| q > Decimal::ZERO);
            if !has_weight && !positive(config.employee_count) {
                errors.push(FieldError::new(
                    "configuration.employee_count",
                    "Enter the number of employees or the laundry weight",
                ));
            }
        }
        ServiceCategory::Staircase => {
            if !positive(config.stairwell_count) {
                errors.push(FieldError::new(
                    "configuration.stairwell_count",
                    "Enter the number of stairwells",
                ));
            }
            if !positive(config.floors_per_stairwell) {
                errors.push(FieldError::new(
                    "configuration.floors_per_stairwell",
                    "Enter the number of floors",
                ));
            }
        }
    }
}
