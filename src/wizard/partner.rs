//! Supplier/partner application flow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pricing::ServiceCategoryTag;

use super::validation::{is_valid_org_number, require, ContactDetails, ContactFields, FieldError};
use super::WizardFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStep {
    Company,
    Services,
    Contact,
}

impl fmt::Display for PartnerStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartnerStep::Company => "company",
            PartnerStep::Services => "services",
            PartnerStep::Contact => "contact",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartnerDraft {
    pub company_name: String,
    pub org_number: String,
    pub services: Vec<ServiceCategoryTag>,
    /// Municipalities or regions the partner can serve.
    pub coverage_areas: Vec<String>,
    pub employee_count: Option<i32>,
    pub contact: ContactDetails,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PartnerApplicationFlow;

impl WizardFlow for PartnerApplicationFlow {
    type Step = PartnerStep;
    type Draft = PartnerDraft;
    type Preview = ();

    const NAME: &'static str = "partner_application";
    const STEPS: &'static [PartnerStep] =
        &[PartnerStep::Company, PartnerStep::Services, PartnerStep::Contact];

    fn validate(step: PartnerStep, draft: &PartnerDraft) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            PartnerStep::Company => {
                require(&mut errors, "company_name", &draft.company_name);
                if !is_valid_org_number(&draft.org_number) {
                    errors.push(FieldError::new(
                        "org_number",
                        "Enter an organisation number as NNNNNN-NNNN",
                    ));
                }
            }
            PartnerStep::Services => {
                if draft.services.is_empty() {
                    errors.push(FieldError::new("services", "Choose at least one service"));
                }
                if draft.coverage_areas.iter().all(|area| area.trim().is_empty()) {
                    errors.push(FieldError::new("coverage_areas", "Add at least one area"));
                }
                if !draft.employee_count.is_some_and(|n| n > 0) {
                    errors.push(FieldError::new("employee_count", "Enter the number of employees"));
                }
            }
            PartnerStep::Contact => draft.contact.validate(
                &mut errors,
                ContactFields {
                    name: "contact.name",
                    email: "contact.email",
                    phone: "contact.phone",
                },
            ),
        }
        errors
    }
}
