//! Multi-step form state machines.
//!
//! A [`Wizard`] walks an ordered list of steps defined by a [`WizardFlow`].
//! It moves forward only when the current step validates, can always move
//! back, and ends in a terminal submitted state that freezes the draft.
//! Pricing is not part of the machine; flows call it from their preview.

pub mod booking;
pub mod partner;
pub mod validation;

use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub use booking::{BookingDraft, BookingFlow, BookingPreview, BookingStep, TimeSlot};
pub use partner::{PartnerApplicationFlow, PartnerDraft, PartnerStep};
pub use validation::{ContactDetails, FieldError};

/// Definition of one multi-step form.
pub trait WizardFlow: Debug + Clone + Send + Sync + 'static {
    type Step: Copy + Eq + Debug + Display + Serialize + Send + Sync + 'static;
    type Draft: Debug + Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static;
    type Preview: Serialize + Send + 'static;

    /// Name used in logs and error messages.
    const NAME: &'static str;

    /// Steps in the order they are shown. Never empty.
    const STEPS: &'static [Self::Step];

    /// Field errors blocking `step`; empty when the step is complete.
    fn validate(step: Self::Step, draft: &Self::Draft) -> Vec<FieldError>;

    /// Derived data shown next to the form, such as a live estimate.
    fn preview(_draft: &Self::Draft) -> Option<Self::Preview> {
        None
    }
}

/// Where a wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "step", rename_all = "snake_case")]
pub enum WizardState<S> {
    Step(S),
    Submitted,
}

/// Wizard transition errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Step '{step}' is incomplete ({} invalid field(s))", .errors.len())]
    InvalidStep {
        step: String,
        errors: Vec<FieldError>,
    },

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Already at the last step; submit instead")]
    AtFinalStep,

    #[error("Only the last step can be submitted")]
    NotFinalStep,

    #[error("Step {index} has not been reached yet")]
    StepNotReached { index: usize },

    #[error("Form has already been submitted")]
    AlreadySubmitted,
}

impl WizardError {
    pub fn kind(&self) -> &'static str {
        match self {
            WizardError::InvalidStep { .. } => "invalid_step",
            WizardError::AtFirstStep => "at_first_step",
            WizardError::AtFinalStep => "at_final_step",
            WizardError::NotFinalStep => "not_final_step",
            WizardError::StepNotReached { .. } => "step_not_reached",
            WizardError::AlreadySubmitted => "already_submitted",
        }
    }
}

/// Proof of a completed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

/// In-progress state of one form.
#[derive(Debug, Clone)]
pub struct Wizard<F: WizardFlow> {
    step_index: usize,
    furthest_index: usize,
    draft: F::Draft,
    receipt: Option<SubmissionReceipt>,
    _flow: PhantomData<F>,
}

impl<F: WizardFlow> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: WizardFlow> Wizard<F> {
    pub fn new() -> Self {
        Self::with_draft(F::Draft::default())
    }

    pub fn with_draft(draft: F::Draft) -> Self {
        Self {
            step_index: 0,
            furthest_index: 0,
            draft,
            receipt: None,
            _flow: PhantomData,
        }
    }

    pub fn state(&self) -> WizardState<F::Step> {
        match self.current_step() {
            Some(step) => WizardState::Step(step),
            None => WizardState::Submitted,
        }
    }

    /// `None` once submitted.
    pub fn current_step(&self) -> Option<F::Step> {
        if self.is_submitted() {
            None
        } else {
            Some(F::STEPS[self.step_index])
        }
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Highest step index the user has reached; `go_to` can return to any
    /// step up to here.
    pub fn furthest_index(&self) -> usize {
        self.furthest_index
    }

    pub fn total_steps(&self) -> usize {
        F::STEPS.len()
    }

    pub fn is_final_step(&self) -> bool {
        self.step_index + 1 == F::STEPS.len()
    }

    pub fn is_submitted(&self) -> bool {
        self.receipt.is_some()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn draft(&self) -> &F::Draft {
        &self.draft
    }

    pub fn preview(&self) -> Option<F::Preview> {
        F::preview(&self.draft)
    }

    /// Replace the form data. Rejected after submission.
    pub fn update_draft(&mut self, draft: F::Draft) -> Result<(), WizardError> {
        if self.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }
        self.draft = draft;
        Ok(())
    }

    /// Field errors on the current step.
    pub fn errors(&self) -> Vec<FieldError> {
        match self.current_step() {
            Some(step) => F::validate(step, &self.draft),
            None => Vec::new(),
        }
    }

    pub fn can_advance(&self) -> bool {
        !self.is_submitted() && !self.is_final_step() && self.errors().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.is_final_step() && self.first_invalid_step().is_none()
    }

    /// Move to the next step if the current one validates.
    pub fn advance(&mut self) -> Result<F::Step, WizardError> {
        let step = self.current_step().ok_or(WizardError::AlreadySubmitted)?;
        if self.is_final_step() {
            return Err(WizardError::AtFinalStep);
        }
        check_step::<F>(step, &self.draft)?;

        self.step_index += 1;
        self.furthest_index = self.furthest_index.max(self.step_index);
        Ok(F::STEPS[self.step_index])
    }

    pub fn back(&mut self) -> Result<F::Step, WizardError> {
        if self.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.step_index == 0 {
            return Err(WizardError::AtFirstStep);
        }
        self.step_index -= 1;
        Ok(F::STEPS[self.step_index])
    }

    /// Jump to a step the user has already reached.
    pub fn go_to(&mut self, index: usize) -> Result<F::Step, WizardError> {
        if self.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }
        if index > self.furthest_index {
            return Err(WizardError::StepNotReached { index });
        }
        self.step_index = index;
        Ok(F::STEPS[index])
    }

    /// Finish the form from the last step. Every step is re-validated since
    /// the draft may have changed after earlier steps were passed; on failure
    /// the wizard moves to the first incomplete step.
    pub fn submit(&mut self) -> Result<&SubmissionReceipt, WizardError> {
        if self.is_submitted() {
            return Err(WizardError::AlreadySubmitted);
        }
        if !self.is_final_step() {
            return Err(WizardError::NotFinalStep);
        }
        if let Some(index) = self.first_invalid_step() {
            self.step_index = index;
            let step = F::STEPS[index];
            return Err(WizardError::InvalidStep {
                step: step.to_string(),
                errors: F::validate(step, &self.draft),
            });
        }

        Ok(self.receipt.insert(SubmissionReceipt::new()))
    }

    fn first_invalid_step(&self) -> Option<usize> {
        F::STEPS
            .iter()
            .position(|step| !F::validate(*step, &self.draft).is_empty())
    }
}

fn check_step<F: WizardFlow>(step: F::Step, draft: &F::Draft) -> Result<(), WizardError> {
    let errors = F::validate(step, draft);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(WizardError::InvalidStep {
            step: step.to_string(),
            errors,
        })
    }
}
