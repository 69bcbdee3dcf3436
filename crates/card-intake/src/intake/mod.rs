//! Credit card application intake.
//!
//! The flow is deliberately small: [`ApplyController::begin_application`]
//! hands out a blank form and [`ApplyController::submit_application`] either
//! re-displays the submission with its errors or stores it through a
//! [`CreditCardApplicationRepository`] and shows the completion view.

pub mod binding;
pub mod controller;
pub mod domain;
pub mod frequent_flyer;
pub mod repository;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use binding::{bind_application, ApplicationForm};
pub use controller::{
    ApplyController, ApplyError, IntakeView, ViewPayload, COMPLETION_VIEW, FORM_VIEW,
};
pub use domain::{
    ApplicationId, ApplicationInput, ApplicationStatus, CreditCardApplication, FieldError,
    ModelErrors, ValidationOutcome,
};
pub use frequent_flyer::{
    is_valid_frequent_flyer_number, ContractViolation, FrequentFlyerNumberValidator,
    SchemeFrequentFlyerValidator, SCHEME_IDENTIFIERS,
};
pub use repository::{ApplicationRecord, CreditCardApplicationRepository, RepositoryError};
pub use router::apply_router;
pub use validation::{
    AgeRange, ApplicationRule, ApplicationValidator, FrequentFlyerNumberRule, IncomeRange,
    RequiredText,
};
