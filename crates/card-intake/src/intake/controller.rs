use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{
    ApplicationInput, CreditCardApplication, FieldError, ModelErrors, ValidationOutcome,
};
use super::frequent_flyer::ContractViolation;
use super::repository::{CreditCardApplicationRepository, RepositoryError};
use super::validation::ApplicationValidator;

/// View rendered for the blank and the re-displayed form.
pub const FORM_VIEW: &str = "Index";
/// View rendered once an application has been stored.
pub const COMPLETION_VIEW: &str = "ApplicationComplete";

/// The view the host should render next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeView {
    ShowEmptyForm,
    ShowForm {
        input: ApplicationInput,
        errors: Vec<FieldError>,
    },
    ShowCompletion,
}

impl IntakeView {
    pub fn view_name(&self) -> &'static str {
        match self {
            IntakeView::ShowEmptyForm | IntakeView::ShowForm { .. } => FORM_VIEW,
            IntakeView::ShowCompletion => COMPLETION_VIEW,
        }
    }

    /// Payload handed to the renderer.
    pub fn payload(&self) -> ViewPayload<'_> {
        match self {
            IntakeView::ShowEmptyForm | IntakeView::ShowCompletion => ViewPayload {
                view: self.view_name(),
                model: None,
                errors: &[],
            },
            IntakeView::ShowForm { input, errors } => ViewPayload {
                view: self.view_name(),
                model: Some(input),
                errors,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViewPayload<'a> {
    pub view: &'static str,
    pub model: Option<&'a ApplicationInput>,
    pub errors: &'a [FieldError],
}

/// Two step intake flow: hand out a blank form, then either re-display it
/// with errors or persist the application.
pub struct ApplyController<R> {
    repository: Arc<R>,
    validator: Arc<ApplicationValidator>,
}

impl<R> ApplyController<R>
where
    R: CreditCardApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_validator(repository, ApplicationValidator::standard())
    }

    pub fn with_validator(repository: Arc<R>, validator: ApplicationValidator) -> Self {
        Self {
            repository,
            validator: Arc::new(validator),
        }
    }

    pub fn begin_application(&self) -> IntakeView {
        debug!("serving blank application form");
        IntakeView::ShowEmptyForm
    }

    /// Decide the next view for a submitted form.
    ///
    /// The repository is written at most once, and only when binding and
    /// domain validation both pass. Repository failures are returned as is.
    pub async fn submit_application(
        &self,
        input: ApplicationInput,
        model_errors: ModelErrors,
    ) -> Result<IntakeView, ApplyError> {
        if !model_errors.is_empty() {
            info!(
                binding_errors = model_errors.len(),
                "submission rejected during binding"
            );
            return Ok(IntakeView::ShowForm {
                input,
                errors: model_errors.into_vec(),
            });
        }

        match self.validator.validate(&input)? {
            ValidationOutcome::Invalid(errors) => {
                info!(
                    validation_errors = errors.len(),
                    "submission failed validation"
                );
                Ok(IntakeView::ShowForm { input, errors })
            }
            ValidationOutcome::Valid => {
                let application = CreditCardApplication::from_input(&input);
                if let Err(err) = self.repository.add(application).await {
                    warn!(error = %err, "failed to store credit card application");
                    return Err(err.into());
                }
                info!("credit card application stored");
                Ok(IntakeView::ShowCompletion)
            }
        }
    }
}

/// Error raised by the intake flow.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error(transparent)]
    Contract(#[from] ContractViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
