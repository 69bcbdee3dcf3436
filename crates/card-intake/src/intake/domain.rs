use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository when an application is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Applicant supplied form values, bound once per request.
///
/// Missing fields take their defaults so a partially filled form can still be
/// echoed back to the applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationInput {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    /// Kept exactly as submitted; only empty text binds to `None`.
    pub frequent_flyer_number: Option<String>,
    pub gross_annual_income: Decimal,
}

/// Domain record handed to the repository after validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub frequent_flyer_number: Option<String>,
    pub gross_annual_income: Decimal,
}

impl CreditCardApplication {
    pub(crate) fn from_input(input: &ApplicationInput) -> Self {
        Self {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            age: input.age,
            frequent_flyer_number: input.frequent_flyer_number.clone(),
            gross_annual_income: input.gross_annual_income,
        }
    }
}

/// Marks a stored application as new and not yet approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
        }
    }
}

/// A single field level problem reported back to the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Binding errors produced by the host before domain validation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelErrors(Vec<FieldError>);

impl ModelErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<Vec<FieldError>> for ModelErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

/// Result of running every rule over a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationOutcome {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}
