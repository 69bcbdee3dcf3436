use std::sync::{Arc, Mutex};

use axum::async_trait;
use axum::response::Response;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::intake::domain::{ApplicationInput, CreditCardApplication};
use crate::intake::frequent_flyer::{ContractViolation, FrequentFlyerNumberValidator};
use crate::intake::repository::{CreditCardApplicationRepository, RepositoryError};
use crate::intake::ApplyController;

pub(super) fn valid_input() -> ApplicationInput {
    ApplicationInput {
        first_name: "Sarah".to_string(),
        last_name: "Smith".to_string(),
        age: 18,
        frequent_flyer_number: Some("012345-A".to_string()),
        gross_annual_income: Decimal::from(100_000),
    }
}

pub(super) fn build_controller() -> (
    ApplyController<RecordingRepository>,
    Arc<RecordingRepository>,
) {
    let repository = Arc::new(RecordingRepository::default());
    let controller = ApplyController::new(repository.clone());
    (controller, repository)
}

#[derive(Default, Clone)]
pub(super) struct RecordingRepository {
    saved: Arc<Mutex<Vec<CreditCardApplication>>>,
}

impl RecordingRepository {
    pub(super) fn saved(&self) -> Vec<CreditCardApplication> {
        self.saved.lock().expect("repository mutex poisoned").clone()
    }

    pub(super) fn add_calls(&self) -> usize {
        self.saved.lock().expect("repository mutex poisoned").len()
    }
}

#[async_trait]
impl CreditCardApplicationRepository for RecordingRepository {
    async fn add(&self, application: CreditCardApplication) -> Result<(), RepositoryError> {
        self.saved
            .lock()
            .expect("repository mutex poisoned")
            .push(application);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

#[async_trait]
impl CreditCardApplicationRepository for UnavailableRepository {
    async fn add(&self, _application: CreditCardApplication) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

#[async_trait]
impl CreditCardApplicationRepository for ConflictRepository {
    async fn add(&self, _application: CreditCardApplication) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }
}

/// Validator double answering with a fixed result and counting calls.
#[derive(Default)]
pub(super) struct StubValidator {
    pub(super) answer: Option<bool>,
    calls: Mutex<Vec<Option<String>>>,
}

impl StubValidator {
    pub(super) fn answering(answer: bool) -> Self {
        Self {
            answer: Some(answer),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().expect("validator mutex poisoned").clone()
    }
}

impl FrequentFlyerNumberValidator for StubValidator {
    fn is_valid(&self, candidate: Option<&str>) -> Result<bool, ContractViolation> {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .push(candidate.map(str::to_string));
        self.answer.ok_or(ContractViolation::MissingArgument {
            argument: "frequent_flyer_number",
        })
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
