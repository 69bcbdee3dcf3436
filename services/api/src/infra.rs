use axum::async_trait;
use card_intake::intake::{
    ApplicationId, ApplicationRecord, CreditCardApplication, CreditCardApplicationRepository,
    RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process local store used by the service and the demo.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<ApplicationRecord>>>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryApplicationRepository {
    pub(crate) fn records(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    fn next_id(&self) -> ApplicationId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        ApplicationId(format!("cca-{id:06}"))
    }
}

#[async_trait]
impl CreditCardApplicationRepository for InMemoryApplicationRepository {
    async fn add(&self, application: CreditCardApplication) -> Result<(), RepositoryError> {
        let record = ApplicationRecord::pending(self.next_id(), application);
        debug!(application_id = %record.id.0, "recording pending application");
        let mut guard = self.records.lock().map_err(|_| poisoned())?;
        guard.push(record);
        Ok(())
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("repository mutex poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_intake::intake::ApplicationStatus;
    use rust_decimal::Decimal;

    fn application() -> CreditCardApplication {
        CreditCardApplication {
            first_name: "Sarah".to_string(),
            last_name: "Smith".to_string(),
            age: 18,
            frequent_flyer_number: Some("012345-A".to_string()),
            gross_annual_income: Decimal::new(10_000_050, 2),
        }
    }

    #[tokio::test]
    async fn add_assigns_sequential_ids_and_pending_status() {
        let repository = InMemoryApplicationRepository::default();

        repository.add(application()).await.expect("first add");
        repository.add(application()).await.expect("second add");

        let records = repository.records().expect("records readable");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, ApplicationId("cca-000001".to_string()));
        assert_eq!(records[1].id, ApplicationId("cca-000002".to_string()));
        assert!(records
            .iter()
            .all(|record| record.status == ApplicationStatus::Pending));
        assert_eq!(records[0].status.label(), "pending");
        assert_eq!(records[0].application, application());
    }
}
