use axum::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationStatus, CreditCardApplication};

/// Stored envelope around an application; everything but `application` is
/// assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub application: CreditCardApplication,
    pub status: ApplicationStatus,
    pub received_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn pending(id: ApplicationId, application: CreditCardApplication) -> Self {
        Self {
            id,
            application,
            status: ApplicationStatus::Pending,
            received_at: Utc::now(),
        }
    }
}

/// Storage capability the intake flow writes through.
///
/// Implementations own duplicate handling and consistency under concurrent
/// writes; the caller never retries.
#[async_trait]
pub trait CreditCardApplicationRepository: Send + Sync {
    async fn add(&self, application: CreditCardApplication) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("application already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
