use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status of a data-sharing consent record. Fixture data only; there is no
/// grant/revoke workflow or audit trail in this service.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    /// Consent is in force
    #[default]
    Active,
    /// Requested but not yet confirmed by the patient
    Pending,
    /// Withdrawn by the patient
    Revoked,
}

impl std::fmt::Display for ConsentStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsentStatus::Active => write!(fmt, "active"),
            ConsentStatus::Pending => write!(fmt, "pending"),
            ConsentStatus::Revoked => write!(fmt, "revoked"),
        }
    }
}
