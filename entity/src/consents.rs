//! Data-sharing consent records.

use crate::consent_status::ConsentStatus;
use crate::Id;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::consents::Model)]
pub struct Model {
    #[schema(value_type = Uuid)]
    pub id: Id,

    /// What the consent covers, e.g. "care-team-sharing" or "research-data"
    pub scope: String,

    pub status: ConsentStatus,
}
