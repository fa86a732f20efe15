//! Descriptive insight cards shown on the patient insights screen.
//!
//! Insights are authored text blocks; this service performs no generation or
//! ranking. The optional assistant call that can accompany an insight lives in
//! the domain layer.

use crate::Id;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::insights::Model)]
pub struct Model {
    #[schema(value_type = Uuid)]
    pub id: Id,

    pub title: String,

    /// Why this insight was surfaced to the patient
    pub reason: String,

    /// Where the underlying observation came from (device, survey, chart)
    pub source: String,

    /// Supporting evidence text, when the author supplied any
    pub evidence: Option<String>,

    /// Suggested next step, when the author supplied one
    pub action: Option<String>,
}
