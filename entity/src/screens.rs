//! Screen entries in the role navigation catalog.
//!
//! A screen here is declarative routing data (id, title, route path), not a
//! view. Which screens a role sees is fixed in the catalog; tab nesting and
//! menu state are front-end concerns with no counterpart in this service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier for every screen any role can reach.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    CarePlan,
    Insights,
    Caseload,
    CarePlanReview,
    TaskBoard,
    ConsentRegistry,
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenId::CarePlan => write!(fmt, "care_plan"),
            ScreenId::Insights => write!(fmt, "insights"),
            ScreenId::Caseload => write!(fmt, "caseload"),
            ScreenId::CarePlanReview => write!(fmt, "care_plan_review"),
            ScreenId::TaskBoard => write!(fmt, "task_board"),
            ScreenId::ConsentRegistry => write!(fmt, "consent_registry"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::screens::Model)]
pub struct Model {
    pub id: ScreenId,

    /// Menu label the app shows for this screen
    pub title: String,

    /// API route the screen reads its data from
    pub route: String,
}
