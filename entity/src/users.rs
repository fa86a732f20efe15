//! Sample user records shown by the companion app.

use crate::roles::Role;
use crate::Id;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::users::Model)]
pub struct Model {
    #[schema(value_type = Uuid)]
    pub id: Id,

    /// Display name shown in the app header
    pub name: String,

    /// Which of the four role screen sets this user sees
    pub role: Role,
}
