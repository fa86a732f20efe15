use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct CurrentParams {
    /// Role whose sample user acts as the current user for the session
    pub(crate) role: String,
}
