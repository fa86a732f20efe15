use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four fixed user categories. A user's role determines which screen set
/// the companion app shows and never changes at runtime.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Clinician,
    Coordinator,
    Admin,
}

impl Role {
    /// All roles, in the order the role menu presents them.
    pub fn all() -> [Role; 4] {
        [
            Role::Patient,
            Role::Clinician,
            Role::Coordinator,
            Role::Admin,
        ]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RoleParseError;

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(role: &str) -> Result<Role, Self::Err> {
        match role.to_lowercase().as_str() {
            "patient" => Ok(Role::Patient),
            "clinician" => Ok(Role::Clinician),
            "coordinator" => Ok(Role::Coordinator),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleParseError),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(fmt, "patient"),
            Role::Clinician => write!(fmt, "clinician"),
            Role::Coordinator => write!(fmt, "coordinator"),
            Role::Admin => write!(fmt, "admin"),
        }
    }
}
