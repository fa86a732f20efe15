//! This module holds typed parameters for various endpoint inputs.
//!
//! The purpose of this module is to define and manage the parameters that are used as inputs
//! for different endpoints in the web application. By using typed parameters, we can ensure
//! that the inputs are validated (by type) and correctly formatted before they are processed by the
//! application logic.
//!
//! Each parameter type is represented by a struct or enum, which can be serialized and
//! deserialized as needed. This approach helps to maintain a clear and consistent structure
//! for endpoint inputs, making the codebase easier to understand and maintain.

pub(crate) mod care_task;
pub(crate) mod user;

use serde::Deserialize;
use utoipa::ToSchema;

/// Direction for sorted listings, shared by every endpoint that accepts a
/// `sort_order` query parameter.
#[derive(Debug, Deserialize, ToSchema, Clone)]
#[schema(example = "asc")]
pub(crate) enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

/// Fills in a default sort field and ascending order when a listing request
/// leaves them unspecified.
pub(crate) trait WithSortDefaults {
    type SortField;

    fn apply_sort_defaults(
        sort_by: &mut Option<Self::SortField>,
        sort_order: &mut Option<SortOrder>,
        default_field: Self::SortField,
    ) {
        if sort_by.is_none() {
            *sort_by = Some(default_field);
        }
        if sort_order.is_none() {
            *sort_order = Some(SortOrder::Asc);
        }
    }
}
