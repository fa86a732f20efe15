use super::RejectionType;
use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};
use log::*;
use semver::Version;
use service::config::ApiVersion;

/// Extractor that enforces the `x-version` request header. Requests carrying
/// a missing, malformed, or unsupported version never reach their handler.
pub(crate) struct CompareApiVersion(pub Version);

impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> core::result::Result<Self, Self::Rejection> {
        let field_name = ApiVersion::field_name();

        let header_value = parts
            .headers
            .get(field_name)
            .ok_or_else(|| {
                warn!("Missing {field_name} header");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Missing {field_name} header"),
                )
            })?
            .to_str()
            .map_err(|_| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid {field_name} header value"),
                )
            })?;

        let version = Version::parse(header_value).map_err(|_| {
            warn!("Failed to parse {field_name} header value: {header_value}");
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid {field_name} header value: {header_value}"),
            )
        })?;

        if !ApiVersion::versions().contains(&header_value) {
            warn!("Unsupported API version requested: {header_value}");
            return Err((
                StatusCode::BAD_REQUEST,
                format!("Unsupported API version: {header_value}"),
            ));
        }

        debug!("Request API version: {version}");

        Ok(CompareApiVersion(version))
    }
}
