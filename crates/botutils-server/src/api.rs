//! `GET /relative-time`: whole units between a civil date and now.

use std::borrow::Cow;

use axum::extract::{rejection::QueryRejection, Query, State};
use relative_time::{relative_difference, timezone_or_default, TimeUnit, DEFAULT_TIMEZONE};
use serde::Deserialize;
use tracing::debug;
use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
use utoipa::openapi::RefOr;
use utoipa::{IntoParams, PartialSchema, ToSchema};

use crate::error::{ApiError, ErrorBody};
use crate::AppState;

/// Schema of the `output` parameter: a string enum over every unit token.
pub struct OutputUnit;

impl PartialSchema for OutputUnit {
    fn schema() -> RefOr<Schema> {
        let object = ObjectBuilder::new()
            .schema_type(Type::String)
            .description(Some("Unit token. Several tokens name the same unit."))
            .enum_values(Some(TimeUnit::TOKENS))
            .build();
        RefOr::T(Schema::Object(object))
    }
}

impl ToSchema for OutputUnit {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("OutputUnit")
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RelativeTimeQuery {
    /// Date in format YYYY-MM-DD or YYYY-MM-DD HH:mm or YYYY-MM-DD HH:mm:ss,
    /// e.g. 2026-01-01, 2026-01-01 14:30 or 2026-01-01 14:30:45
    #[param(example = "2026-01-01 14:30")]
    pub date: String,
    /// IANA timezone name (see https://en.wikipedia.org/wiki/List_of_tz_database_time_zones#List).
    #[param(default = json!(DEFAULT_TIMEZONE), example = "America/New_York")]
    pub timezone: Option<String>,
    /// Unit of time for the result
    #[param(value_type = OutputUnit, inline, example = "days")]
    pub output: TimeUnit,
}

/// Calculate the absolute time difference between a given date and now
#[utoipa::path(
    get,
    path = "/relative-time",
    tag = "relative-time",
    params(RelativeTimeQuery),
    responses(
        (status = 200, description = "Absolute time difference in the specified unit",
            content_type = "text/plain", body = String, example = "42"),
        (status = 400, description = "Invalid date format or timezone", body = ErrorBody),
    )
)]
pub async fn relative_time(
    State(state): State<AppState>,
    query: Result<Query<RelativeTimeQuery>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(query) = query?;
    let timezone = timezone_or_default(query.timezone.as_deref());
    let unit = query.output;

    let value = relative_difference(&query.date, timezone, unit, state.clock.as_ref())?;
    debug!(date = %query.date, timezone, %unit, value, "relative time computed");
    Ok(value.to_string())
}
