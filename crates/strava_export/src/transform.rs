//! Flattening of raw activity records into CSV-ready rows.

use strava_client::RawActivity;

use crate::error::{ExportError, ExportResult};

/// One line of the output file, units already converted.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportRow {
    /// Calendar date, the first ten characters of `start_date_local`.
    pub start_date: String,
    pub distance_km: f64,
    pub moving_time_min: f64,
    pub elapsed_time_min: f64,
    pub elevation_m: Option<f64>,
    pub average_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
    pub name: Option<String>,
}

/// Default selection: keep only runs.
pub fn is_run(activity: &RawActivity) -> bool {
    activity.activity_type.as_deref() == Some("Run")
}

/// Convert every activity selected by `keep` into an [`ExportRow`],
/// preserving input order.
///
/// A selected activity missing one of the fields that feed a conversion
/// fails the whole batch with [`ExportError::MissingField`].
pub fn transform<F>(activities: &[RawActivity], keep: F) -> ExportResult<Vec<ExportRow>>
where
    F: Fn(&RawActivity) -> bool,
{
    activities.iter().filter(|a| keep(a)).map(to_row).collect()
}

fn to_row(activity: &RawActivity) -> ExportResult<ExportRow> {
    let distance = require("distance", activity.distance)?;
    let moving_time = require("moving_time", activity.moving_time)?;
    let elapsed_time = require("elapsed_time", activity.elapsed_time)?;
    let start = activity
        .start_date_local
        .as_deref()
        .ok_or(ExportError::MissingField("start_date_local"))?;

    Ok(ExportRow {
        start_date: start.chars().take(10).collect(),
        distance_km: distance / 1000.0,
        moving_time_min: moving_time / 60.0,
        elapsed_time_min: elapsed_time / 60.0,
        elevation_m: activity.total_elevation_gain,
        average_heartrate: activity.average_heartrate,
        max_heartrate: activity.max_heartrate,
        name: activity.name.clone(),
    })
}

fn require(field: &'static str, value: Option<f64>) -> ExportResult<f64> {
    value.ok_or(ExportError::MissingField(field))
}
