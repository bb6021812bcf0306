//! Batch export of Strava runs to a semicolon-delimited CSV file.
//!
//! The pipeline is sequential: load credentials, obtain an access token
//! (cache first), page through the activity history, keep the runs, and
//! write one CSV file.

pub mod error;
pub mod transform;
pub mod writer;

use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone};
use strava_client::StravaApi;
use strava_client::auth::{DEFAULT_TOKEN_CACHE_PATH, YamlTokenStore, obtain_access_token};
use strava_client::config::{Credentials, DEFAULT_SECRETS_PATH};
use strava_client::http_client::{DEFAULT_BASE_URL, ReqwestStravaClient};

pub use error::ExportError;

/// Everything `run_export` needs; `Default` matches the plain
/// no-arguments invocation of the binary.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub secrets_path: PathBuf,
    pub token_cache_path: PathBuf,
    pub output_path: PathBuf,
    pub base_url: String,
    /// Only activities after local midnight of this date are fetched.
    pub since: NaiveDate,
    pub per_page: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            secrets_path: PathBuf::from(DEFAULT_SECRETS_PATH),
            token_cache_path: PathBuf::from(DEFAULT_TOKEN_CACHE_PATH),
            output_path: PathBuf::from("strava.csv"),
            base_url: DEFAULT_BASE_URL.to_string(),
            since: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid fixed date"),
            per_page: 200,
        }
    }
}

/// What a finished export produced.
#[derive(Clone, Debug)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub fetched: usize,
    pub exported: usize,
}

/// Run the whole export once. Any failure aborts the run; no partial
/// output file is left behind from earlier stages.
pub async fn run_export(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    let credentials = Credentials::from_path(&options.secrets_path)?;
    let client = ReqwestStravaClient::new(&options.base_url);
    let store = YamlTokenStore::new(&options.token_cache_path);

    let access_token = obtain_access_token(&client, &store, &credentials).await?;

    let after = local_midnight_epoch(options.since);
    let activities = client
        .all_activities(&access_token, after, options.per_page)
        .await?;
    tracing::info!(fetched = activities.len(), "activity history downloaded");

    let rows = transform::transform(&activities, transform::is_run)?;
    writer::write_rows(&options.output_path, &rows)?;
    tracing::info!(
        exported = rows.len(),
        path = %options.output_path.display(),
        "export written"
    );

    Ok(ExportSummary {
        output_path: options.output_path.clone(),
        fetched: activities.len(),
        exported: rows.len(),
    })
}

/// Epoch seconds of local midnight on `date`.
pub fn local_midnight_epoch(date: NaiveDate) -> i64 {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    // A DST gap can swallow midnight; fall back to the UTC reading.
    chrono::Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| midnight.and_utc().timestamp())
}
