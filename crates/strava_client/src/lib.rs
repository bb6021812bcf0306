//! Minimal `StravaApi` trait and basic reqwest-based client for the Strava v3 API.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod auth;
pub mod config;
pub mod http_client;

#[derive(Debug, Error)]
pub enum StravaError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("config file not found: {0}")]
    ConfigNotFound(String),
    #[error("authorization code missing; request one at {authorize_url}")]
    ConfigIncomplete { authorize_url: String },
    #[error("token endpoint rejected the exchange: {0}")]
    Auth(String),
    #[error("unexpected status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("decoding response: {0}")]
    Decode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One activity as returned by `GET /api/v3/athlete/activities`.
///
/// Every field is optional: the API omits heart-rate data for activities
/// recorded without a sensor, and manual uploads can lack almost anything
/// else. Unknown fields in the payload are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawActivity {
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub name: Option<String>,
    pub distance: Option<f64>,
    pub moving_time: Option<f64>,
    pub elapsed_time: Option<f64>,
    pub start_date_local: Option<String>,
    pub total_elevation_gain: Option<f64>,
    pub average_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
}

/// Token-endpoint response, persisted verbatim to the cache file.
///
/// `extra` carries every field besides `access_token` (refresh token,
/// expiry, athlete profile) so the cache keeps the full exchange response.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TokenRecord {
    pub access_token: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl TokenRecord {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            extra: BTreeMap::new(),
        }
    }
}

#[async_trait]
pub trait StravaApi: Send + Sync + 'static {
    /// Exchange the one-time authorization code for an access token.
    async fn exchange_token(
        &self,
        credentials: &config::Credentials,
    ) -> Result<TokenRecord, StravaError>;

    /// Fetch a single page of activities recorded after the `after` epoch.
    async fn activities_page(
        &self,
        access_token: &str,
        after: i64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawActivity>, StravaError>;

    /// Fetch page 1, 2, ... until the API returns an empty page.
    async fn all_activities(
        &self,
        access_token: &str,
        after: i64,
        per_page: u32,
    ) -> Result<Vec<RawActivity>, StravaError>;
}
