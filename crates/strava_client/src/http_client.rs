//! HTTP client implementation for the Strava v3 API.
//!
//! This module provides a reqwest-based implementation of the [`StravaApi`](crate::StravaApi) trait.

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::Credentials;
use crate::{RawActivity, StravaApi, StravaError, TokenRecord};

/// Production API host; tests point the client at a local mock server instead.
pub const DEFAULT_BASE_URL: &str = "https://www.strava.com";

/// Client for the Strava API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestStravaClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestStravaClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Strava API (e.g., "https://www.strava.com")
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> StravaError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            401 | 403 => StravaError::Auth(body_snippet),
            _ => StravaError::Api {
                status,
                body: body_snippet,
            },
        }
    }
}

#[async_trait]
impl StravaApi for ReqwestStravaClient {
    async fn exchange_token(&self, credentials: &Credentials) -> Result<TokenRecord, StravaError> {
        let url = format!("{}/oauth/token", self.base_url);
        tracing::debug!(client_id = %credentials.client_id, "exchanging authorization code");

        let form = [
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.expose_secret()),
            ("code", credentials.code.as_str()),
            ("grant_type", "authorization_code"),
        ];
        let resp = self.client.post(&url).form(&form).send().await?;

        // The endpoint reports a failed exchange through an `errors` key in
        // the body; the status line is not consulted.
        let payload: serde_json::Value = resp.json().await?;
        if payload.get("errors").is_some() {
            return Err(StravaError::Auth(payload.to_string()));
        }
        serde_json::from_value(payload)
            .map_err(|e| StravaError::Decode(format!("token response: {e}")))
    }

    async fn activities_page(
        &self,
        access_token: &str,
        after: i64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawActivity>, StravaError> {
        let url = format!("{}/api/v3/athlete/activities", self.base_url);
        let pairs: Vec<(&str, String)> = vec![
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
            ("after", after.to_string()),
        ];
        let qp: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let resp = self
            .client
            .get(&url)
            .query(&qp)
            .bearer_auth(access_token)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json().await?)
    }

    async fn all_activities(
        &self,
        access_token: &str,
        after: i64,
        per_page: u32,
    ) -> Result<Vec<RawActivity>, StravaError> {
        let mut activities = Vec::new();
        let mut page = 1u32;
        loop {
            let batch = self
                .activities_page(access_token, after, page, per_page)
                .await?;
            if batch.is_empty() {
                break;
            }
            tracing::debug!(page, received = batch.len(), "fetched activity page");
            activities.extend(batch);
            page += 1;
        }
        Ok(activities)
    }
}
