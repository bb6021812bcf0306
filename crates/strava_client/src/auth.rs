//! Access-token acquisition with a file-backed cache.

use std::path::PathBuf;

use crate::config::Credentials;
use crate::{StravaApi, StravaError, TokenRecord};

/// Where the exchanged token lands unless the caller overrides it.
pub const DEFAULT_TOKEN_CACHE_PATH: &str = "access_token.yaml";

/// Storage for the exchanged token, injectable so tests can substitute it.
pub trait TokenStore: Send + Sync {
    /// Return the cached record, or `None` when nothing usable is stored.
    fn load(&self) -> Result<Option<TokenRecord>, StravaError>;
    /// Persist the record, replacing whatever was stored before.
    fn save(&self, record: &TokenRecord) -> Result<(), StravaError>;
}

/// `TokenStore` backed by a YAML file.
#[derive(Clone, Debug)]
pub struct YamlTokenStore {
    path: PathBuf,
}

impl YamlTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for YamlTokenStore {
    fn load(&self) -> Result<Option<TokenRecord>, StravaError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&text)?;
        // A file that parses but has no usable `access_token` counts as a
        // miss; the caller re-exchanges and overwrites it.
        Ok(serde_yaml::from_value(value).ok())
    }

    fn save(&self, record: &TokenRecord) -> Result<(), StravaError> {
        let text = serde_yaml::to_string(record)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Return a usable access token, touching the network only on a cache miss.
///
/// A cached token is returned as-is; nothing checks whether it has expired.
/// On a miss the authorization code is exchanged once and the full response
/// is persisted through `store` before the token is handed back.
pub async fn obtain_access_token(
    client: &dyn StravaApi,
    store: &dyn TokenStore,
    credentials: &Credentials,
) -> Result<String, StravaError> {
    if let Some(record) = store.load()? {
        tracing::debug!("reusing cached access token");
        return Ok(record.access_token);
    }
    let record = client.exchange_token(credentials).await?;
    store.save(&record)?;
    tracing::info!("exchanged authorization code and cached the token");
    Ok(record.access_token)
}
