use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use crate::StravaError;

/// Where credentials are read from unless the caller overrides it.
pub const DEFAULT_SECRETS_PATH: &str = "secrets.yaml";

/// Value the secrets template ships with before a real code is pasted in.
const CODE_PLACEHOLDER: &str = "TODO";

const AUTHORIZE_ENDPOINT: &str = "http://www.strava.com/oauth/authorize";
const REDIRECT_URI: &str = "http://localhost/exchange_token";
const SCOPE: &str = "activity:read_all";

/// Application credentials plus the one-time authorization code.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: SecretString,
    pub code: String,
}

#[derive(Debug, Deserialize)]
struct RawSecrets {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    code: Option<String>,
}

impl Credentials {
    /// Load credentials from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, StravaError> {
        if !path.exists() {
            return Err(StravaError::ConfigNotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Testable helper that parses credentials from YAML text. Keeps
    /// `from_path()` down to the filesystem lookup.
    pub fn from_yaml(text: &str) -> Result<Self, StravaError> {
        let raw: RawSecrets = serde_yaml::from_str(text)?;
        let code = match raw.code {
            Some(code) if !code.is_empty() && code != CODE_PLACEHOLDER => code,
            _ => {
                return Err(StravaError::ConfigIncomplete {
                    authorize_url: authorize_url(&raw.client_id),
                });
            }
        };
        Ok(Self {
            client_id: raw.client_id,
            client_secret: SecretString::new(raw.client_secret.into()),
            code,
        })
    }
}

/// Browser URL the user visits to obtain an authorization code for this app.
pub fn authorize_url(client_id: &str) -> String {
    let mut url = Url::parse(AUTHORIZE_ENDPOINT).expect("static authorize endpoint parses");
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", REDIRECT_URI)
        .append_pair("approval_prompt", "force")
        .append_pair("scope", SCOPE);
    url.to_string()
}
