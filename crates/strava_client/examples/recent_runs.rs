use std::path::Path;

use strava_client::StravaApi;
use strava_client::auth::{DEFAULT_TOKEN_CACHE_PATH, YamlTokenStore, obtain_access_token};
use strava_client::config::{Credentials, DEFAULT_SECRETS_PATH};
use strava_client::http_client::{DEFAULT_BASE_URL, ReqwestStravaClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::from_path(Path::new(DEFAULT_SECRETS_PATH))?;
    let client = ReqwestStravaClient::new(DEFAULT_BASE_URL);
    let store = YamlTokenStore::new(DEFAULT_TOKEN_CACHE_PATH);

    let token = obtain_access_token(&client, &store, &credentials).await?;
    let activities = client
        .activities_page(&token, 0, 1, 10)
        .await
        .map_err(|e| format!("failed to fetch activities: {}", e))?;

    if activities.is_empty() {
        println!("No activities returned (is the account empty?)");
        return Ok(());
    }

    println!("Latest activities:");
    for a in activities {
        let name = a.name.unwrap_or_else(|| "(no name)".to_string());
        let kind = a.activity_type.unwrap_or_else(|| "?".to_string());
        println!("- [{}] {}", kind, name);
    }

    Ok(())
}
