use strava_client::http_client::ReqwestStravaClient;
use strava_client::{StravaApi, StravaError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn activity_page(count: usize, label: &str) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "type": "Run",
                "name": format!("{label} {i}"),
                "distance": 5000.0,
                "moving_time": 1500,
                "elapsed_time": 1600,
                "start_date_local": "2024-05-01T10:00:00Z"
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

#[tokio::test]
async fn all_activities_walks_pages_until_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "200"))
        .and(query_param("after", "1704063600"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(200, "p1")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(200, "p2")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(0, "p3")))
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    let activities = client
        .all_activities("tok", 1704063600, 200)
        .await
        .expect("activities");

    // Two full pages concatenated in fetch order, terminator page excluded
    assert_eq!(activities.len(), 400);
    assert_eq!(activities[0].name.as_deref(), Some("p1 0"));
    assert_eq!(activities[399].name.as_deref(), Some("p2 199"));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 3);
}

#[tokio::test]
async fn empty_first_page_means_no_activities() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(0, "none")))
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    let activities = client.all_activities("tok", 0, 200).await.expect("empty");
    assert!(activities.is_empty());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn activities_request_carries_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(header("authorization", "Bearer tok-77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(0, "none")))
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    let activities = client
        .all_activities("tok-77", 0, 200)
        .await
        .expect("empty");
    assert!(activities.is_empty());
}

#[tokio::test]
async fn unauthorized_page_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Authorization Error"
        })))
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    let err = client.activities_page("bad", 0, 1, 200).await.unwrap_err();
    match err {
        StravaError::Auth(body) => assert!(body.contains("Authorization Error")),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = ReqwestStravaClient::new(&server.uri());
    let err = client.activities_page("tok", 0, 1, 200).await.unwrap_err();
    match err {
        StravaError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn base_url_trailing_slash_is_handled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(activity_page(0, "none")))
        .mount(&server)
        .await;

    // Add a trailing slash to the base URL to ensure trim_end_matches('/') works
    let base = format!("{}/", server.uri());
    let client = ReqwestStravaClient::new(&base);
    let activities = client.all_activities("tok", 0, 200).await.expect("empty");
    assert!(activities.is_empty());
}
