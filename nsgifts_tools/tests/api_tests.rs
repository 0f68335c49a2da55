use chrono::Utc;
use httpmock::{prelude::*, Mock};
use nsgifts_tools::{NsGiftsApi, NsGiftsApiError, NsGiftsConfig};
use serde_json::json;

fn api_for(server: &MockServer) -> NsGiftsApi {
    let _ = env_logger::try_init();
    let config = NsGiftsConfig::new(server.base_url(), "merchant@example.com", "sekrit");
    NsGiftsApi::new(config).expect("client should build")
}

fn mock_token(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/get_token");
        then.status(200).json_body(json!({
            "access_token": "tok-1",
            "valid_thru": (Utc::now() + chrono::Duration::hours(2)).timestamp(),
        }));
    })
}

#[tokio::test]
async fn token_is_fetched_once_while_current() {
    let server = MockServer::start();
    let token_mock = mock_token(&server);
    let api = api_for(&server);

    let first = api.access_token().await.unwrap();
    let second = api.access_token().await.unwrap();

    assert_eq!(first, "tok-1");
    assert_eq!(second, "tok-1");
    token_mock.assert_hits(1);
}

#[tokio::test]
async fn expired_token_is_fetched_again() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/get_token");
        then.status(200).json_body(json!({
            "access_token": "tok-stale",
            "valid_thru": (Utc::now() - chrono::Duration::minutes(1)).timestamp(),
        }));
    });
    let api = api_for(&server);

    api.access_token().await.unwrap();
    api.access_token().await.unwrap();

    token_mock.assert_hits(2);
}

#[tokio::test]
async fn bad_credentials_are_reported_as_such() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/get_token");
        then.status(401).body("unauthorized");
    });
    let api = api_for(&server);

    let err = api.access_token().await.unwrap_err();
    assert!(matches!(err, NsGiftsApiError::BadCredentials));
}

#[tokio::test]
async fn create_pay_fetch_happy_path() {
    let server = MockServer::start();
    mock_token(&server);
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/create_order");
        then.status(200).json_body(json!({"status": "created"}));
    });
    let pay_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/pay_order");
        then.status(200).json_body(json!({"status": "paid"}));
    });
    let info_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/order_info");
        then.status(200).json_body(json!({"status": "completed", "pins": ["ABC-1"]}));
    });
    let api = api_for(&server);

    let custom_id = api.create_order(28, 1.0, "").await.unwrap();
    api.pay_order(&custom_id).await.unwrap();
    let result = api.order_info(&custom_id).await.unwrap();

    assert_eq!(result.pins, vec!["ABC-1"]);
    assert!(result.has_pins());
    create_mock.assert();
    pay_mock.assert();
    info_mock.assert();
}

#[tokio::test]
async fn each_created_order_gets_a_fresh_custom_id() {
    let server = MockServer::start();
    mock_token(&server);
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/create_order");
        then.status(200).json_body(json!({"status": "created"}));
    });
    let api = api_for(&server);

    let first = api.create_order(28, 1.0, "").await.unwrap();
    let second = api.create_order(28, 1.0, "").await.unwrap();
    assert_ne!(first, second);
}

#[tokio::test]
async fn create_order_failure_carries_status_and_body() {
    let server = MockServer::start();
    mock_token(&server);
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/create_order");
        then.status(500).body("out of stock");
    });
    let api = api_for(&server);

    let err = api.create_order(33, 1.0, "").await.unwrap_err();
    match err {
        NsGiftsApiError::QueryError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "out of stock");
        },
        other => panic!("expected QueryError, got {other:?}"),
    }
}

#[tokio::test]
async fn order_info_422_is_a_validation_error() {
    let server = MockServer::start();
    mock_token(&server);
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/order_info");
        then.status(422).body("unknown custom_id");
    });
    let api = api_for(&server);

    let err = api.order_info(&"nope".into()).await.unwrap_err();
    assert!(matches!(err, NsGiftsApiError::ValidationError(_)));
}

#[tokio::test]
async fn balance_accepts_bare_number_and_keyed_object() {
    let server = MockServer::start();
    mock_token(&server);
    let mut bare = server.mock(|when, then| {
        when.method(POST).path("/api/v1/check_balance");
        then.status(200).json_body(json!(41.5));
    });
    let api = api_for(&server);
    assert_eq!(api.check_balance().await.unwrap(), 41.5);
    bare.delete();

    server.mock(|when, then| {
        when.method(POST).path("/api/v1/check_balance");
        then.status(200).json_body(json!({"balance": 3.0}));
    });
    assert_eq!(api.check_balance().await.unwrap(), 3.0);
}

#[tokio::test]
async fn balance_failure_is_an_error_not_a_zero() {
    let server = MockServer::start();
    mock_token(&server);
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/check_balance");
        then.status(503).body("maintenance");
    });
    let api = api_for(&server);

    let err = api.check_balance().await.unwrap_err();
    assert!(matches!(err, NsGiftsApiError::QueryError { status: 503, .. }));
}

#[tokio::test]
async fn whitelist_listing_accepts_both_shapes() {
    let server = MockServer::start();
    mock_token(&server);
    let mut bare = server.mock(|when, then| {
        when.method(GET).path("/api/v1/ip-whitelist/list");
        then.status(200).json_body(json!(["10.0.0.1", "10.0.0.2"]));
    });
    let api = api_for(&server);
    assert_eq!(api.whitelisted_ips().await.unwrap(), vec!["10.0.0.1", "10.0.0.2"]);
    bare.delete();

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/ip-whitelist/list");
        then.status(200).json_body(json!({"data": ["10.0.0.3"]}));
    });
    assert_eq!(api.whitelisted_ips().await.unwrap(), vec!["10.0.0.3"]);
}

#[tokio::test]
async fn add_ip_posts_the_address() {
    let server = MockServer::start();
    mock_token(&server);
    let add_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/ip-whitelist/add").json_body(json!({"ip": "10.1.1.1"}));
        then.status(200).json_body(json!({"status": "ok"}));
    });
    let api = api_for(&server);

    api.add_ip("10.1.1.1").await.unwrap();
    add_mock.assert();
}
