use cryptotracker_api::{AssetsQuery, Client, Error, HistoryQuery, Interval, NetworkError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn mount(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn coins_result(template: ResponseTemplate) -> Result<Vec<cryptotracker_api::types::Coin>, Error> {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/assets", template).await;
    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    client.get_coins(&AssetsQuery::default()).await
}

#[tokio::test]
async fn get_coins_success() {
    let body = load_fixture("assets.json");
    let result = coins_result(
        ResponseTemplate::new(200).set_body_raw(body.as_str(), "application/json"),
    )
    .await;
    assert!(result.is_ok());

    let coins = result.unwrap();
    assert_eq!(coins.len(), 2);
    assert_eq!(coins[0].id, "bitcoin");
    assert_eq!(coins[0].price_usd, 62828.15);
    assert_eq!(coins[1].symbol, "ETH");
}

#[tokio::test]
async fn get_coins_mislabelled_html_is_decoded() {
    let body = load_fixture("assets.json");
    let result = coins_result(ResponseTemplate::new(200).set_body_raw(body.as_str(), "text/html")).await;
    let coins = result.unwrap();
    assert_eq!(coins.len(), 2);
    assert_eq!(coins[1].rank, 2);
}

#[tokio::test]
async fn get_coins_plain_text_is_serialization() {
    let body = load_fixture("assets.json");
    let result = coins_result(ResponseTemplate::new(200).set_body_raw(body.as_str(), "text/plain")).await;
    assert!(matches!(
        result,
        Err(Error::Network(NetworkError::Serialization))
    ));
}

#[tokio::test]
async fn get_coins_malformed_json() {
    let result = coins_result(
        ResponseTemplate::new(200).set_body_raw("{not valid json}", "application/json"),
    )
    .await;
    assert!(matches!(
        result,
        Err(Error::Network(NetworkError::Serialization))
    ));
}

#[tokio::test]
async fn get_coins_server_error() {
    let result = coins_result(ResponseTemplate::new(503).set_body_string("Service Unavailable")).await;
    assert!(matches!(
        result,
        Err(Error::Network(NetworkError::ServerError))
    ));
}

#[tokio::test]
async fn get_coins_rate_limited() {
    let result = coins_result(ResponseTemplate::new(429)).await;
    assert!(matches!(
        result,
        Err(Error::Network(NetworkError::TooManyRequests))
    ));
}

#[tokio::test]
async fn get_coins_request_timeout() {
    let result = coins_result(ResponseTemplate::new(408)).await;
    assert!(matches!(
        result,
        Err(Error::Network(NetworkError::RequestTimeout))
    ));
}

#[tokio::test]
async fn get_coin_not_found_is_unknown() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/assets/nonexistent",
        ResponseTemplate::new(404).set_body_raw(r#"{"error":"nonexistent not found"}"#, "application/json"),
    )
    .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client.get_coin("nonexistent").await;
    assert!(matches!(result, Err(Error::Network(NetworkError::Unknown))));
}

#[tokio::test]
async fn get_coin_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("asset.json");
    mount(
        &mock_server,
        "/assets/bitcoin",
        ResponseTemplate::new(200).set_body_raw(body.as_str(), "application/json; charset=utf-8"),
    )
    .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let coin = client.get_coin("bitcoin").await.unwrap();
    assert_eq!(coin.name, "Bitcoin");
    assert_eq!(coin.rank, 1);
}

#[tokio::test]
async fn get_coin_escapes_slash_in_id() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("asset.json");
    mount(
        &mock_server,
        "/assets/a%2Fb",
        ResponseTemplate::new(200).set_body_raw(body.as_str(), "application/json"),
    )
    .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let coin = client.get_coin("a/b").await.unwrap();
    assert_eq!(coin.id, "bitcoin");
}

#[tokio::test]
async fn get_coin_rejects_parent_segment_without_request() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/assets", ResponseTemplate::new(200)).await;

    let client = Client::with_base_url(&mock_server.uri())
        .unwrap()
        .with_api_key("secret-key");
    let result = client.get_coin("..").await;
    assert!(matches!(result, Err(Error::InvalidCoinId(_))));

    let result = client.get_coin_history("..", &HistoryQuery::last_days(1).unwrap()).await;
    assert!(matches!(result, Err(Error::InvalidCoinId(_))));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_coin_history_sends_window() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("history.json");

    let query = HistoryQuery::last_days(5).unwrap().with_interval(Interval::H6);
    Mock::given(method("GET"))
        .and(path("/assets/bitcoin/history"))
        .and(query_param("interval", "h6"))
        .and(query_param("start", query.start.timestamp_millis().to_string()))
        .and(query_param("end", query.end.timestamp_millis().to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.as_str(), "application/json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let prices = client.get_coin_history("bitcoin", &query).await.unwrap();
    assert_eq!(prices.len(), 3);
    assert_eq!(prices[0].date_time.timestamp_millis(), 1717200000000);
}

#[tokio::test]
async fn api_key_is_sent_as_bearer_token() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("assets.json");

    Mock::given(method("GET"))
        .and(path("/assets"))
        .and(header("authorization", "Bearer secret-key"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.as_str(), "application/json"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri())
        .unwrap()
        .with_api_key("secret-key");
    let coins = client
        .get_coins(&AssetsQuery::default().with_limit(2))
        .await
        .unwrap();
    assert_eq!(coins.len(), 2);
}

#[tokio::test]
async fn connection_failure_is_request_failed() {
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let result = client.get_coins(&AssetsQuery::default()).await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}
