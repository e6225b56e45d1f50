use masklist_engine::{FailureKind, FeedSettings, Fetcher, RecordLocator, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POINTS: &str = r#"{"type":"FeatureCollection","features":[
    {"type":"Feature","properties":{"id":"1","name":"大安藥局","phone":"02-1","address":"台北市大安區1號","mask_adult":5,"mask_child":2,"updated":"2020/02/10 12:00:00"},"geometry":{"type":"Point","coordinates":[121.54,25.03]}},
    {"type":"Feature","properties":{"id":"2","name":"板橋藥局","phone":"02-2","address":"新北市板橋區2號","mask_adult":0,"mask_child":0,"updated":"2020/02/10 12:00:00"},"geometry":{"type":"Point","coordinates":[121.46,25.01]}}
]}"#;

fn settings_for(server: &MockServer, route: &str) -> FeedSettings {
    FeedSettings {
        url: format!("{}{route}", server.uri()),
        ..FeedSettings::default()
    }
}

async fn serve(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetcher_decodes_feed() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/points.json",
        ResponseTemplate::new(200).set_body_raw(POINTS, "application/json"),
    )
    .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server, "/points.json"));
    let records = fetcher.fetch().await.expect("fetch ok");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "大安藥局");
    assert_eq!(records[1].mask_adult, 0);
}

#[tokio::test]
async fn fetcher_accepts_positional_locator() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/points.json",
        ResponseTemplate::new(200).set_body_raw(POINTS, "application/json"),
    )
    .await;

    let settings = FeedSettings {
        locator: RecordLocator::Position(1),
        ..settings_for(&server, "/points.json")
    };
    let records = ReqwestFetcher::new(settings).fetch().await.expect("fetch ok");
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn fetcher_returns_empty_list_for_empty_feed() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/empty.json",
        ResponseTemplate::new(200)
            .set_body_raw(r#"{"type":"FeatureCollection","features":[]}"#, "application/json"),
    )
    .await;

    let records = ReqwestFetcher::new(settings_for(&server, "/empty.json"))
        .fetch()
        .await
        .expect("fetch ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    serve(&server, "/missing", ResponseTemplate::new(404)).await;

    let err = ReqwestFetcher::new(settings_for(&server, "/missing"))
        .fetch()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_fails_on_malformed_body() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/broken.json",
        ResponseTemplate::new(200).set_body_raw(r#"{"type":"FeatureCollection","features":"#, "application/json"),
    )
    .await;

    let err = ReqwestFetcher::new(settings_for(&server, "/broken.json"))
        .fetch()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/large.json",
        ResponseTemplate::new(200).set_body_raw(POINTS, "application/json"),
    )
    .await;

    let settings = FeedSettings {
        max_bytes: 10,
        ..settings_for(&server, "/large.json")
    };
    let err = ReqwestFetcher::new(settings).fetch().await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 10, .. }));
}

#[tokio::test]
async fn fetcher_reports_transport_failure() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/points.json", listener.local_addr().unwrap());
    drop(listener);

    let settings = FeedSettings {
        url,
        ..FeedSettings::default()
    };
    let err = ReqwestFetcher::new(settings).fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn fetcher_rejects_invalid_url() {
    let settings = FeedSettings {
        url: "not a url".to_string(),
        ..FeedSettings::default()
    };
    let err = ReqwestFetcher::new(settings).fetch().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
