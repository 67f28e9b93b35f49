use super::*;

fn test_client(base_url: &str, path: &str) -> ParseClient {
    ParseClient::with_base_url(base_url, path, 30, "election-parser-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn endpoint_joins_base_and_path() {
    let client = test_client("http://localhost:8080", "/parse-and-format");
    assert_eq!(
        client.endpoint().as_str(),
        "http://localhost:8080/parse-and-format"
    );
}

#[test]
fn endpoint_strips_duplicate_slashes() {
    let client = test_client("https://parser.example.org/", "/api/parse-and-format/");
    assert_eq!(
        client.endpoint().as_str(),
        "https://parser.example.org/api/parse-and-format"
    );
}

#[test]
fn empty_path_falls_back_to_default() {
    let client = test_client("http://localhost:8080", "");
    assert_eq!(
        client.endpoint().as_str(),
        "http://localhost:8080/parse-and-format"
    );
}

#[test]
fn bare_slash_path_falls_back_to_default() {
    let client = test_client("http://localhost:8080/", "/");
    assert_eq!(
        client.endpoint().as_str(),
        "http://localhost:8080/parse-and-format"
    );
}

#[test]
fn from_config_posts_to_the_configured_path() {
    let config = AppConfig {
        env: election_parser_core::Environment::Test,
        api_url: Url::parse("https://parser.example.org/").expect("url"),
        api_path: normalize_api_path(""),
        bind_addr: "127.0.0.1:3000".parse().expect("addr"),
        log_level: "info".to_string(),
        request_timeout_secs: 5,
        user_agent: "election-parser-test/0.1".to_string(),
    };
    let client = ParseClient::from_config(&config).expect("client");
    assert_eq!(
        client.endpoint().as_str(),
        format!("https://parser.example.org{}", config.api_path)
    );
    assert_eq!(
        client.endpoint().as_str(),
        "https://parser.example.org/parse-and-format"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = ParseClient::with_base_url("not a url", "/parse-and-format", 30, "ua");
    assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
}

#[test]
fn status_error_maps_to_transport_status() {
    let err: TransportError = ClientError::Status {
        status: 422,
        body: "unsupported archive".to_string(),
    }
    .into();
    assert_eq!(
        err,
        TransportError::Status {
            status: 422,
            body: "unsupported archive".to_string()
        }
    );
    assert_eq!(err.to_string(), "Server error: 422 - unsupported archive");
}
