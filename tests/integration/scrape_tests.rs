//! Integration tests for the headline scraper
//!
//! These tests use wiremock to serve fixture pages and run the full
//! fetch → extract → report cycle end-to-end.

use headline_scraper::config::{Config, DEFAULT_USER_AGENT};
use headline_scraper::{HeadlineSource, ScrapeError, Scraper};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at `route` on the mock server
async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Returns the numbered lines of a report, without the header
fn report_listing(report_path: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(report_path).expect("Failed to read report");
    content.lines().skip(4).map(str::to_string).collect()
}

#[tokio::test]
async fn test_three_headings_written_in_order() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/news",
        r#"<html><head><title>News</title></head><body>
            <h1>Government announces new policy</h1>
            <h1>Floods sweep through the valley</h1>
            <h1>Scientists discover a new species</h1>
        </body></html>"#,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("headlines.txt");
    let url = format!("{}/news", mock_server.uri());

    let scraper = Scraper::new(&Config::default()).expect("Failed to create scraper");
    let summary = scraper
        .run(&url, Some(&report_path))
        .await
        .expect("Scrape failed");

    assert_eq!(summary.headlines.len(), 3);
    assert_eq!(summary.output_path, report_path);

    let content = std::fs::read_to_string(&report_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], format!("News Headlines Scraped from {}", url));
    assert!(lines[1].starts_with("Date: "));
    assert_eq!(lines[1].len(), "Date: 2024-01-01 00:00:00".len());
    assert_eq!(lines[2], "=".repeat(80));
    assert_eq!(lines[3], "");
    assert_eq!(
        &lines[4..],
        &[
            "1. Government announces new policy",
            "2. Floods sweep through the valley",
            "3. Scientists discover a new species",
        ]
    );
}

#[tokio::test]
async fn test_fixture_listing_matches_expected() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
            <nav>
                <a href="/">Home</a>
                <a href="/sport">Sport</a>
                <a href="/more">See more stories from around the world</a>
            </nav>
            <h3>Local council votes on housing plan</h3>
            <h2>Watch: highlights from last night</h2>
            <h1>Election results announced today</h1>
            <div class="gs-c-promo-heading__title">Rail strike called off at last minute</div>
            <div data-testid="card-headline">Storm damage closes coastal roads</div>
            <h2>Follow us on social media</h2>
            <span class="title">Short title</span>
            <a href="/story/1">Election results announced today</a>
            <a href="/story/2">Hospital waiting lists fall for third month</a>
            <a href="/story/3">breaking news update from the newsroom</a>
        </body></html>"#,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("fixture.txt");

    let scraper = Scraper::new(&Config::default()).unwrap();
    scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .expect("Scrape failed");

    assert_eq!(
        report_listing(&report_path),
        vec![
            "1. Election results announced today",
            "2. Local council votes on housing plan",
            "3. Storm damage closes coastal roads",
            "4. Rail strike called off at last minute",
            "5. See more stories from around the world",
            "6. Hospital waiting lists fall for third month",
        ]
    );
}

#[tokio::test]
async fn test_duplicate_heading_and_link_listed_once() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
            <h2>Markets rally after surprise rate cut</h2>
            <p>Some paragraph in between</p>
            <a href="/markets">Markets rally after surprise rate cut</a>
        </body></html>"#,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("dup.txt");

    let scraper = Scraper::new(&Config::default()).unwrap();
    let summary = scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .unwrap();

    assert_eq!(summary.headlines.len(), 1);
    assert_eq!(
        summary.headlines[0].source,
        HeadlineSource::Selector("h2".to_string())
    );
    assert_eq!(
        report_listing(&report_path),
        vec!["1. Markets rally after surprise rate cut"]
    );
}

#[tokio::test]
async fn test_not_found_writes_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("gone.txt");
    let url = format!("{}/gone", mock_server.uri());

    let scraper = Scraper::new(&Config::default()).unwrap();
    let result = scraper.run(&url, Some(&report_path)).await;

    match result {
        Err(ScrapeError::BadStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected BadStatus, got {:?}", other),
    }
    assert!(!report_path.exists());

    let headlines = scraper.run_soft(&url, Some(&report_path)).await;
    assert!(headlines.is_empty());
    assert!(!report_path.exists());
}

#[tokio::test]
async fn test_server_error_is_bad_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("unavailable.txt");

    let scraper = Scraper::new(&Config::default()).unwrap();
    let result = scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ScrapeError::BadStatus { status: 503, .. }));
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn test_no_headlines_writes_nothing() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        r#"<html><body><h1>Tiny</h1><a href="/">Home</a><p>A paragraph that is not a headline at all</p></body></html>"#,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("empty.txt");
    let url = format!("{}/", mock_server.uri());

    let scraper = Scraper::new(&Config::default()).unwrap();
    let err = scraper.run(&url, Some(&report_path)).await.unwrap_err();

    assert!(matches!(err, ScrapeError::NoHeadlines { .. }));
    assert_eq!(err.exit_code(), 0);
    assert!(err.to_string().contains("No headlines found"));
    assert!(!report_path.exists());

    assert!(scraper.run_soft(&url, Some(&report_path)).await.is_empty());
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Bind to grab a free port, then release it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("offline.txt");

    let scraper = Scraper::new(&Config::default()).unwrap();
    let err = scraper
        .run(&format!("http://127.0.0.1:{}/", port), Some(&report_path))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Network { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!report_path.exists());
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<h1>Too slow to ever be read here</h1>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.fetch.timeout_secs = 1;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("slow.txt");

    let scraper = Scraper::new(&config).unwrap();
    let err = scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Network { .. }));
    assert!(!report_path.exists());
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0 (X11; Linux x86_64) Firefox/120.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<h1>Only served to browsers like Chrome</h1>"),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("ua.txt");

    let mut config = Config::default();
    config.fetch.user_agent = "Mozilla/5.0 (X11; Linux x86_64) Firefox/120.0".to_string();

    let scraper = Scraper::new(&config).unwrap();
    let summary = scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .expect("Request should carry the configured user agent");

    assert_eq!(summary.texts(), vec!["Only served to browsers like Chrome"]);
}

#[test]
fn test_default_user_agent_looks_like_a_browser() {
    let config = Config::default();
    assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
    assert!(DEFAULT_USER_AGENT.starts_with("Mozilla/5.0"));
    assert!(DEFAULT_USER_AGENT.contains("Chrome/"));
    assert_eq!(config.fetch.timeout_secs, 10);
}

#[tokio::test]
async fn test_follows_redirects() {
    let mock_server = MockServer::start().await;
    let target = format!("{}/front-page", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", target.as_str()))
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "/front-page",
        "<html><body><h1>Redirected front page headline</h1></body></html>",
    )
    .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("redirect.txt");
    let url = format!("{}/", mock_server.uri());

    let scraper = Scraper::new(&Config::default()).unwrap();
    let summary = scraper.run(&url, Some(&report_path)).await.unwrap();

    // The report names the requested URL, not the redirect target
    assert_eq!(summary.url, url);
    assert_eq!(
        report_listing(&report_path),
        vec!["1. Redirected front page headline"]
    );
}

#[tokio::test]
async fn test_caps_at_fifty_headlines() {
    let mut body = String::from("<html><body>");
    for i in 0..30 {
        body.push_str(&format!("<h2>Heading story number {:02}</h2>", i));
    }
    for i in 0..40 {
        body.push_str(&format!(
            "<a href=\"/s/{}\">Linked story number {:02} from the wire</a>",
            i, i
        ));
    }
    body.push_str("</body></html>");

    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", &body).await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("capped.txt");

    let scraper = Scraper::new(&Config::default()).unwrap();
    let summary = scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .unwrap();

    assert_eq!(summary.headlines.len(), 50);

    let selector_count = summary
        .headlines
        .iter()
        .take_while(|h| matches!(h.source, HeadlineSource::Selector(_)))
        .count();
    assert_eq!(selector_count, 30);
    assert!(summary.headlines[30..]
        .iter()
        .all(|h| h.source == HeadlineSource::Anchor));

    let listing = report_listing(&report_path);
    assert_eq!(listing.len(), 50);
    assert_eq!(listing[0], "1. Heading story number 00");
    assert_eq!(listing[30], "31. Linked story number 00 from the wire");
    assert_eq!(listing[49], "50. Linked story number 19 from the wire");
}

#[tokio::test]
async fn test_existing_report_is_overwritten() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        "<html><body><h1>Fresh headline for a new day</h1></body></html>",
    )
    .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("existing.txt");
    std::fs::write(&report_path, "old report\n1. Old headline\n2. Older headline\n").unwrap();

    let scraper = Scraper::new(&Config::default()).unwrap();
    scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .unwrap();

    let content = std::fs::read_to_string(&report_path).unwrap();
    assert!(!content.contains("Old headline"));
    assert_eq!(
        report_listing(&report_path),
        vec!["1. Fresh headline for a new day"]
    );
}

#[tokio::test]
async fn test_unwritable_output_is_output_error() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        "<html><body><h1>Headline that cannot be saved</h1></body></html>",
    )
    .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("no-such-dir").join("out.txt");

    let scraper = Scraper::new(&Config::default()).unwrap();
    let err = scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Output(_)));
    assert_eq!(err.exit_code(), 5);
}

#[tokio::test]
async fn test_report_date_taken_after_fetch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h1>Slow page with a late headline</h1></body></html>")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("stamped.txt");

    let started = chrono::Local::now().naive_local();
    let scraper = Scraper::new(&Config::default()).unwrap();
    scraper
        .run(&format!("{}/", mock_server.uri()), Some(&report_path))
        .await
        .unwrap();

    let content = std::fs::read_to_string(&report_path).unwrap();
    let date_line = content.lines().nth(1).unwrap();
    let stamped = chrono::NaiveDateTime::parse_from_str(
        date_line.trim_start_matches("Date: "),
        "%Y-%m-%d %H:%M:%S",
    )
    .expect("Date line should use YYYY-MM-DD HH:MM:SS");

    // The stamp has one-second resolution, so allow for truncation
    assert!(
        stamped >= started + chrono::Duration::seconds(1),
        "report stamped at {} but request started at {}",
        stamped,
        started
    );
}
