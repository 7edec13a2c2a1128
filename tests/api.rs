use std::{collections::HashMap, net::TcpListener, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use carrier_scrape::{
    domain::QueryIdentifier,
    services::{CsvExporter, FetchError, PageFetcher, RawDocument},
    startup::run,
};
use tempfile::TempDir;

struct FakeRegistry {
    pages: HashMap<QueryIdentifier, String>,
    ready: bool,
}

#[async_trait]
impl PageFetcher for FakeRegistry {
    async fn ensure_ready(&self) -> Result<(), FetchError> {
        match self.ready {
            true => Ok(()),
            false => Err(FetchError::Unavailable("connection refused".to_string())),
        }
    }

    async fn fetch(&self, query: QueryIdentifier) -> Result<RawDocument, FetchError> {
        self.pages
            .get(&query)
            .cloned()
            .ok_or(FetchError::Navigation {
                url: format!("https://registry.test/?query_string={}", query),
                message: "net::ERR_CONNECTION_RESET".to_string(),
            })
    }
}

fn snapshot(legal_name: &str, entity_type: &str, operating_status: &str) -> String {
    format!(
        r#"<html><body><table>
            <tr><th>Entity Type:</th><td>{entity_type}</td></tr>
            <tr><th>Operating Status:</th><td>{operating_status}</td></tr>
            <tr><th>Legal Name:</th><td>{legal_name}</td></tr>
            <tr><th>Inspections</th>
                <td align="center" class="queryfield">3</td>
                <td align="center" class="queryfield">1</td></tr>
        </table>
        <table><tr><td>General Freight</td><td><font>X</font></td></tr></table>
        </body></html>"#
    )
}

fn registry() -> FakeRegistry {
    FakeRegistry {
        pages: HashMap::from([
            (100, snapshot("Broker Bros", "BROKER", "AUTHORIZED")),
            (101, snapshot("Acme Trucking", "CARRIER", "AUTHORIZED")),
        ]),
        ready: true,
    }
}

struct TestApp {
    address: String,
    export_path: PathBuf,
    client: reqwest::Client,
    _export_dir: TempDir,
}

fn spawn_app(fetcher: FakeRegistry) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let export_dir = tempfile::tempdir().unwrap();
    let export_path = export_dir.path().join("temp_data.csv");

    let server = run(
        listener,
        Arc::new(fetcher),
        CsvExporter::new(export_path.clone()),
    )
    .expect("Failed to build server");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        export_path,
        client: reqwest::Client::new(),
        _export_dir: export_dir,
    }
}

impl TestApp {
    async fn post_extract(&self, start: &str, end: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/extract", self.address))
            .form(&[("start_query", start), ("end_query", end)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    fn download_url(&self) -> String {
        format!("{}/download/{}", self.address, self.export_path.display())
    }
}

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app(registry());

    let response = app
        .client
        .get(format!("{}/health_check", app.address))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.content_length(), Some(0));
}

#[tokio::test]
async fn index_renders_the_query_form() {
    let app = spawn_app(registry());

    let response = app.client.get(&app.address).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"name="start_query""#));
    assert!(body.contains(r#"name="end_query""#));
}

#[tokio::test]
async fn extract_shows_and_exports_only_accepted_carriers() {
    let app = spawn_app(registry());

    let response = app.post_extract("100", "102").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Acme Trucking"));
    assert!(!body.contains("Broker Bros"));
    assert!(body.contains("2 skipped"));

    let csv = std::fs::read_to_string(&app.export_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Entity Type,Operating Status,Legal Name,Vehicle,Driver,General_Freight_Output",
            "CARRIER,AUTHORIZED,Acme Trucking,3,1,Yes",
        ]
    );
}

#[tokio::test]
async fn inverted_range_is_an_empty_result() {
    let app = spawn_app(registry());

    let response = app.post_extract("5", "1").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("0 carriers accepted"));
    assert_eq!(std::fs::read_to_string(&app.export_path).unwrap(), "");
}

#[tokio::test]
async fn non_numeric_bounds_are_rejected() {
    let app = spawn_app(registry());

    let response = app.post_extract("one", "10").await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn zero_bounds_are_rejected() {
    let app = spawn_app(registry());

    for (start, end) in [("0", "5"), ("1", "0")] {
        let response = app.post_extract(start, end).await;
        assert_eq!(response.status().as_u16(), 400);
    }
    assert!(!app.export_path.exists());
}

#[tokio::test]
async fn unavailable_browser_fails_the_whole_batch() {
    let mut fetcher = registry();
    fetcher.ready = false;
    let app = spawn_app(fetcher);

    let response = app.post_extract("100", "101").await;

    assert_eq!(response.status().as_u16(), 503);
    assert!(!app.export_path.exists());
}

#[tokio::test]
async fn download_serves_the_export_as_attachment() {
    let app = spawn_app(registry());
    app.post_extract("101", "101").await;

    let response = app.client.get(app.download_url()).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let headers = response.headers();
    assert!(headers["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(headers["content-disposition"]
        .to_str()
        .unwrap()
        .contains("all_carrier_data.csv"));
    let body = response.text().await.unwrap();
    assert!(body.contains("Acme Trucking"));
}

#[tokio::test]
async fn download_refuses_other_paths() {
    let app = spawn_app(registry());
    app.post_extract("101", "101").await;

    let response = app
        .client
        .get(format!("{}/download/Cargo.toml", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn details_shows_unfiltered_fields_and_verdict() {
    let app = spawn_app(registry());

    let response = app
        .client
        .get(format!("{}/details/100", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Broker Bros"));
    assert!(body.contains("Rejected"));
}

#[tokio::test]
async fn details_for_unreachable_page_is_bad_gateway() {
    let app = spawn_app(registry());

    let response = app
        .client
        .get(format!("{}/details/999", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 502);
}
