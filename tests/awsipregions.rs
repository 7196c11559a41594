use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use std::net::TcpListener;
use std::process::Output;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/*-------------------------------------------------------------------------------------------------
  awsipregions Binary Tests
-------------------------------------------------------------------------------------------------*/

const TEST_JSON: &str = r#"{
  "syncToken": "1640995200",
  "createDate": "2022-01-01-00-00-00",
  "prefixes": [
    {"ip_prefix": "10.0.0.0/8", "region": "us-east-1", "network_border_group": "us-east-1", "service": "EC2"},
    {"ip_prefix": "10.1.0.0/16", "region": "us-west-2", "network_border_group": "us-west-2", "service": "EC2"},
    {"ip_prefix": "172.16.0.0/12", "region": "us-east-1", "network_border_group": "us-east-1", "service": "S3"},
    {"ip_prefix": "10.2.0.0/16", "region": "us-east-1", "network_border_group": "us-east-1", "service": "EC2"}
  ],
  "ipv6_prefixes": []
}"#;

/// Start a mock AWS IP Ranges endpoint expecting `requests` GETs; returns the server and the
/// URL to pass to `--url`.
async fn ip_ranges_server(response: ResponseTemplate, requests: u64) -> (MockServer, String) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip-ranges.json"))
        .respond_with(response)
        .expect(requests)
        .mount(&mock_server)
        .await;

    let url = format!("{}/ip-ranges.json", mock_server.uri());
    (mock_server, url)
}

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

/// Run the binary against `url` off the async runtime's thread.
async fn awsipregions(url: &str, args: &[&str]) -> Output {
    let mut command = Command::cargo_bin("awsipregions").unwrap();
    command
        .env_remove("AWSIPRANGES_URL")
        .env_remove("AWSIPRANGES_TIMEOUT")
        .arg("--url")
        .arg(url)
        .arg("--timeout")
        .arg("5000")
        .args(args);

    tokio::task::spawn_blocking(move || command.output())
        .await
        .unwrap()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/*--------------------------------------------------------------------------------------
  Version
--------------------------------------------------------------------------------------*/

#[test]
fn command_version() {
    Command::cargo_bin("awsipregions")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

/*--------------------------------------------------------------------------------------
  No Arguments - Service Catalog
--------------------------------------------------------------------------------------*/

#[tokio::test]
async fn command_catalog() {
    let (_mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 1).await;
    let output = awsipregions(&url, &[]).await;

    let assert = output.assert().success();
    assert_eq!(
        stdout_of(assert.get_output()),
        "\
Please run the application specifying -service and -region with a combination listed below:

-----------------------
Service: EC2
Regions: [us-east-1 us-west-2]
-----------------------
Service: S3
Regions: [us-east-1]
-----------------------
"
    );
}

#[tokio::test]
async fn command_catalog_table() {
    let (_mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 1).await;
    let output = awsipregions(&url, &["--output", "table"]).await;

    let assert = output.assert().success();
    let stdout = stdout_of(assert.get_output());
    assert!(stdout.contains("EC2"));
    assert!(stdout.contains("us-east-1, us-west-2"));
}

/*--------------------------------------------------------------------------------------
  Service and Region - IP Ranges
--------------------------------------------------------------------------------------*/

#[tokio::test]
async fn command_lookup() {
    let (_mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 1).await;
    let output = awsipregions(&url, &["--service", "EC2", "--region", "us-east-1"]).await;

    let assert = output.assert().success();
    assert_eq!(
        stdout_of(assert.get_output()),
        "Service: EC2\nRegion: us-east-1\nIP Ranges:\n10.0.0.0/8\n10.2.0.0/16\n"
    );
}

/// The single-dash long flags, with and without `=`.
#[tokio::test]
async fn command_lookup_single_dash_flags() {
    for args in [
        &["-service", "EC2", "-region", "us-east-1"][..],
        &["-service=EC2", "-region=us-east-1"][..],
    ] {
        let (_mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 1).await;
        let output = awsipregions(&url, args).await;

        let assert = output.assert().success();
        assert_eq!(
            stdout_of(assert.get_output()),
            "Service: EC2\nRegion: us-east-1\nIP Ranges:\n10.0.0.0/8\n10.2.0.0/16\n"
        );
    }
}

#[tokio::test]
async fn command_lookup_net_mask_format() {
    let (_mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 1).await;
    let output = awsipregions(&url, &["-s", "EC2", "-r", "us-west-2", "--net-mask-format"]).await;

    let assert = output.assert().success();
    assert_eq!(
        stdout_of(assert.get_output()),
        "Service: EC2\nRegion: us-west-2\nIP Ranges:\n10.1.0.0 255.255.0.0\n"
    );
}

#[tokio::test]
async fn command_lookup_service_not_found() {
    let (_mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 1).await;
    let output = awsipregions(&url, &["-s", "ROUTE53", "-r", "us-east-1"]).await;

    let assert = output.assert().failure().code(1);
    assert_eq!(stdout_of(assert.get_output()), "Service ROUTE53 not found\n");
}

#[tokio::test]
async fn command_lookup_region_not_found() {
    let (_mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 1).await;
    let output = awsipregions(&url, &["-s", "S3", "-r", "us-west-2"]).await;

    let assert = output.assert().failure().code(1);
    assert_eq!(stdout_of(assert.get_output()), "Region us-west-2 not found\n");
}

/*--------------------------------------------------------------------------------------
  Flag Validation
--------------------------------------------------------------------------------------*/

/// A lone --service or --region fails without contacting the server.
#[tokio::test]
async fn command_service_and_region_required_together() {
    let (mock_server, url) = ip_ranges_server(json_response(TEST_JSON), 0).await;

    for args in [["--service", "EC2"], ["-region", "us-east-1"]] {
        let output = awsipregions(&url, &args).await;

        let assert = output.assert().failure().code(1);
        assert_eq!(
            stdout_of(assert.get_output()),
            "Region and Service must be specified together\n"
        );
    }

    mock_server.verify().await;
}

/*--------------------------------------------------------------------------------------
  Fetch and Decode Errors
--------------------------------------------------------------------------------------*/

#[tokio::test]
async fn command_malformed_json() {
    let (_mock_server, url) = ip_ranges_server(
        json_response("{\"syncToken\": \"1640995200\", \"prefixes\": ["),
        1,
    )
    .await;
    let output = awsipregions(&url, &[]).await;

    let assert = output.assert().failure().code(1);
    let stdout = stdout_of(assert.get_output());
    assert!(stdout.starts_with("Failed to decode AWS IP Ranges JSON"));
    assert!(!stdout.contains("Service:"));
}

#[tokio::test]
async fn command_http_error_status() {
    let (_mock_server, url) = ip_ranges_server(ResponseTemplate::new(500), 1).await;
    let output = awsipregions(&url, &[]).await;

    let assert = output.assert().failure().code(1);
    assert!(stdout_of(assert.get_output()).contains("HTTP 500"));
}

#[tokio::test]
async fn command_connection_refused() {
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}/ip-ranges.json", listener.local_addr().unwrap())
    };
    let output = awsipregions(&url, &[]).await;

    let assert = output.assert().failure().code(1);
    assert!(stdout_of(assert.get_output()).starts_with("Failed to retrieve AWS IP Ranges"));
}
