//! Health check command - checks a running Folio server.

use std::time::Duration;

use url::Url;

use crate::cli::HealthArgs;

/// Resolve the `/health` endpoint for a server base URL
fn health_url(base: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    if !url.path().ends_with("/health") {
        let path = format!("{}/health", url.path().trim_end_matches('/'));
        url.set_path(&path);
    }
    Ok(url)
}

/// Outcome of probing a server's health endpoint
#[derive(Debug, PartialEq, Eq)]
enum Probe {
    /// The server answered `healthy` with this many documents
    Healthy { documents: u64 },
    /// The server answered, or failed to answer, with this reason
    Unhealthy(String),
}

/// Interpret a `/health` response body
fn read_health_body(body: &serde_json::Value) -> Probe {
    match body["status"].as_str() {
        Some("healthy") => Probe::Healthy {
            documents: body["documents"].as_u64().unwrap_or(0),
        },
        Some(other) => Probe::Unhealthy(format!("server reports {other}")),
        None => Probe::Unhealthy("response has no status field".to_string()),
    }
}

async fn probe(client: &reqwest::Client, url: &Url) -> Probe {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => return Probe::Unhealthy(format!("cannot reach {url}: {e}")),
    };
    let status = response.status();
    if !status.is_success() && status != reqwest::StatusCode::SERVICE_UNAVAILABLE {
        return Probe::Unhealthy(format!("{url} answered HTTP {status}"));
    }
    match response.json::<serde_json::Value>().await {
        Ok(body) => read_health_body(&body),
        Err(e) => Probe::Unhealthy(format!("unreadable response from {url}: {e}")),
    }
}

/// Run the health check command
///
/// Exits with status 1 when the server is unreachable or unhealthy.
pub async fn run(args: &HealthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let url = health_url(&args.url)?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    match probe(&client, &url).await {
        Probe::Healthy { documents } => {
            println!("Folio at {url} is healthy ({documents} documents)");
            Ok(())
        }
        Probe::Unhealthy(reason) => {
            eprintln!("Folio is unhealthy: {reason}");
            std::process::exit(1);
        }
    }
}
