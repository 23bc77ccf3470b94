//! Hugging Face compatible hub client.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, warn};

use crate::config::HubConfig;

use super::{FetchService, HubError, ListingService};

/// Suffix of the file a download streams into before it is complete.
const PARTIAL_SUFFIX: &str = ".incomplete";

/// Model metadata returned by `GET /api/models/{repo}`.
#[derive(Debug, Deserialize)]
struct ModelInfo {
    #[serde(default)]
    siblings: Vec<Sibling>,
}

#[derive(Debug, Deserialize)]
struct Sibling {
    rfilename: String,
}

/// Hub client implementing both file download and repository listing.
pub struct HubClient {
    client: Client,
    config: HubConfig,
}

impl HubClient {
    /// Create a new HubClient with the given configuration.
    pub fn new(config: HubConfig) -> Result<Self, HubError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout as u64))
            .user_agent(concat!("modelfetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HubError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.endpoint.trim_end_matches('/')
    }

    /// Download URL of a file at the configured revision.
    pub fn resolve_url(&self, source: &str, filename: &str) -> String {
        format!(
            "{}/{}/resolve/{}/{}",
            self.base_url(),
            encode_path(source),
            urlencoding::encode(&self.config.revision),
            encode_path(filename)
        )
    }

    /// Metadata URL of a repository.
    pub fn model_info_url(&self, source: &str) -> String {
        format!("{}/api/models/{}", self.base_url(), encode_path(source))
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match self.config.token.as_deref() {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }

    /// Sends a GET, mapping 404 to `NotFound(what)` and other non-2xx codes
    /// to `HttpStatus`.
    async fn send(&self, url: &str, what: &str) -> Result<Response, HubError> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(HubError::from_reqwest)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HubError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            return Err(HubError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

/// Percent-encodes each `/`-separated segment, keeping the separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination.as_os_str().to_owned();
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

fn parse_model_info(body: &str) -> Result<Vec<String>, HubError> {
    let info: ModelInfo = serde_json::from_str(body)
        .map_err(|e| HubError::ApiError(format!("Failed to parse model info: {}", e)))?;
    Ok(info.siblings.into_iter().map(|s| s.rfilename).collect())
}

/// Streams the response body into `path`, returning the byte count.
async fn write_body(response: Response, path: &Path) -> Result<u64, HubError> {
    let file = File::create(path).await?;
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut total_bytes = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(HubError::from_reqwest)?;
        writer.write_all(&chunk).await?;
        total_bytes += chunk.len() as u64;
    }

    writer.flush().await?;
    Ok(total_bytes)
}

/// Writes the body into `partial`, then moves it onto `destination`.
async fn write_and_rename(
    response: Response,
    partial: &Path,
    destination: &Path,
) -> Result<u64, HubError> {
    let total_bytes = write_body(response, partial).await?;
    fs::rename(partial, destination).await?;
    Ok(total_bytes)
}

#[async_trait]
impl FetchService for HubClient {
    fn name(&self) -> &str {
        "hub"
    }

    async fn fetch(&self, source: &str, filename: &str, dir: &Path) -> Result<PathBuf, HubError> {
        let url = self.resolve_url(source, filename);
        debug!(source = source, filename = filename, url = %url, "Fetching file");

        let response = self
            .send(&url, &format!("{}/{}", source, filename))
            .await?;

        let destination = dir.join(filename);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Only the final rename makes the file visible under its real name.
        let partial = partial_path(&destination);
        let total_bytes = match write_and_rename(response, &partial, &destination).await {
            Ok(n) => n,
            Err(e) => {
                if let Err(cleanup) = fs::remove_file(&partial).await {
                    warn!(path = %partial.display(), error = %cleanup, "Failed to remove partial download");
                }
                return Err(e);
            }
        };

        info!(
            source = source,
            path = %destination.display(),
            bytes = total_bytes,
            "Download complete"
        );
        Ok(destination)
    }
}

#[async_trait]
impl ListingService for HubClient {
    fn name(&self) -> &str {
        "hub"
    }

    async fn list_files(&self, source: &str) -> Result<Vec<String>, HubError> {
        let url = self.model_info_url(source);
        debug!(source = source, url = %url, "Listing repository");

        let response = self.send(&url, source).await?;
        let body = response.text().await.map_err(HubError::from_reqwest)?;
        let files = parse_model_info(&body)?;

        debug!(source = source, count = files.len(), "Listed repository");
        Ok(files)
    }
}
