use crate::github::{
    config::GitHubConfig,
    filter::filter_file_names,
    models::{ContentEntry, Readme},
    parser::{parse_repository_url, RepositoryInfo},
};
use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, warn};

/// Placeholder used when a repository has no README
pub const MISSING_README: &str = "No README found.";

/// Metadata gathered for a single repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoData {
    pub readme: String,
    pub files: Vec<String>,
}

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("repo-summarizer/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        // No token means no Authorization header at all
        if let Some(token) = &config.token {
            let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::Config(format!("Invalid GitHub token: {e}")))?;
            auth_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Fetch the README text and the filtered root listing for a repository URL.
    ///
    /// The reference is validated before any request goes out. The listing is
    /// fetched first, then the README.
    pub async fn fetch(&self, repo_url: &str) -> Result<RepoData> {
        let info = parse_repository_url(repo_url)?;
        self.fetch_repository(&info).await
    }

    /// Fetch metadata for an already parsed repository reference
    pub async fn fetch_repository(&self, info: &RepositoryInfo) -> Result<RepoData> {
        debug!("Fetching repository data for {}/{}", info.owner, info.repo);

        let files = self.list_root_files(info).await?;
        let readme = self.get_readme(info).await?;

        Ok(RepoData { readme, files })
    }

    /// Names of the root entries that pass the file filter.
    /// A non-200 listing yields an empty list rather than an error.
    pub async fn list_root_files(&self, info: &RepositoryInfo) -> Result<Vec<String>> {
        let path = format!("/repos/{}/{}/contents/", info.owner, info.repo);
        let response = self.get(&path).await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                "Root listing for {}/{} returned {}; continuing without files",
                info.owner, info.repo, status
            );
            return Ok(Vec::new());
        }

        let entries: Vec<ContentEntry> = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("Failed to parse contents listing: {e}")))?;

        let total = entries.len();
        let files = filter_file_names(entries.into_iter().map(|entry| entry.name));
        debug!("Kept {} of {} root entries", files.len(), total);

        Ok(files)
    }

    /// Decoded README text, or the placeholder when the repository has none
    pub async fn get_readme(&self, info: &RepositoryInfo) -> Result<String> {
        let path = format!("/repos/{}/{}/readme", info.owner, info.repo);
        let response = self.get(&path).await?;

        match response.status() {
            StatusCode::OK => {
                let readme: Readme = response
                    .json()
                    .await
                    .map_err(|e| Error::Decode(format!("Failed to parse README payload: {e}")))?;
                decode_content(&readme.content)
            }
            StatusCode::NOT_FOUND => Ok(MISSING_README.to_string()),
            status => {
                warn!(
                    "README request for {}/{} failed with {}",
                    info.owner, info.repo, status
                );
                Err(Error::Upstream {
                    status,
                    message: "GitHub API Error".to_string(),
                })
            }
        }
    }

    /// Make a GET request to GitHub API
    async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.config.api_base_url, path);
        debug!("GitHub API request: GET {}", url);

        let response = self.client.get(&url).send().await?;
        Ok(response)
    }
}

/// Decode the base64 body GitHub returns, which is wrapped at 60 columns
fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| Error::Decode(format!("Invalid base64 README content: {e}")))?;

    String::from_utf8(bytes).map_err(|e| Error::Decode(format!("README is not valid UTF-8: {e}")))
}
