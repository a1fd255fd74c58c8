//! GitHub REST API adapter
//!
//! Implements `RemoteRepository` with blocking `reqwest` requests:
//!
//! - `GET /repos/{owner}/{name}` for reachability
//! - `GET /repos/{owner}/{name}/contents?ref={branch}` for the hook listing
//!
//! Failures never surface as errors. A request that gets no response is
//! reported as status `0`, a body that is not a directory listing keeps the
//! status of the response it came from.

use std::net::IpAddr;
use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;

use crate::config::RemoteConfig;
use crate::core::models::{BranchName, RepositoryId, intersect_hooks};
use crate::core::ports::{FileListing, RemoteRepository, STATUS_OK, STATUS_UNREACHABLE};

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("issue-mafia/", env!("CARGO_PKG_VERSION"));

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// One entry of a contents listing
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Blocking GitHub API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client from the remote settings
    pub fn new(config: &RemoteConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT);
        if is_loopback(config.api_base()) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_base: config.api_base().to_string(),
            token: config.token.clone(),
        })
    }

    /// URL of the repository resource
    #[must_use]
    pub fn repository_url(&self, repo: &RepositoryId) -> String {
        format!("{}/repos/{}/{}", self.api_base, repo.owner(), repo.name())
    }

    /// URL of the root directory listing on `branch`
    ///
    /// Branch names are restricted to `[-a-zA-Z0-9_]`, so no escaping is needed.
    #[must_use]
    pub fn contents_url(&self, repo: &RepositoryId, branch: &BranchName) -> String {
        format!("{}/contents?ref={}", self.repository_url(repo), branch.as_str())
    }

    fn get(&self, url: &str) -> RequestBuilder {
        debug!("GET {url}");
        let request = self.client.get(url).header(reqwest::header::ACCEPT, GITHUB_MEDIA_TYPE);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Self-hosted or fake APIs on this machine never go through a proxy
fn is_loopback(api_base: &str) -> bool {
    let Ok(url) = Url::parse(api_base) else {
        return false;
    };
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .is_ok_and(|ip| ip.is_loopback()),
        None => false,
    }
}

impl RemoteRepository for GitHubClient {
    fn fetch_repository(&self, repo: &RepositoryId) -> u16 {
        match self.get(&self.repository_url(repo)).send() {
            Ok(response) => response.status().as_u16(),
            Err(e) => {
                debug!("repository lookup for {repo} failed: {e}");
                e.status().map_or(STATUS_UNREACHABLE, |s| s.as_u16())
            },
        }
    }

    fn fetch_intersecting_files(&self, repo: &RepositoryId, branch: &BranchName) -> FileListing {
        let response = match self.get(&self.contents_url(repo, branch)).send() {
            Ok(response) => response,
            Err(e) => {
                debug!("contents lookup for {repo}@{branch} failed: {e}");
                return FileListing::failed(e.status().map_or(STATUS_UNREACHABLE, |s| s.as_u16()));
            },
        };

        let status = response.status().as_u16();
        if status != STATUS_OK {
            return FileListing::failed(status);
        }

        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                debug!("could not read contents body for {repo}@{branch}: {e}");
                return FileListing::failed(status);
            },
        };

        // A single-file response is an object, not a listing
        match serde_json::from_str::<Vec<ContentEntry>>(&body) {
            Ok(entries) => {
                let files = entries.into_iter().filter(|e| e.kind == "file").map(|e| e.name);
                let hooks = intersect_hooks(files);
                debug!("{repo}@{branch} carries hooks: {hooks:?}");
                FileListing::found(hooks)
            },
            Err(e) => {
                debug!("unexpected contents body for {repo}@{branch}: {e}");
                FileListing::failed(status)
            },
        }
    }
}
