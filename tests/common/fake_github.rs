//! Fake GitHub REST API served by tiny_http
//!
//! Routes are matched on the full request URL (path and query).
//! Anything unrouted answers 404 like GitHub does.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tiny_http::{Header, Response, Server, StatusCode};

/// A request seen by the fake server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

/// Running fake API; stops when dropped
pub struct FakeGitHub {
    server: Arc<Server>,
    handle: Option<JoinHandle<()>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    url: String,
}

impl FakeGitHub {
    /// Start a server answering `(url, status, body)` routes
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind fake github"));
        let addr = server.server_addr().to_ip().expect("tcp listener");
        let routes: HashMap<String, (u16, String)> = routes
            .iter()
            .map(|(url, status, body)| ((*url).to_string(), (*status, (*body).to_string())))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    let header = |name: &'static str| {
                        request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv(name))
                            .map(|h| h.value.as_str().to_string())
                    };
                    requests.lock().unwrap().push(Recorded {
                        url: request.url().to_string(),
                        authorization: header("Authorization"),
                        user_agent: header("User-Agent"),
                    });

                    let (status, body) = routes
                        .get(request.url())
                        .cloned()
                        .unwrap_or_else(|| (404, r#"{"message":"Not Found"}"#.to_string()));
                    let response = Response::from_string(body)
                        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
                        .with_status_code(StatusCode(status));
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            handle: Some(handle),
            requests,
            url: format!("http://{addr}"),
        }
    }

    /// A repository with a `main` branch listing `entries`
    ///
    /// Each entry is `(name, type)`.
    pub fn with_repository(repo: &str, entries: &[(&str, &str)]) -> Self {
        let listing = listing_json(entries);
        let repo_url = format!("/repos/{repo}");
        let contents_url = format!("/repos/{repo}/contents?ref=main");
        Self::start(&[
            (repo_url.as_str(), 200, r#"{"full_name":"fake"}"#),
            (contents_url.as_str(), 200, listing.as_str()),
        ])
    }

    /// Base URL to use as the API root
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeGitHub {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Render a contents listing body
pub fn listing_json(entries: &[(&str, &str)]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|(name, kind)| format!(r#"{{"name":"{name}","path":"{name}","type":"{kind}"}}"#))
        .collect();
    format!("[{}]", items.join(","))
}
