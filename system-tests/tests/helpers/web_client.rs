// system-tests/tests/helpers/web_client.rs
// ============================================================================
// Module: Web Test Client
// Description: HTTP client for driving Superlists pages in system-tests.
// Purpose: Submit forms and fetch pages the way a browser would.
// Dependencies: reqwest, url
// ============================================================================

//! ## Overview
//! HTTP client for driving the Superlists pages in system-tests. Redirects
//! are never followed automatically so tests can assert the redirect-or-
//! rerender flow explicitly: a saved item answers with a redirect to the
//! list URL, a rejected one re-renders the submitting page.

use std::time::Duration;

use reqwest::Client;
use reqwest::Response;
use reqwest::StatusCode;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use url::Url;

/// HTTP client bound to a spawned server's base URL.
pub struct WebClient {
    base_url: Url,
    client: Client,
}

impl WebClient {
    /// Creates a client with redirects disabled and a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, String> {
        let base_url =
            Url::parse(base_url).map_err(|err| format!("invalid base url: {err}"))?;
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;
        Ok(Self {
            base_url,
            client,
        })
    }

    /// Fetches a page by path and returns the raw response.
    pub async fn get(&self, path: &str) -> Result<Response, String> {
        let url = self.resolve(path)?;
        self.client.get(url).send().await.map_err(|err| format!("get failed: {err}"))
    }

    /// Fetches a page by path and returns its body text, asserting 200.
    pub async fn page_text(&self, path: &str) -> Result<String, String> {
        let response = self.get(path).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(format!("expected 200 for {path}, got {status}"));
        }
        response.text().await.map_err(|err| format!("failed to read body: {err}"))
    }

    /// Submits an item form to the given path.
    pub async fn post_item(&self, path: &str, text: &str) -> Result<Response, String> {
        let url = self.resolve(path)?;
        self.client
            .post(url)
            .form(&[("text", text)])
            .send()
            .await
            .map_err(|err| format!("post failed: {err}"))
    }

    /// Starts a new list with a first item and returns the new list's path.
    pub async fn start_list(&self, text: &str) -> Result<String, String> {
        let response = self.post_item("/lists/new", text).await?;
        redirect_target(&response)
    }

    /// Resolves a path against the server base URL.
    fn resolve(&self, path: &str) -> Result<Url, String> {
        self.base_url.join(path).map_err(|err| format!("invalid path {path}: {err}"))
    }
}

/// Extracts the Location path from a redirect response.
pub fn redirect_target(response: &Response) -> Result<String, String> {
    let status = response.status();
    if !status.is_redirection() {
        return Err(format!("expected redirect, got {status}"));
    }
    let location = response
        .headers()
        .get(LOCATION)
        .ok_or_else(|| "redirect response missing location header".to_string())?;
    location
        .to_str()
        .map(ToString::to_string)
        .map_err(|err| format!("location header is not valid text: {err}"))
}
