//! ActiveCampaign HTTP client
//!
//! ## API Endpoints
//!
//! | Endpoint | URL | Purpose |
//! |----------|-----|---------|
//! | Base URL | `https://<account>.api-us1.com` | Per-account host |
//! | v3 | `/api/3/...` | Contacts, deals, connections, e-commerce |
//!
//! ## Authentication
//! - Header: `Api-Token: {ACTIVECAMPAIGN_API_KEY}`

use ac_core::{ActiveCampaignCredentials, Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

use crate::api::ActiveCampaignApi;
use crate::call::HttpMethod;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ActiveCampaignClient {
    client: Client,
    credentials: ActiveCampaignCredentials,
}

impl ActiveCampaignClient {
    pub fn new(credentials: ActiveCampaignCredentials) -> Result<Self> {
        Self::with_timeout(credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(credentials: ActiveCampaignCredentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            credentials,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ActiveCampaignCredentials::from_env()?)
    }

    pub fn api_url(&self) -> &str {
        self.credentials.api_url()
    }

    fn url(&self, endpoint: &str) -> String {
        build_url(self.credentials.api_url(), endpoint)
    }
}

#[async_trait]
impl ActiveCampaignApi for ActiveCampaignClient {
    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &Map<String, Value>,
        query: &Map<String, Value>,
    ) -> Result<Value> {
        debug!(method = %method, endpoint = %endpoint, "ActiveCampaign request");

        let mut request = self
            .client
            .request(method.into(), self.url(endpoint))
            .header("Api-Token", self.credentials.api_key())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&query_pairs(query));

        if !body.is_empty() {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::FORBIDDEN {
            return Err(Error::InvalidCredentials);
        }

        let parsed = parse_body(&text);
        if !status.is_success() {
            let message = parsed
                .as_ref()
                .and_then(remote_message)
                .unwrap_or_else(|| status.to_string());
            return Err(Error::api(
                Some(status.as_u16()),
                format!("ActiveCampaign error response [{}]: {}", status.as_u16(), message),
            ));
        }

        let value = match parsed {
            Some(value) => value,
            None if text.trim().is_empty() => Value::Object(Map::new()),
            None => serde_json::from_str(&text)?,
        };
        check_success_flag(&value)?;
        Ok(value)
    }
}

fn build_url(api_url: &str, endpoint: &str) -> String {
    let base = api_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

/// Query values without JSON quoting
fn query_pairs(query: &Map<String, Value>) -> Vec<(String, String)> {
    query
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| {
            let rendered = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), rendered)
        })
        .collect()
}

fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

/// v3 errors come as `{"message": ...}` or `{"errors": [{"title": ...}]}`
fn remote_message(body: &Value) -> Option<String> {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    let titles: Vec<&str> = body
        .get("errors")?
        .as_array()?
        .iter()
        .filter_map(|e| e.get("title").and_then(Value::as_str))
        .collect();
    if titles.is_empty() {
        None
    } else {
        Some(titles.join("; "))
    }
}

/// Older endpoints answer 200 with `"success": false`
fn check_success_flag(body: &Value) -> Result<()> {
    if body.get("success") == Some(&Value::Bool(false)) {
        let field = |name: &str| match body.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "undefined".to_string(),
        };
        return Err(Error::api(
            None,
            format!(
                "ActiveCampaign error response: {} ({})",
                field("error"),
                field("error_info")
            ),
        ));
    }
    Ok(())
}
