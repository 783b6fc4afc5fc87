//! Request construction values
//!
//! An [`ApiCall`] is built per input item and dropped once the call returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// HTTP methods used by the v3 API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One request against the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCall {
    pub method: HttpMethod,
    /// Path below the account URL, e.g. `/api/3/contacts`
    pub endpoint: String,
    pub body: Map<String, Value>,
    pub query: Map<String, Value>,
    /// Response field holding the payload (`contact`, `deals`, ...)
    pub data_key: Option<String>,
}

impl ApiCall {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: Map::new(),
            query: Map::new(),
            data_key: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    /// Nest `fields` under `key` in the body, e.g. `{"contact": {...}}`
    pub fn with_body(mut self, key: &str, fields: Map<String, Value>) -> Self {
        self.body.insert(key.to_string(), Value::Object(fields));
        self
    }

    pub fn with_query(mut self, key: &str, value: Value) -> Self {
        self.query.insert(key.to_string(), value);
        self
    }

    pub fn with_data_key(mut self, key: &str) -> Self {
        self.data_key = Some(key.to_string());
        self
    }

    /// The object nested under `key` in the body, if any
    pub fn body_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.body.get(key).and_then(Value::as_object)
    }
}
