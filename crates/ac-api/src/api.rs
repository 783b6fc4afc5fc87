//! The request helpers nodes call
//!
//! Implementors only provide [`ActiveCampaignApi::send`]. Narrowing to a data
//! key and offset pagination are built on top of it so every transport
//! behaves the same way.

use ac_core::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::call::{ApiCall, HttpMethod};

/// Page size used while following pagination
pub const PAGE_SIZE: u64 = 100;

#[async_trait]
pub trait ActiveCampaignApi: Send + Sync {
    /// Perform one authenticated request and return the parsed response body
    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &Map<String, Value>,
        query: &Map<String, Value>,
    ) -> Result<Value>;

    /// Single request, narrowed to `call.data_key` when set
    async fn request(&self, call: &ApiCall) -> Result<Value> {
        let response = self
            .send(call.method, &call.endpoint, &call.body, &call.query)
            .await?;

        Ok(match call.data_key.as_deref() {
            Some(key) => response.get(key).cloned().unwrap_or(Value::Null),
            None => response,
        })
    }

    /// Follow `limit`/`offset` pagination until `meta.total` items were received
    async fn request_all_items(&self, call: &ApiCall) -> Result<Vec<Value>> {
        let mut query = call.query.clone();
        query.insert("limit".to_string(), Value::from(PAGE_SIZE));

        let mut items = Vec::new();
        loop {
            query.insert("offset".to_string(), Value::from(items.len() as u64));
            let response = self
                .send(call.method, &call.endpoint, &call.body, &query)
                .await?;

            let page = page_items(response.clone(), call.data_key.as_deref());
            let page_len = page.len();
            items.extend(page);

            let total = meta_total(&response);
            debug!(
                endpoint = %call.endpoint,
                page_len,
                received = items.len(),
                total = ?total,
                "Fetched page"
            );

            match total {
                Some(total) if page_len > 0 && total > items.len() as u64 => continue,
                _ => break,
            }
        }

        Ok(items)
    }
}

/// Items carried by one page of a list response
fn page_items(response: Value, data_key: Option<&str>) -> Vec<Value> {
    let payload = match data_key {
        Some(key) => match response {
            Value::Object(mut obj) => obj.remove(key).unwrap_or(Value::Null),
            _ => Value::Null,
        },
        None => response,
    };

    match payload {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// `meta.total` is sent as a string by most list endpoints
fn meta_total(response: &Value) -> Option<u64> {
    match response.get("meta")?.get("total")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
