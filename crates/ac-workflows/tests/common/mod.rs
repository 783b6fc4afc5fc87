//! Shared test doubles

#![allow(dead_code)]

use ac_api::{ActiveCampaignApi, HttpMethod};
use ac_core::Result;
use ac_workflows::builtin::activecampaign::PreparedCall;
use ac_workflows::{ActiveCampaignNode, ExecutionContext};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One request as the API saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Value,
    pub query: Value,
}

/// Records every request and answers from a queue, then with `fallback`
pub struct RecordingApi {
    calls: Mutex<Vec<Recorded>>,
    responses: Mutex<VecDeque<Value>>,
    fallback: Value,
}

impl RecordingApi {
    pub fn new(fallback: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            fallback,
        })
    }

    pub fn with_responses(responses: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
            fallback: json!({}),
        })
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActiveCampaignApi for RecordingApi {
    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &Map<String, Value>,
        query: &Map<String, Value>,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(Recorded {
            method,
            endpoint: endpoint.to_string(),
            body: Value::Object(body.clone()),
            query: Value::Object(query.clone()),
        });
        let next = self.responses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback.clone()))
    }
}

pub fn node() -> ActiveCampaignNode {
    ActiveCampaignNode::new("ac", RecordingApi::new(json!({})))
}

/// Build the call for a single item with the given node parameters
pub fn prepare(parameters: Value) -> Result<PreparedCall> {
    let ctx = ExecutionContext::new("test").with_parameters(parameters);
    let mut calls = node().prepare(&ctx)?;
    Ok(calls.remove(0))
}
