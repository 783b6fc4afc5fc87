//! Execution Context - What the host hands a node for one run
//!
//! Provides access to:
//! - Input items
//! - Node parameters (node-level, optionally overridden per item)
//! - The execution log

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::description::NodeDescription;

/// Execution context for a single node run
pub struct ExecutionContext {
    /// Workflow ID
    pub workflow_id: String,
    /// Execution ID (unique per run)
    pub execution_id: String,
    items: Vec<Value>,
    parameters: Map<String, Value>,
    item_parameters: HashMap<usize, Map<String, Value>>,
    log: Arc<RwLock<Vec<LogEntry>>>,
}

/// Log entry for node execution
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub node_id: Option<String>,
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl ExecutionContext {
    /// Context with a single empty input item and no parameters
    pub fn new(workflow_id: &str) -> Self {
        Self {
            workflow_id: workflow_id.to_string(),
            execution_id: uuid::Uuid::new_v4().to_string(),
            items: vec![Value::Object(Map::new())],
            parameters: Map::new(),
            item_parameters: HashMap::new(),
            log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the input items
    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        self.items = items;
        self
    }

    /// Set node-level parameters from a JSON object; other values are ignored
    pub fn with_parameters(mut self, parameters: Value) -> Self {
        if let Value::Object(map) = parameters {
            self.parameters = map;
        }
        self
    }

    /// Set a single node-level parameter
    pub fn with_parameter(mut self, name: &str, value: Value) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    /// Override parameters for one item
    pub fn with_item_parameters(mut self, item: usize, parameters: Value) -> Self {
        if let Value::Object(map) = parameters {
            self.item_parameters.entry(item).or_default().extend(map);
        }
        self
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Raw parameter value for an item, with `${field}` placeholders resolved
    pub fn get_node_parameter(&self, name: &str, item: usize) -> Option<Value> {
        let raw = self
            .item_parameters
            .get(&item)
            .and_then(|overrides| overrides.get(name))
            .or_else(|| self.parameters.get(name))?;

        Some(match self.items.get(item) {
            Some(Value::Object(fields)) => interpolate_value(raw, fields),
            _ => raw.clone(),
        })
    }

    /// Parameter value, falling back to the default of the visible property
    pub fn resolve_parameter(
        &self,
        description: &NodeDescription,
        name: &str,
        item: usize,
    ) -> Option<Value> {
        self.resolve_batch_parameter(description, name, item, &[])
    }

    /// Same as `resolve_parameter`, but names in `batch_wide` are always read from item 0
    pub fn resolve_batch_parameter(
        &self,
        description: &NodeDescription,
        name: &str,
        item: usize,
        batch_wide: &[&str],
    ) -> Option<Value> {
        let item = if batch_wide.contains(&name) { 0 } else { item };
        self.get_node_parameter(name, item).or_else(|| {
            description.default_for(name, &|key: &str| {
                self.resolve_batch_parameter(description, key, item, batch_wide)
            })
        })
    }

    /// Log a message
    pub async fn log(&self, level: LogLevel, node_id: Option<&str>, message: &str) {
        let entry = LogEntry {
            timestamp: chrono::Utc::now(),
            level,
            node_id: node_id.map(String::from),
            message: message.to_string(),
        };
        let mut log = self.log.write().await;
        log.push(entry);
    }

    /// Log debug message
    pub async fn debug(&self, node_id: Option<&str>, message: &str) {
        self.log(LogLevel::Debug, node_id, message).await;
    }

    /// Log info message
    pub async fn info(&self, node_id: Option<&str>, message: &str) {
        self.log(LogLevel::Info, node_id, message).await;
    }

    /// Log error message
    pub async fn error(&self, node_id: Option<&str>, message: &str) {
        self.log(LogLevel::Error, node_id, message).await;
    }

    /// Get execution log
    pub async fn get_log(&self) -> Vec<LogEntry> {
        let log = self.log.read().await;
        log.clone()
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new("default")
    }
}

/// Replace `${field}` with item fields. A string that is exactly one
/// placeholder takes the field's value with its JSON type intact.
fn interpolate_value(value: &Value, fields: &Map<String, Value>) -> Value {
    match value {
        Value::String(s) => {
            if let Some(name) = s.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
                if let Some(field) = fields.get(name) {
                    return field.clone();
                }
            }
            Value::String(interpolate(s, fields))
        }
        Value::Object(obj) => Value::Object(
            obj.iter()
                .map(|(k, v)| (k.clone(), interpolate_value(v, fields)))
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.iter().map(|v| interpolate_value(v, fields)).collect()),
        other => other.clone(),
    }
}

fn interpolate(template: &str, fields: &Map<String, Value>) -> String {
    let mut result = template.to_string();
    for (name, value) in fields {
        let pattern = format!("${{{}}}", name);
        if !result.contains(&pattern) {
            continue;
        }
        let replacement = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        result = result.replace(&pattern, &replacement);
    }
    result
}
