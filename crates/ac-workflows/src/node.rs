//! Workflow Node - An integration as a workflow node
//!
//! A node publishes a static [`NodeDescription`] and turns the input items of
//! an [`ExecutionContext`] into output items.

use ac_core::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::context::ExecutionContext;
use crate::description::NodeDescription;

/// State of a workflow node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Node is idle, waiting to be executed
    #[default]
    Idle,
    /// Node is currently executing
    Running,
    /// Node completed successfully
    Completed,
    /// Node failed
    Failed,
}

/// Result of node execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeResult {
    /// Output items, in input order
    pub items: Vec<Value>,
    /// Execution duration in milliseconds
    pub duration_ms: u64,
    /// Additional metadata
    pub metadata: HashMap<String, Value>,
}

impl NodeResult {
    /// Create a successful result
    pub fn success(items: Vec<Value>) -> Self {
        Self {
            items,
            duration_ms: 0,
            metadata: HashMap::new(),
        }
    }

    /// Set duration
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: &str, value: Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }
}

/// Trait for workflow nodes
#[async_trait]
pub trait WorkflowNode: Send + Sync {
    /// Get the node's unique identifier
    fn id(&self) -> &str;

    /// Get the node's display name
    fn name(&self) -> &str;

    /// Get the node type
    fn node_type(&self) -> &str;

    /// Static metadata describing parameters
    fn description(&self) -> &NodeDescription;

    /// Get current state
    fn state(&self) -> NodeState;

    /// Set state
    fn set_state(&mut self, state: NodeState);

    /// Run the node over every input item
    async fn execute(&mut self, ctx: &ExecutionContext) -> Result<NodeResult>;

    /// Parameters evaluated once, from item 0, for the whole batch
    fn batch_parameters(&self) -> &'static [&'static str] {
        &[]
    }

    /// Check that every visible required parameter has a value, per item
    fn validate_parameters(&self, ctx: &ExecutionContext) -> Result<()> {
        let description = self.description();
        let batch_wide = self.batch_parameters();
        for item in 0..ctx.item_count() {
            let lookup = |key: &str| ctx.resolve_batch_parameter(description, key, item, batch_wide);
            for property in description.visible_properties(&lookup) {
                if !property.needs_value() {
                    continue;
                }
                let present = match ctx.get_node_parameter(&property.name, item) {
                    None | Some(Value::Null) => false,
                    Some(Value::String(s)) => !s.is_empty(),
                    Some(_) => true,
                };
                if !present {
                    return Err(Error::missing_parameter(&property.name, item));
                }
            }
        }
        Ok(())
    }
}
