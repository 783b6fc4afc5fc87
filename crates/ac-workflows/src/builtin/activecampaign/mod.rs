//! ActiveCampaign Node - Resource/operation pairs as v3 REST calls
//!
//! `resource` and `operation` are read once, from item 0. For every input item
//! the node then builds an [`ApiCall`] for the pair and hands it to one of the
//! two request helpers:
//! `request_all_items` for `getAll` with `returnAll`, `request` otherwise.
//! Array responses are spread into the output, anything else is one item.

pub mod fields;
pub mod metadata;
pub mod params;
pub mod resource;

mod connection;
mod contact;
mod deal;
mod ecom_customer;
mod ecom_order;
mod ecom_order_products;

use ac_api::{ActiveCampaignApi, ApiCall};
use ac_core::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

use crate::context::ExecutionContext;
use crate::description::NodeDescription;
use crate::node::{NodeResult, NodeState, WorkflowNode};

pub use metadata::{node_description, NODE_TYPE};
pub use params::ItemParams;
pub use resource::{Operation, Resource};

/// Evaluated from item 0 for the whole batch
const BATCH_PARAMETERS: &[&str] = &["resource", "operation"];

/// A built call plus how it should be sent
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCall {
    pub call: ApiCall,
    /// Follow pagination instead of sending once
    pub return_all: bool,
}

impl PreparedCall {
    pub fn single(call: ApiCall) -> Self {
        Self {
            call,
            return_all: false,
        }
    }

    /// `getAll`: paginate on `returnAll`, otherwise send `limit` once
    pub fn list(endpoint: &str, data_key: &str, params: &ItemParams<'_>) -> Result<Self> {
        let call = ApiCall::get(endpoint).with_data_key(data_key);
        if params.boolean("returnAll")? {
            return Ok(Self {
                call,
                return_all: true,
            });
        }
        let limit = params.positive_integer("limit")?;
        Ok(Self::single(call.with_query("limit", json!(limit))))
    }
}

/// Build the call for one item
pub fn prepare_call(resource: Resource, operation: Operation, params: &ItemParams<'_>) -> Result<PreparedCall> {
    match resource {
        Resource::Contact => contact::build(operation, params),
        Resource::Deal => deal::build(operation, params),
        Resource::Connection => connection::build(operation, params),
        Resource::EcommerceOrder => ecom_order::build(operation, params),
        Resource::EcommerceCustomer => ecom_customer::build(operation, params),
        Resource::EcommerceOrderProducts => ecom_order_products::build(operation, params),
    }
}

/// The ActiveCampaign workflow node
pub struct ActiveCampaignNode {
    id: String,
    name: String,
    state: NodeState,
    description: NodeDescription,
    api: Arc<dyn ActiveCampaignApi>,
}

impl ActiveCampaignNode {
    pub fn new(id: &str, api: Arc<dyn ActiveCampaignApi>) -> Self {
        Self {
            id: id.to_string(),
            name: "ActiveCampaign".to_string(),
            state: NodeState::Idle,
            description: node_description(),
            api,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    fn item_params<'a>(&'a self, ctx: &'a ExecutionContext, item: usize) -> ItemParams<'a> {
        ItemParams::new(ctx, &self.description, item).with_batch_wide(BATCH_PARAMETERS)
    }

    /// Resource and operation always come from item 0, as the host evaluates them once
    fn selection(&self, ctx: &ExecutionContext) -> Result<(Resource, Operation)> {
        let params = self.item_params(ctx, 0);
        let resource: Resource = params.string("resource")?.parse()?;
        let operation = resource.operation(&params.string("operation")?)?;
        Ok((resource, operation))
    }

    /// Build every item's call without sending anything
    pub fn prepare(&self, ctx: &ExecutionContext) -> Result<Vec<PreparedCall>> {
        if ctx.item_count() == 0 {
            return Ok(Vec::new());
        }
        let (resource, operation) = self.selection(ctx)?;
        (0..ctx.item_count())
            .map(|item| prepare_call(resource, operation, &self.item_params(ctx, item)))
            .collect()
    }

    async fn run_items(&self, ctx: &ExecutionContext) -> Result<Vec<Value>> {
        if ctx.item_count() == 0 {
            return Ok(Vec::new());
        }
        let (resource, operation) = self.selection(ctx)?;
        self.validate_parameters(ctx)?;

        let mut output = Vec::new();
        for item in 0..ctx.item_count() {
            let params = self.item_params(ctx, item);
            let prepared = prepare_call(resource, operation, &params)?;
            let call = &prepared.call;

            debug!(
                node_id = %self.id,
                item,
                resource = %resource,
                operation = %operation,
                method = %call.method,
                endpoint = %call.endpoint,
                return_all = prepared.return_all,
                "Sending request"
            );
            ctx.debug(
                Some(&self.id),
                &format!("{} {} ({}:{})", call.method, call.endpoint, resource, operation),
            )
            .await;

            if prepared.return_all {
                output.extend(self.api.request_all_items(call).await?);
            } else {
                match self.api.request(call).await? {
                    Value::Array(items) => output.extend(items),
                    other => output.push(other),
                }
            }
        }
        Ok(output)
    }
}

#[async_trait]
impl WorkflowNode for ActiveCampaignNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn node_type(&self) -> &str {
        NODE_TYPE
    }

    fn batch_parameters(&self) -> &'static [&'static str] {
        BATCH_PARAMETERS
    }

    fn description(&self) -> &NodeDescription {
        &self.description
    }

    fn state(&self) -> NodeState {
        self.state
    }

    fn set_state(&mut self, state: NodeState) {
        self.state = state;
    }

    async fn execute(&mut self, ctx: &ExecutionContext) -> Result<NodeResult> {
        let start = std::time::Instant::now();
        self.set_state(NodeState::Running);

        match self.run_items(ctx).await {
            Ok(items) => {
                self.set_state(NodeState::Completed);
                let duration_ms = start.elapsed().as_millis() as u64;
                info!(
                    node_id = %self.id,
                    execution_id = %ctx.execution_id,
                    items = items.len(),
                    duration_ms,
                    "Node execution complete"
                );
                Ok(NodeResult::success(items)
                    .with_duration(duration_ms)
                    .with_metadata("execution_id", json!(ctx.execution_id)))
            }
            Err(e) => {
                self.set_state(NodeState::Failed);
                ctx.error(Some(&self.id), &e.to_string()).await;
                Err(e)
            }
        }
    }
}
