//! ac-workflows: ActiveCampaign as a workflow node
//!
//! Features:
//! - Node trait and host execution context (parameters, items, execution log)
//! - Declarative node metadata (resources, operations, fields)
//! - The ActiveCampaign node: one flat dispatch from (resource, operation) to a v3 REST call

pub mod builtin;
pub mod context;
pub mod description;
pub mod node;

pub use builtin::ActiveCampaignNode;
pub use context::ExecutionContext;
pub use description::{NodeDescription, NodeProperty, PropertyKind};
pub use node::{NodeResult, NodeState, WorkflowNode};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::builtin::ActiveCampaignNode;
    pub use super::context::ExecutionContext;
    pub use super::description::{NodeDescription, NodeProperty, PropertyKind};
    pub use super::node::{NodeResult, NodeState, WorkflowNode};
}
