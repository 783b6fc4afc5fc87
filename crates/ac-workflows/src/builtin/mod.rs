//! Built-in workflow nodes
//!
//! - ActiveCampaign node (contacts, deals, connections, e-commerce)

pub mod activecampaign;

pub use activecampaign::ActiveCampaignNode;
