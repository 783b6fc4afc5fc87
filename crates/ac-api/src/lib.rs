//! ac-api: ActiveCampaign v3 request helpers
//!
//! Two entry points are exposed to nodes through [`ActiveCampaignApi`]:
//! - `request`: one authenticated call, optionally narrowed to a data key
//! - `request_all_items`: the same call, following offset pagination until exhausted

pub mod api;
pub mod call;
pub mod client;

pub use api::{ActiveCampaignApi, PAGE_SIZE};
pub use call::{ApiCall, HttpMethod};
pub use client::ActiveCampaignClient;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::api::ActiveCampaignApi;
    pub use super::call::{ApiCall, HttpMethod};
    pub use super::client::ActiveCampaignClient;
}
