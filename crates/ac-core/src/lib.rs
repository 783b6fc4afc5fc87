//! Core types and utilities for the ActiveCampaign workflow node
//!
//! # Modules
//!
//! - `config`: Environment file loading and config lookups
//! - `credentials`: ActiveCampaign API credentials
//! - `error`: Error types and Result alias

pub mod config;
pub mod credentials;
pub mod error;

// Re-exports
pub use credentials::ActiveCampaignCredentials;
pub use error::{Error, Result};
