//! ActiveCampaign API credentials
//!
//! Every account gets its own API host (`https://<account>.api-us1.com`) and
//! a static key sent in the `Api-Token` header.

use std::fmt;

use crate::config::get_config_opt;
use crate::error::{Error, Result};

pub const API_URL_VAR: &str = "ACTIVECAMPAIGN_API_URL";
pub const API_KEY_VAR: &str = "ACTIVECAMPAIGN_API_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct ActiveCampaignCredentials {
    api_url: String,
    api_key: String,
}

impl ActiveCampaignCredentials {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_url = api_url.into().trim().trim_end_matches('/').to_string();
        Self {
            api_url,
            api_key: api_key.into(),
        }
    }

    /// Read `ACTIVECAMPAIGN_API_URL` and `ACTIVECAMPAIGN_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_url = get_config_opt(API_URL_VAR)
            .ok_or_else(|| Error::config(format!("{} environment variable not set", API_URL_VAR)))?;
        let api_key = get_config_opt(API_KEY_VAR)
            .ok_or_else(|| Error::config(format!("{} environment variable not set", API_KEY_VAR)))?;
        Ok(Self::new(api_url, api_key))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ActiveCampaignCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveCampaignCredentials")
            .field("api_url", &self.api_url)
            .field("api_key", &"***")
            .finish()
    }
}
