//! Client configuration.
//!
//! [`ShopifyConfig`] carries the settings every [`RestClient`](crate::clients::RestClient)
//! needs beyond the session: API version, an optional base URL override,
//! the User-Agent prefix and the number of attempts per request.
//!
//! ```rust
//! use shopify_draft_orders::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_07)
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;
mod version;

pub use newtypes::{HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Settings shared by every request a client sends.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_version: ApiVersion,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted on 429 and 500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::latest(),
            host: None,
            user_agent_prefix: None,
            tries: 1,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `host`: `None` (requests go to the session's shop)
/// - `user_agent_prefix`: `None`
/// - `tries`: `1`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_version: Option<ApiVersion>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to `host` instead of the shop's own domain.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a throttled or failing request is attempted.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTries`] if `tries` was set to zero.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(ShopifyConfig {
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}
