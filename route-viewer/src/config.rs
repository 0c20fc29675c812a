//! Viewer configuration.

use std::net::SocketAddr;
use std::str::FromStr;

use tracing::warn;

use crate::backend::{BackendConfig, DEFAULT_BASE_URL};
use crate::selection::{Layout, StaleResponsePolicy};

/// Default address the viewer listens on.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), 3000);

/// Settings for the viewer process.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Base URL of the route search service
    pub api_base_url: String,

    /// Address to serve on
    pub bind_addr: SocketAddr,

    /// Timeout for search service requests, in seconds
    pub timeout_secs: u64,

    /// What to do with late search responses
    pub stale_policy: StaleResponsePolicy,

    /// How multiple routes are presented
    pub layout: Layout,

    /// Directory served under `/static`
    pub static_dir: String,
}

impl ViewerConfig {
    /// Create a config with the given search service URL and defaults otherwise.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_stale_policy(mut self, policy: StaleResponsePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Read settings from the process environment.
    ///
    /// | Variable                 | Setting        |
    /// |--------------------------|----------------|
    /// | `ROUTE_API_BASE`         | `api_base_url` |
    /// | `ROUTE_VIEWER_ADDR`      | `bind_addr`    |
    /// | `ROUTE_API_TIMEOUT_SECS` | `timeout_secs` |
    /// | `ROUTE_STALE_POLICY`     | `stale_policy` (`discard` or `accept`) |
    /// | `ROUTE_LAYOUT`           | `layout` (`list` or `tabs`) |
    /// | `ROUTE_STATIC_DIR`       | `static_dir`   |
    ///
    /// Unset variables keep their defaults. Values that do not parse are
    /// logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("ROUTE_API_BASE").filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(addr) = parse_var(&lookup, "ROUTE_VIEWER_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(secs) = parse_var(&lookup, "ROUTE_API_TIMEOUT_SECS") {
            config.timeout_secs = secs;
        }
        if let Some(policy) = parse_var(&lookup, "ROUTE_STALE_POLICY") {
            config.stale_policy = policy;
        }
        if let Some(layout) = parse_var(&lookup, "ROUTE_LAYOUT") {
            config.layout = layout;
        }
        if let Some(dir) = lookup("ROUTE_STATIC_DIR").filter(|v| !v.trim().is_empty()) {
            config.static_dir = dir;
        }

        config
    }

    /// Client settings for the search service.
    pub fn backend(&self) -> BackendConfig {
        BackendConfig::new(&self.api_base_url).with_timeout(self.timeout_secs)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR,
            timeout_secs: 30,
            stale_policy: StaleResponsePolicy::default(),
            layout: Layout::default(),
            static_dir: "static".to_string(),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring invalid setting");
            None
        }
    }
}
