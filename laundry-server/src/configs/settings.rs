use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::errors::SettingsError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> Result<SocketAddr, SettingsError> {
        let ip_addr = self
            .host
            .parse::<IpAddr>()
            .map_err(|_| SettingsError::InvalidHost(self.host.clone()))?;

        Ok(SocketAddr::from((ip_addr, self.port)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamHeaders {
    pub accept: String,
    pub referer: String,
    pub user_agent: String,
}

/// Fixed room status endpoint and the identity it expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upstream {
    pub url: String,
    pub school_desc_key: String,
    pub location: String,
    pub user_contact: String,
    pub headers: UpstreamHeaders,
}

impl Upstream {
    pub fn query(&self) -> [(&'static str, &str); 3] {
        [
            ("school_desc_key", self.school_desc_key.as_str()),
            ("location", self.location.as_str()),
            ("userContact", self.user_contact.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub interval_ms: u64,
}

impl Poll {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub accent: String,
    pub backdrop: String,
    pub utc_offset_hours: i8,
}

impl Dashboard {
    pub fn offset(&self) -> UtcOffset {
        UtcOffset::from_hms(self.utc_offset_hours, 0, 0).unwrap_or(UtcOffset::UTC)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub upstream: Upstream,
    pub poll: Poll,
    pub dashboard: Dashboard,
}

impl Settings {
    /// Settings compiled into the binary.
    pub fn new() -> Result<Self, SettingsError> {
        Self::from_toml(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))
    }

    pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(source)?;
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.server.address()?;

        if self.poll.interval_ms == 0 {
            return Err(SettingsError::ZeroInterval);
        }

        if UtcOffset::from_hms(self.dashboard.utc_offset_hours, 0, 0).is_err() {
            return Err(SettingsError::InvalidOffset(self.dashboard.utc_offset_hours));
        }

        Ok(())
    }
}
