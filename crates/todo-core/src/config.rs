//! Application Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Root of the todo resource (without the trailing `/todos`)
    pub base_url: String,
    /// Owner of every todo this session reads and writes
    pub user_id: Option<u32>,
    /// How long an error notice stays visible
    pub notice_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: None,
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply string overrides (typically compile-time env vars)
    ///
    /// Empty strings are treated as absent.
    pub fn with_overrides(mut self, base_url: Option<&str>, user_id: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = user_id.map(str::trim).filter(|u| !u.is_empty()) {
            let id = raw
                .parse::<u32>()
                .ok()
                .filter(|id| *id != 0)
                .ok_or_else(|| ConfigError::InvalidUserId(raw.to_string()))?;
            self.user_id = Some(id);
        }
        Ok(self)
    }

    pub fn user_id(&self) -> Result<u32, ConfigError> {
        self.user_id.ok_or(ConfigError::MissingUserId)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}
