use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::domain::{chart::QueryEncoding, errors::ChartUpdateError, logging::LogLevel};

/// Which response may draw when updates overlap
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Last click wins: older fetches are aborted and stale responses dropped
    #[default]
    LatestRequest,
    /// Every response draws as it resolves; last to arrive wins
    LatestResponse,
}

/// How the display region is handed to the plotting call
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum TargetMode {
    /// Look the element up once and pass the handle
    #[default]
    Element,
    /// Pass the id string and let the plotting library resolve it
    Id,
}

/// Page wiring and request policy, deserialized from the optional JS config object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ChartUpdaterConfig {
    pub endpoint: String,
    pub symbol_input_id: String,
    pub trigger_id: String,
    pub chart_id: String,
    pub target_mode: TargetMode,
    pub query_encoding: QueryEncoding,
    pub ordering: ResponseOrdering,
    pub log_level: LogLevel,
}

impl Default for ChartUpdaterConfig {
    fn default() -> Self {
        Self {
            endpoint: "/data".to_string(),
            symbol_input_id: "symbol".to_string(),
            trigger_id: "generate".to_string(),
            chart_id: "chart".to_string(),
            target_mode: TargetMode::default(),
            query_encoding: QueryEncoding::default(),
            ordering: ResponseOrdering::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl ChartUpdaterConfig {
    pub fn from_json_str(config: &str) -> Result<Self, ChartUpdateError> {
        serde_json::from_str(config).map_err(|e| ChartUpdateError::Configuration(e.to_string()))
    }
}
