// frontend_jalsetu/src/config_file.rs
use gloo::{console::error, net::http::Request};
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// BIS standard domestic demand, litres per person per day
pub const DEFAULT_PER_CAPITA_DEMAND_LPD: f64 = 135.0;
/// Rupees per cubic metre of municipal water
pub const DEFAULT_WATER_COST_RS_PER_M3: f64 = 500.0;

const CONFIG_KEY: &str = "jalsetu_config";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FrontendConfig {
    pub api_url: String,
    #[serde(default = "default_per_capita_demand")]
    pub per_capita_demand_lpd: f64,
    #[serde(default = "default_water_cost")]
    pub water_cost_rs_per_m3: f64,
}

fn default_per_capita_demand() -> f64 {
    DEFAULT_PER_CAPITA_DEMAND_LPD
}

fn default_water_cost() -> f64 {
    DEFAULT_WATER_COST_RS_PER_M3
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            per_capita_demand_lpd: DEFAULT_PER_CAPITA_DEMAND_LPD,
            water_cost_rs_per_m3: DEFAULT_WATER_COST_RS_PER_M3,
        }
    }
}

impl FrontendConfig {
    /// Drop a trailing slash and replace an empty url with the default
    fn normalized(mut self) -> Self {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        self.api_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_owned()
        } else {
            trimmed.to_owned()
        };
        self
    }
}

async fn fetch_config() -> Result<FrontendConfig, ReportError> {
    let response = Request::get("/config/config.json")
        .send()
        .await
        .map_err(|e| ReportError::Config(e.to_string()))?;
    if !response.ok() {
        return Err(ReportError::Config(format!(
            "config.json returned status {}",
            response.status()
        )));
    }
    let config: FrontendConfig = response
        .json()
        .await
        .map_err(|e| ReportError::Config(e.to_string()))?;
    Ok(config.normalized())
}

/// Fetch the runtime config and cache it in localStorage.
/// Falls back to the built-in defaults when the file is missing.
pub async fn load_config() {
    let config = match fetch_config().await {
        Ok(config) => config,
        Err(e) => {
            error!(format!("{e}, using defaults"));
            FrontendConfig::default()
        }
    };

    if let Err(e) = LocalStorage::set(CONFIG_KEY, &config) {
        error!(format!("failed to write config to localStorage: {e}"));
    }
}

pub fn get_config() -> FrontendConfig {
    LocalStorage::get::<FrontendConfig>(CONFIG_KEY)
        .map(FrontendConfig::normalized)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let config: FrontendConfig =
            serde_json::from_str(r#"{"api_url":"https://api.jalsetu.in/"}"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.api_url, "https://api.jalsetu.in");
        assert_eq!(config.per_capita_demand_lpd, 135.0);
        assert_eq!(config.water_cost_rs_per_m3, 500.0);
    }

    #[test]
    fn empty_api_url_falls_back() {
        let config = FrontendConfig {
            api_url: "  ".into(),
            ..FrontendConfig::default()
        }
        .normalized();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn overrides_are_kept() {
        let config: FrontendConfig = serde_json::from_str(
            r#"{"api_url":"http://x","per_capita_demand_lpd":100,"water_cost_rs_per_m3":20}"#,
        )
        .unwrap();
        assert_eq!(config.per_capita_demand_lpd, 100.0);
        assert_eq!(config.water_cost_rs_per_m3, 20.0);
    }
}
