//! Application configuration
//!
//! Defaults are compiled in; a JSON file named by `MULTISIG_PROPOSALS_CONFIG`
//! overrides any subset of the fields.

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV_VAR: &str = "MULTISIG_PROPOSALS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Testnet,
    Public,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Public => "public",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub network: Network,
    pub explorer_base_url: String,
    /// Signatures required by proposals created in this session.
    pub approval_threshold: u32,
    /// Address recorded as proposer of new proposals.
    pub proposer: String,
    /// Simulated latency of a submission, in milliseconds.
    pub submit_latency_ms: u64,
    pub window_size: [f32; 2],
    /// `tracing` filter directives, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            explorer_base_url: "https://stellar.expert".to_owned(),
            approval_threshold: 2,
            proposer: "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37".to_owned(),
            submit_latency_ms: 600,
            window_size: [900.0, 700.0],
            log_filter: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load from `MULTISIG_PROPOSALS_CONFIG` if set, defaults otherwise.
    /// Runs before logging is set up, so a broken file is returned to the
    /// caller to report.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_path(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// [`AppConfig::load`], falling back to defaults on error.
    pub fn load_or_default() -> (Self, Option<eyre::Report>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn from_path(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path))?;
        Self::from_json(&raw).wrap_err_with(|| format!("invalid config file {}", path))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).wrap_err("failed to parse config JSON")?;
        eyre::ensure!(config.approval_threshold > 0, "approval_threshold must be at least 1");
        Ok(config)
    }

    /// Explorer page for a Stellar account (`G...`) or contract (`C...`).
    pub fn explorer_url(&self, address: &str) -> Option<String> {
        let kind = match address.chars().next()? {
            'G' => "account",
            'C' => "contract",
            _ => return None,
        };
        Some(format!(
            "{}/explorer/{}/{}/{}",
            self.explorer_base_url.trim_end_matches('/'),
            self.network.as_str(),
            kind,
            address
        ))
    }
}
