use serde::Deserialize;

use govguard_core::error::{GovGuardError, Result};
use govguard_core::Policy;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub governance_safeguards: GovernanceSafeguardsConfig,

    #[serde(default)]
    pub spot_only: SpotOnlyConfig,
}

impl NodeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GovGuardError::UnsupportedVersion);
        }

        self.governance_safeguards.validate()?;
        self.spot_only.validate()?;

        if self.spot_only.enabled && self.spot_only.enforce_spot_only_validation {
            let gs = &self.governance_safeguards;
            if !gs.enabled || !gs.disable_leverage_modules {
                return Err(GovGuardError::Config(
                    "spot-only validation requires governance safeguards with leverage modules disabled".into(),
                ));
            }
        }

        Ok(())
    }

    /// Restriction policy derived from the safeguards section.
    pub fn policy(&self) -> Policy {
        self.governance_safeguards.to_policy()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GovernanceSafeguardsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maps to `Policy::enabled` when the section is enabled.
    #[serde(default = "default_true")]
    pub disable_leverage_modules: bool,

    /// Appended to the default restricted keywords.
    #[serde(default)]
    pub additional_restricted_types: Vec<String>,

    /// Appended to the default restricted modules.
    #[serde(default)]
    pub additional_restricted_modules: Vec<String>,
}

impl Default for GovernanceSafeguardsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disable_leverage_modules: true,
            additional_restricted_types: Vec::new(),
            additional_restricted_modules: Vec::new(),
        }
    }
}

impl GovernanceSafeguardsConfig {
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("additional_restricted_types", &self.additional_restricted_types),
            ("additional_restricted_modules", &self.additional_restricted_modules),
        ];
        for (name, list) in lists {
            if let Some(i) = list.iter().position(|s| s.trim().is_empty()) {
                return Err(GovGuardError::Config(format!(
                    "governance_safeguards.{name}[{i}] must not be empty"
                )));
            }
        }
        Ok(())
    }

    pub fn to_policy(&self) -> Policy {
        if !self.enabled {
            return Policy::disabled();
        }

        Policy {
            enabled: self.disable_leverage_modules,
            ..Policy::default()
        }
        .with_extra_keywords(normalized(&self.additional_restricted_types))
        .with_extra_modules(normalized(&self.additional_restricted_modules))
    }
}

fn normalized(list: &[String]) -> impl Iterator<Item = String> + '_ {
    list.iter().map(|s| s.trim().to_lowercase())
}

/// Spot-only chain profile. Leverage in any form must stay off.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpotOnlyConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_chain_id")]
    pub chain_id: String,
    #[serde(default = "default_chain_name")]
    pub chain_name: String,
    #[serde(default)]
    pub description: String,
    /// 0 = spot only.
    #[serde(default)]
    pub max_leverage: u32,
    #[serde(default = "default_true")]
    pub disable_margin_trading: bool,
    #[serde(default = "default_true")]
    pub disable_perpetual_contracts: bool,
    #[serde(default = "default_true")]
    pub enforce_spot_only_validation: bool,
}

impl Default for SpotOnlyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chain_id: default_chain_id(),
            chain_name: default_chain_name(),
            description: String::new(),
            max_leverage: 0,
            disable_margin_trading: true,
            disable_perpetual_contracts: true,
            enforce_spot_only_validation: true,
        }
    }
}

impl SpotOnlyConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.max_leverage > 0 {
            return Err(GovGuardError::Config(
                "leverage is not allowed in spot-only mode".into(),
            ));
        }
        if !self.disable_margin_trading {
            return Err(GovGuardError::Config(
                "margin trading must be disabled in spot-only mode".into(),
            ));
        }
        if !self.disable_perpetual_contracts {
            return Err(GovGuardError::Config(
                "perpetual contracts must be disabled in spot-only mode".into(),
            ));
        }
        Ok(())
    }
}

fn default_chain_id() -> String {
    "osmosis-spot-1".into()
}
fn default_chain_name() -> String {
    "Osmosis Spot-Only DEX".into()
}
