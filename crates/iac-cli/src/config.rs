//! TOML network description files

use anyhow::Context;
use iac_runtime::{
    scenario::{REFERENCE_CYCLES, REFERENCE_INPUT, REFERENCE_LINKS, REFERENCE_POOLS},
    ActivationParams, IacNetwork, NetworkBuilder,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Cycle count used when neither the file nor the command line sets one
pub const DEFAULT_CYCLES: u64 = 100;

/// A network description: pools, links, activation scalars and a default run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    /// Mutually inhibitory pools of unit names
    pub pools: Vec<Vec<String>>,

    /// Activation scalars; missing values take the defaults
    #[serde(default)]
    pub params: ParamsSection,

    /// Excitatory links, anchor-pool unit -> targets
    #[serde(default)]
    pub links: BTreeMap<String, Vec<String>>,

    /// Default run settings
    #[serde(default)]
    pub run: RunSection,
}

/// `[params]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<f64>,
}

/// `[run]` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycles: Option<u64>,
    #[serde(default)]
    pub seed_inputs: bool,
    #[serde(default)]
    pub inputs: BTreeMap<String, f64>,
}

impl ParamsSection {
    /// Resolve against the defaults and validate
    pub fn resolve(&self) -> CliResult<ActivationParams> {
        let d = ActivationParams::default();
        Ok(ActivationParams::new(
            self.min.unwrap_or(d.min),
            self.max.unwrap_or(d.max),
            self.decay.unwrap_or(d.decay),
            self.rest.unwrap_or(d.rest),
        )?)
    }
}

impl NetworkFile {
    /// Load a network description from a TOML file
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read network file {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse a network description
    pub fn from_toml(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize network file: {}", e)))
    }

    /// Save to a TOML file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> CliResult<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The reference food/category network with its default run
    pub fn reference() -> Self {
        let d = ActivationParams::default();
        Self {
            pools: REFERENCE_POOLS
                .iter()
                .map(|pool| pool.iter().map(|u| u.to_string()).collect())
                .collect(),
            params: ParamsSection {
                min: Some(d.min),
                max: Some(d.max),
                decay: Some(d.decay),
                rest: Some(d.rest),
            },
            links: REFERENCE_LINKS
                .iter()
                .map(|(source, targets)| {
                    (source.to_string(), targets.iter().map(|t| t.to_string()).collect())
                })
                .collect(),
            run: RunSection {
                cycles: Some(REFERENCE_CYCLES),
                seed_inputs: false,
                inputs: BTreeMap::from([(REFERENCE_INPUT.0.to_string(), REFERENCE_INPUT.1)]),
            },
        }
    }

    /// Build the described network
    pub fn build_network(&self) -> CliResult<IacNetwork> {
        let builder = self
            .pools
            .iter()
            .fold(NetworkBuilder::new(), |b, pool| b.add_pool(pool.iter().cloned()))
            .with_params(self.params.resolve()?)
            .add_connections(self.links.clone());
        Ok(builder.build()?)
    }
}
