// src/core/config.rs

use crate::core::common::OxiannError;
use crate::core::indexing::ann::SplitPolicyKind;
use crate::core::vector::Metric;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime choices for a tree built with
/// [`AnnTree::from_config`](crate::AnnTree::from_config).
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// split_policy = "random"
/// seed = 42
/// distance = "manhattan"
/// balance_on_construct = true
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnnConfig {
    pub split_policy: SplitPolicyKind,
    /// Seed for the random split policy. Without one it seeds from OS entropy.
    pub seed: Option<u64>,
    pub distance: Metric,
    /// Balance once after every bulk construction.
    pub balance_on_construct: bool,
}

/// Fluent builder for [`AnnConfig`]; unset fields take the defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    split_policy: Option<SplitPolicyKind>,
    seed: Option<u64>,
    distance: Option<Metric>,
    balance_on_construct: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn split_policy(mut self, kind: SplitPolicyKind) -> Self {
        self.split_policy = Some(kind);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn distance(mut self, metric: Metric) -> Self {
        self.distance = Some(metric);
        self
    }

    pub fn balance_on_construct(mut self, enabled: bool) -> Self {
        self.balance_on_construct = Some(enabled);
        self
    }

    /// Builds the config and validates it.
    pub fn build(self) -> Result<AnnConfig, OxiannError> {
        let config = AnnConfig {
            split_policy: self.split_policy.unwrap_or_default(),
            seed: self.seed,
            distance: self.distance.unwrap_or_default(),
            balance_on_construct: self.balance_on_construct.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}

impl AnnConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Rejects combinations that would be silently ignored.
    pub fn validate(&self) -> Result<(), OxiannError> {
        if self.seed.is_some() && self.split_policy == SplitPolicyKind::Median {
            return Err(OxiannError::Configuration(
                "seed is only used by the random split policy".to_string(),
            ));
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `OxiannError::Configuration` if parsing or validation fails,
    /// `OxiannError::Io` if the file exists but cannot be read. A missing file
    /// yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self, OxiannError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    OxiannError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
                config.validate()?;
                debug!(
                    "loaded ann config from {}: {} split, {} distance",
                    path.display(),
                    config.split_policy.name(),
                    config.distance.name()
                );
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(OxiannError::Io(e)),
        }
    }

    /// Loads from `optional_path` when given, otherwise returns the default.
    ///
    /// # Errors
    ///
    /// Same as [`AnnConfig::load_from_file`].
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, OxiannError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Median-split KD-tree, Euclidean distance.
    pub fn kd_tree() -> Self {
        Self::default()
    }

    /// Seeded random projection tree, Euclidean distance.
    pub fn rp_tree(seed: u64) -> Self {
        Self { split_policy: SplitPolicyKind::Random, seed: Some(seed), ..Self::default() }
    }
}
