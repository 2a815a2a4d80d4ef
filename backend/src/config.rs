//! Generator configuration
//!
//! Serde-friendly description of which generator to build. Embed it in a
//! larger config file or parse it from JSON directly.

use crate::engine::Generator;
use crate::error::{Result, RngError};
use crate::registry::{self, AlgorithmDescriptor, DEFAULT_ALGORITHM};
use serde::{Deserialize, Serialize};

/// Which algorithm to use and how to seed it
///
/// # Example
/// ```
/// use rngstate_core::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json(r#"{"algorithm": "taus2", "seed": 7}"#).unwrap();
/// let rng = config.build().unwrap();
/// assert_eq!(rng.name(), "taus2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Registry name of the algorithm
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Seed; `None` uses the algorithm's default seed
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(algorithm: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            algorithm: algorithm.into(),
            seed,
        }
    }

    /// Parse a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| RngError::InvalidConfig(format!("Config parse failed: {}", e)))
    }

    /// Resolve the algorithm name
    ///
    /// # Errors
    /// `InvalidConfig` if the algorithm is not registered.
    pub fn validate(&self) -> Result<&'static AlgorithmDescriptor> {
        registry::lookup(&self.algorithm).map_err(|_| {
            RngError::InvalidConfig(format!("algorithm '{}' is not registered", self.algorithm))
        })
    }

    /// Build a generator from this config
    pub fn build(&self) -> Result<Generator> {
        let descriptor = self.validate()?;
        Ok(Generator::from_descriptor(descriptor, self.seed))
    }
}
