use crate::core::runner::DEFAULT_COUNTER_VALUE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_single_line, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub counter: CounterConfig,
    pub composite: CompositeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub value: i32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_COUNTER_VALUE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    pub items: Vec<String>,
}

impl FixtureConfig {
    /// Loads and validates a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_path("config", &path.to_string_lossy())?;

        tracing::debug!("Reading fixture config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: FixtureConfig = content.parse()?;
        config.validate()?;
        Ok(config)
    }
}

impl FromStr for FixtureConfig {
    type Err = crate::utils::error::SampleError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl Validate for FixtureConfig {
    fn validate(&self) -> Result<()> {
        for item in &self.composite.items {
            validate_single_line("composite.items", item)?;
        }
        Ok(())
    }
}
