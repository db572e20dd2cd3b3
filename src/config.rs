//! Parameters of the demonstration binary.
//!
//! All the fields are optional: the defaults reproduce the classic demo
//! (`add5(1)`, five rounds of increments, capitalizing "one two three").

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// The offset captured by the adder
    pub adder_offset: i64,
    /// The value given to the adder
    pub adder_input: i64,
    /// Number of rounds in the incrementer demo: in every round the first
    /// incrementer is incremented once and the second one twice
    pub rounds: u32,
    /// The words to capitalize
    pub words: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            adder_offset: 5,
            adder_input: 1,
            rounds: 5,
            words: vec!["one".to_string(), "two".to_string(), "three".to_string()],
        }
    }
}

impl DemoConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load the configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading configuration from {}", path.display());
        let f = File::open(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        // Serde makes things easy
        Ok(serde_json::from_reader(f)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
