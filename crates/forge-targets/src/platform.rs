//! Platform records — MCU/SoC families.

use serde::Deserialize;

use crate::catalog::Record;

/// A named microcontroller family referencing exactly one architecture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Platform {
    /// Platform name (the catalog key, attached on load).
    #[serde(skip)]
    pub name: String,
    /// Name of the architecture this platform is built on.
    #[serde(rename = "arch")]
    pub arch_name: String,
    /// Platform-level feature set.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Record for Platform {
    fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}
