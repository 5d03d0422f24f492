//! Architecture records — instruction-set families.

use serde::Deserialize;

use crate::catalog::Record;

/// A named instruction-set family with its cross-compilation identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Architecture {
    /// Architecture name (the catalog key, attached on load).
    #[serde(skip)]
    pub name: String,
    /// Cross-compilation target triple (e.g. `thumbv7m-none-eabi`).
    pub target: String,
    /// Target CPU identifier (e.g. `cortex-m3`).
    pub cpu: String,
}

impl Record for Architecture {
    fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}
