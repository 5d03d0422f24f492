//! Board records — named hardware targets.

use serde::Deserialize;

use crate::catalog::Record;

/// A named hardware board referencing exactly one platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Board {
    /// Board name (the catalog key, attached on load).
    #[serde(skip)]
    pub name: String,
    /// Name of the platform this board carries.
    pub platform: String,
    /// Board-level feature set.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Record for Board {
    fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}
