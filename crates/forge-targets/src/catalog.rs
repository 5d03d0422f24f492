//! TOML-backed catalogs mapping unique names to records.
//!
//! Each catalog is one TOML file whose top-level tables are the records,
//! keyed by name:
//!
//! ```toml
//! [mbed_lpc1768]
//! platform = "lpc17xx"
//! features = ["mcu_has_ethernet"]
//! ```
//!
//! TOML rejects duplicate table names, so every name appears at most once.
//! Lookup of an unknown name returns `None` — deciding whether that is an
//! error is the resolver's job, not the catalog's.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, TargetError};

/// A record that can live in a catalog.
///
/// Records are deserialized from the table body; the table key becomes the
/// record's name via [`Record::named`].
pub trait Record: DeserializeOwned {
    /// Attach the catalog key as the record's name.
    fn named(self, name: &str) -> Self;
}

/// An immutable name → record table loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    entries: BTreeMap<String, R>,
}

impl<R: Record> Catalog<R> {
    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TargetError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let raw: BTreeMap<String, R> = toml::from_str(toml_str)?;
        let entries = raw
            .into_iter()
            .map(|(name, record)| {
                let record = record.named(&name);
                (name, record)
            })
            .collect();
        Ok(Catalog { entries })
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&R> {
        self.entries.get(name)
    }

    /// All record names, in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::platform::Platform;

    #[test]
    fn parse_board_catalog() {
        let catalog: Catalog<Board> = Catalog::from_toml_str(
            r#"
[mbed_lpc1768]
platform = "lpc17xx"
features = ["mcu_has_ethernet"]

[stm32f4discovery]
platform = "stm32f4"
"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let board = catalog.get("mbed_lpc1768").unwrap();
        assert_eq!(board.name, "mbed_lpc1768");
        assert_eq!(board.platform, "lpc17xx");
        assert_eq!(board.features, vec!["mcu_has_ethernet"]);

        // features default to empty when omitted
        let bare = catalog.get("stm32f4discovery").unwrap();
        assert!(bare.features.is_empty());
    }

    #[test]
    fn parse_platform_catalog_arch_key() {
        let catalog: Catalog<Platform> = Catalog::from_toml_str(
            r#"
[lpc17xx]
arch = "cortex_m3"
features = ["mcu_lpc17xx"]
"#,
        )
        .unwrap();

        let platform = catalog.get("lpc17xx").unwrap();
        assert_eq!(platform.name, "lpc17xx");
        assert_eq!(platform.arch_name, "cortex_m3");
    }

    #[test]
    fn unknown_name_returns_none() {
        let catalog: Catalog<Board> =
            Catalog::from_toml_str("[only]\nplatform = \"p\"\n").unwrap();
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let catalog: Catalog<Board> = Catalog::from_toml_str(
            "[zebra]\nplatform = \"p\"\n\n[alpha]\nplatform = \"p\"\n",
        )
        .unwrap();
        assert_eq!(catalog.names(), vec!["alpha", "zebra"]);
    }

    #[test]
    fn duplicate_name_is_a_parse_error() {
        let result: Result<Catalog<Board>> = Catalog::from_toml_str(
            "[dup]\nplatform = \"a\"\n\n[dup]\nplatform = \"b\"\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let result: Result<Catalog<Board>> = Catalog::from_toml_str("not toml [[[");
        assert!(matches!(result.unwrap_err(), TargetError::Toml(_)));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result: Result<Catalog<Board>> = Catalog::from_toml_str("[incomplete]\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let result: Result<Catalog<Board>> =
            Catalog::load(Path::new("/nonexistent/boards.toml"));
        assert!(matches!(result.unwrap_err(), TargetError::NotFound { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boards.toml");
        std::fs::write(&path, "[foo]\nplatform = \"bar\"\n").unwrap();

        let catalog: Catalog<Board> = Catalog::load(&path).unwrap();
        assert_eq!(catalog.get("foo").unwrap().platform, "bar");
    }

    #[test]
    fn empty_catalog() {
        let catalog: Catalog<Board> = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.names().is_empty());
    }
}
