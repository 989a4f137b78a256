/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::path::PathBuf;

use serde_derive::Deserialize;

use crate::abbrev::AbbreviationTables;
use crate::error::Result;

/// Contents of the optional TOML configuration file.
///
/// ```toml
/// unicode_data = "ucd/UnicodeData.txt"
/// blocks = "ucd/Blocks.txt"
/// unicode_version = "17.0.0"
///
/// [tables]
/// redundant = ["LETTER", "WITH"]
///
/// [[tables.replacements]]
/// from = "DOUBLE-STRUCK"
/// to = "DS"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unicode_data: Option<PathBuf>,
    pub blocks: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub unicode_version: Option<String>,
    pub tables: AbbreviationTables,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbrev::Replacement;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.tables.redundant.contains("LETTER"));
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = Config::parse(
            r#"
            blocks = "Blocks.txt"

            [tables]
            redundant = ["WITH"]

            [[tables.replacements]]
            from = "BLACK"
            to = "BK"
            "#,
        )
        .unwrap();

        assert_eq!(config.blocks, Some(PathBuf::from("Blocks.txt")));
        assert_eq!(config.tables.redundant.len(), 1);
        assert_eq!(config.tables.replacements, vec![Replacement::new("BLACK", "BK")]);
        assert_eq!(config.tables.prefixes.get("GREEK").map(String::as_str), Some("EL"));
    }

    #[test]
    fn prefixes_override() {
        let config = Config::parse("[tables.prefixes]\nRUNIC = \"RU\"\n").unwrap();

        assert_eq!(config.tables.prefixes.len(), 1);
        assert_eq!(config.tables.block_prefix("Runic"), "RU");
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(Config::parse("unicode_data = [").is_err());
        assert!(Config::parse("tables = 3").is_err());
    }
}
