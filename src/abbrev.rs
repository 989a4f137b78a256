/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Name shortening.
//!
//! A Unicode name goes through three layers before it becomes an
//! identifier body:
//!
//! 1. script words that the block prefix already implies are dropped
//!    (`GREEK SMALL LETTER ALPHA` in a block prefixed `EL`),
//! 2. generic descriptor words are dropped (`LETTER`, `WITH`, ...),
//! 3. long stylistic phrases are replaced by short codes
//!    (`DOUBLE-STRUCK` -> `DS`).
//!
//! Phrase replacement runs first on the raw name, so a phrase such as
//! `MODIFIER LETTER` is seen before `LETTER` is considered on its own.

use std::collections::{BTreeMap, BTreeSet};

use serde_derive::{Deserialize, Serialize};

/// Words naming the case of a letter, removed from case pair names.
pub const CASE_WORDS: [&str; 4] = ["SMALL", "CAPITAL", "LOWERCASE", "UPPERCASE"];

/// Body used when every word of a name was removed.
pub const FALLBACK_BODY: &str = "CHAR";

pub const IDENTIFIER_ROOT: &str = "UC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: &str, to: &str) -> Self {
        Replacement {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbbreviationTables {
    /// Layer 1: script word -> block prefix.
    pub prefixes: BTreeMap<String, String>,
    /// Layer 2: words carrying no distinguishing information.
    pub redundant: BTreeSet<String>,
    /// Layer 3: phrase replacements, applied in order.
    pub replacements: Vec<Replacement>,
}

impl Default for AbbreviationTables {
    fn default() -> Self {
        let prefixes = [
            ("GREEK", "EL"),
            ("LATIN", "LA"),
            ("ARABIC", "AR"),
            ("HEBREW", "HE"),
            ("THAI", "TH"),
            ("KHMER", "KM"),
            ("TIBETAN", "TB"),
            ("CYRILLIC", "CY"),
            ("COPTIC", "CP"),
            ("DEVANAGARI", "DV"),
            ("BENGALI", "BN"),
            ("GUJARATI", "GJ"),
            ("GURMUKHI", "GK"),
            ("ORIYA", "OR"),
            ("TAMIL", "TM"),
            ("TELUGU", "TL"),
            ("GENERAL", "GN"),
            ("COMBINING", "CM"),
            ("SUPERSCRIPTS", "SS"),
            ("SUBSCRIPTS", "SB"),
            ("MATHEMATICAL", "MA"),
            ("MISCELLANEOUS", "MS"),
            ("ENCLOSED", "EN"),
            ("CJK", "CJK"),
        ]
        .iter()
        .map(|&(word, prefix)| (word.to_owned(), prefix.to_owned()))
        .collect();

        let redundant = ["LETTER", "WITH", "SYMBOL", "CHARACTER", "SIGN", "FORM"]
            .iter()
            .map(|&w| w.to_owned())
            .collect();

        let replacements = vec![
            Replacement::new("MODIFIER LETTER", "MOD"),
            Replacement::new("VARIATION SELECTOR", "VS"),
            Replacement::new("DOUBLE-STRUCK", "DS"),
            Replacement::new("SANS-SERIF", "SSF"),
            Replacement::new("BOLD ITALIC", "BI"),
            Replacement::new("MONOSPACE", "MON"),
            Replacement::new("FRAKTUR", "FR"),
            Replacement::new("PARENTHESIZED", "PAR"),
            Replacement::new("CIRCLED", "CIR"),
            Replacement::new("FULLWIDTH", "FW"),
            Replacement::new("HALFWIDTH", "HW"),
            Replacement::new("SUPERSCRIPT", "SUP"),
            Replacement::new("SUBSCRIPT", "SUB"),
        ];

        AbbreviationTables {
            prefixes,
            redundant,
            replacements,
        }
    }
}

impl AbbreviationTables {
    /// Prefix of the first word of `block_name` that names a script, or "".
    pub fn block_prefix(&self, block_name: &str) -> &str {
        split_words(&block_name.to_uppercase())
            .find_map(|word| self.prefixes.get(word))
            .map_or("", String::as_str)
    }
}

/// Turns Unicode names into identifier candidates.
#[derive(Debug, Clone, Default)]
pub struct NameAbbreviator {
    tables: AbbreviationTables,
}

impl NameAbbreviator {
    pub fn new(tables: AbbreviationTables) -> Self {
        NameAbbreviator { tables }
    }

    pub fn tables(&self) -> &AbbreviationTables {
        &self.tables
    }

    pub fn block_prefix(&self, block_name: &str) -> &str {
        self.tables.block_prefix(block_name)
    }

    /// Short candidate identifier for `name` within a block prefixed `prefix`.
    pub fn abbreviate(&self, prefix: &str, name: &str, strip_case: bool) -> String {
        let mut upper = prepare(name, strip_case);

        for r in &self.tables.replacements {
            let from = r.from.to_uppercase();
            if !from.is_empty() && upper.contains(&from) {
                upper = upper.replace(&from, &r.to.to_uppercase());
            }
        }

        let normalized = normalize(&upper);
        let body: Vec<&str> = normalized
            .split('_')
            .filter(|token| !token.is_empty())
            .filter(|token| !self.tables.redundant.contains(*token))
            .filter(|token| !self.implied_by_prefix(prefix, token))
            .collect();

        assemble(prefix, &body.join("_"))
    }

    /// `token` is a script word whose prefix is the block prefix itself.
    fn implied_by_prefix(&self, prefix: &str, token: &str) -> bool {
        !prefix.is_empty() && self.tables.prefixes.get(token).map(String::as_str) == Some(prefix)
    }

    /// Unshortened identifier: case stripping and normalization only.
    pub fn expand(&self, prefix: &str, name: &str, strip_case: bool) -> String {
        assemble(prefix, &normalize(&prepare(name, strip_case)))
    }
}

fn prepare(name: &str, strip_case: bool) -> String {
    if strip_case {
        name.split(' ')
            .filter(|word| !CASE_WORDS.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase()
    } else {
        name.to_uppercase()
    }
}

/// Collapse every run of non-word characters into one underscore and trim.
fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() || c == '_' {
            if c == '_' && out.ends_with('_') {
                continue;
            }
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_owned()
}

fn split_words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
}

fn assemble(prefix: &str, body: &str) -> String {
    let body = if body.is_empty() { FALLBACK_BODY } else { body };

    if prefix.is_empty() {
        format!("{}_{}", IDENTIFIER_ROOT, body)
    } else {
        format!("{}_{}_{}", IDENTIFIER_ROOT, prefix, body)
    }
}
