/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_derive::Serialize;

use crate::unicode::CharOracle;

/// One constant definition: a code point, or a lowercase/uppercase pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroDefinition {
    pub identifier: String,
    pub primary_cp: u32,
    /// Uppercase partner of `primary_cp`, or 0.
    pub secondary_cp: u32,
    pub comment: String,
}

impl MacroDefinition {
    pub fn is_pair(&self) -> bool {
        self.secondary_cp != 0
    }

    /// Code points covered by this record.
    pub fn code_points(&self) -> impl Iterator<Item = u32> {
        let secondary = if self.is_pair() { Some(self.secondary_cp) } else { None };
        Some(self.primary_cp).into_iter().chain(secondary)
    }
}

/// `a/A LATIN SMALL LETTER A`, or `U+0300 COMBINING GRAVE ACCENT` when a
/// glyph would not print.
pub fn comment<O: CharOracle>(oracle: &O, name: &str, primary: u32, secondary: Option<u32>) -> String {
    let glyphs: Option<Vec<char>> = Some(primary)
        .into_iter()
        .chain(secondary)
        .map(|cp| printable_glyph(oracle, cp))
        .collect();

    let label = match glyphs {
        Some(glyphs) => glyphs.iter().map(char::to_string).collect::<Vec<_>>().join("/"),
        None => Some(primary)
            .into_iter()
            .chain(secondary)
            .map(|cp| format!("U+{:04X}", cp))
            .collect::<Vec<_>>()
            .join("/"),
    };

    format!("{} {}", label, name)
}

fn printable_glyph<O: CharOracle>(oracle: &O, cp: u32) -> Option<char> {
    if !oracle.category(cp).is_printable() {
        return None;
    }
    std::char::from_u32(cp)
}

/// Self-check counts handed to the emitter with every block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    /// Named code points of the block, counted while scanning it.
    pub represented: usize,
    /// Non-zero code point values written out.
    pub hex_values: usize,
}

impl BlockSummary {
    /// `represented` comes from the block scan. Only `hex_values` is taken
    /// from the records, so a dropped or duplicated value shows up as a
    /// mismatch.
    pub fn new(represented: usize, records: &[MacroDefinition]) -> Self {
        let hex_values = records
            .iter()
            .map(|r| (r.primary_cp != 0) as usize + (r.secondary_cp != 0) as usize)
            .sum();

        BlockSummary {
            represented,
            hex_values,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.represented == self.hex_values
    }
}

/// Everything produced for one Unicode block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockOutput {
    pub name: String,
    pub start: u32,
    pub end: u32,
    pub file_stem: String,
    pub summary: BlockSummary,
    pub records: Vec<MacroDefinition>,
}
