/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Identifier synthesis over the whole code point space.
//!
//! Blocks are processed in ascending order and code points in ascending
//! order within a block. The collision ledger is shared by all blocks, so
//! this order decides which of two clashing names keeps the short form.

use log::{debug, error, info};

use crate::abbrev::{AbbreviationTables, NameAbbreviator};
use crate::blocks::{BlockIndex, UnicodeBlockRange};
use crate::case_pair::CasePairResolver;
use crate::collision::{CollisionResolver, CollisionStats, Rung};
use crate::record::{self, BlockOutput, BlockSummary, MacroDefinition};
use crate::unicode::CharOracle;

pub struct Engine<'a, O: CharOracle> {
    oracle: &'a O,
    abbreviator: NameAbbreviator,
    pairs: CasePairResolver,
    resolver: CollisionResolver,
}

impl<'a, O: CharOracle> Engine<'a, O> {
    pub fn new(oracle: &'a O, tables: AbbreviationTables) -> Self {
        Engine {
            oracle,
            abbreviator: NameAbbreviator::new(tables),
            pairs: CasePairResolver::default(),
            resolver: CollisionResolver::new(),
        }
    }

    pub fn with_pair_resolver(mut self, pairs: CasePairResolver) -> Self {
        self.pairs = pairs;
        self
    }

    /// Process every block of `index`. Blocks without a single named code
    /// point are left out.
    pub fn run(&mut self, index: &BlockIndex) -> Vec<BlockOutput> {
        let mut outputs = Vec::with_capacity(index.len());

        for block in index.blocks() {
            let output = self.synthesize_block(block);
            if output.records.is_empty() {
                debug!(
                    "block '{}' (U+{:04X}..U+{:04X}): skipped, nothing to define",
                    block.name, block.start, block.end
                );
                continue;
            }

            info!(
                "block '{}' (U+{:04X}..U+{:04X}): {} definitions",
                block.name,
                block.start,
                block.end,
                output.records.len()
            );
            outputs.push(output);
        }

        outputs
    }

    pub fn synthesize_block(&mut self, block: &UnicodeBlockRange) -> BlockOutput {
        let prefix = self.abbreviator.block_prefix(&block.name).to_owned();
        let pairs = self.pairs.resolve(self.oracle, block.start..=block.end);
        let mut records = Vec::new();
        let mut represented = 0;

        for cp in block.start..=block.end {
            let name = match self.oracle.name(cp) {
                Some(name) => name,
                None => continue,
            };
            represented += 1;

            let record = match pairs.partner_of(cp) {
                Some(upper) => self.define(&prefix, &name, cp, Some(upper)),
                None if pairs.is_claimed_upper(cp) => continue,
                None => self.define(&prefix, &name, cp, None),
            };
            records.push(record);
        }

        let summary = BlockSummary::new(represented, &records);
        if !summary.is_consistent() {
            error!(
                "block '{}': {} code points represented but {} values written",
                block.name, summary.represented, summary.hex_values
            );
        }

        BlockOutput {
            name: block.name.clone(),
            start: block.start,
            end: block.end,
            file_stem: block.file_stem(),
            summary,
            records,
        }
    }

    fn define(&mut self, prefix: &str, name: &str, cp: u32, upper: Option<u32>) -> MacroDefinition {
        let strip_case = upper.is_some();
        let candidate = self.abbreviator.abbreviate(prefix, name, strip_case);
        let expanded = self.abbreviator.expand(prefix, name, strip_case);
        let resolution = self.resolver.resolve(&candidate, &expanded, cp);

        if resolution.rung == Rung::CodePointSuffix {
            debug!("U+{:04X} ({}) could not keep a readable identifier", cp, name);
        }

        MacroDefinition {
            identifier: resolution.identifier,
            primary_cp: cp,
            secondary_cp: upper.unwrap_or(0),
            comment: record::comment(self.oracle, name, cp, upper),
        }
    }

    pub fn stats(&self) -> CollisionStats {
        self.resolver.stats()
    }
}
