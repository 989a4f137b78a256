/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::error::{Error, Result};
use crate::unicode::MAX_CODE_POINT;

/// Block name reported for code points outside every block.
pub const NO_BLOCK: &str = "No_Block";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeBlockRange {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl UnicodeBlockRange {
    pub fn new(name: impl Into<String>, start: u32, end: u32) -> Self {
        UnicodeBlockRange {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }

    /// Lowercase, underscore-separated stem for per-block output files.
    pub fn file_stem(&self) -> String {
        let mut stem = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_alphanumeric() {
                stem.extend(c.to_lowercase());
            } else if !stem.ends_with('_') {
                stem.push('_');
            }
        }
        stem.trim_matches('_').to_owned()
    }
}

/// Sorted block table with binary-search lookup.
#[derive(Debug, Clone, Default)]
pub struct BlockIndex {
    ranges: Vec<UnicodeBlockRange>,
}

impl BlockIndex {
    pub fn new(mut ranges: Vec<UnicodeBlockRange>) -> Self {
        ranges.sort_by_key(|r| r.start);
        BlockIndex { ranges }
    }

    /// Name of the block containing `cp`, or [`NO_BLOCK`].
    pub fn lookup(&self, cp: u32) -> &str {
        self.find(cp).map_or(NO_BLOCK, |r| r.name.as_str())
    }

    pub fn find(&self, cp: u32) -> Option<&UnicodeBlockRange> {
        // first range starting after cp; the candidate is the one before it
        let after = self.ranges.partition_point(|r| r.start <= cp);
        if after == 0 {
            return None;
        }

        let range = &self.ranges[after - 1];
        if range.contains(cp) {
            Some(range)
        } else {
            None
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &UnicodeBlockRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Parse the UCD `Blocks.txt` format: `0000..007F; Basic Latin`.
pub fn parse_blocks(text: &str) -> Result<BlockIndex> {
    let mut ranges = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        if line.is_empty() {
            continue;
        }

        let malformed = |reason: &str| Error::Blocks {
            line: line_no,
            reason: reason.to_owned(),
        };

        let mut parts = line.splitn(2, ';');
        let span = parts.next().unwrap_or("").trim();
        let name = parts.next().map(str::trim).unwrap_or("");
        if name.is_empty() {
            return Err(malformed("missing block name"));
        }

        let mut bounds = span.splitn(2, "..");
        let start = bounds.next().and_then(parse_bound).ok_or_else(|| malformed("bad range start"))?;
        let end = bounds.next().and_then(parse_bound).ok_or_else(|| malformed("bad range end"))?;
        if start > end {
            return Err(malformed("range start is after its end"));
        }

        ranges.push(UnicodeBlockRange::new(name, start, end));
    }

    Ok(BlockIndex::new(ranges))
}

fn parse_bound(s: &str) -> Option<u32> {
    u32::from_str_radix(s.trim(), 16).ok().filter(|&cp| cp < MAX_CODE_POINT)
}
