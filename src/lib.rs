/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Short, unique constant names for every Unicode code point, grouped by
//! Unicode block.

pub mod abbrev;
pub mod blocks;
pub mod case_pair;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod messages;
pub mod record;
pub mod unicode;

pub use abbrev::{AbbreviationTables, NameAbbreviator};
pub use blocks::{parse_blocks, BlockIndex, UnicodeBlockRange, NO_BLOCK};
pub use case_pair::{CasePairResolver, CasePairs, PairStrategy};
pub use collision::{CollisionLedger, CollisionResolver, CollisionStats, Resolution, Rung};
pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Result};
pub use record::{BlockOutput, BlockSummary, MacroDefinition};
pub use unicode::{parse_code_point, CharOracle, GeneralCategory, UnicodeData};
