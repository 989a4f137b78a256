/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;

use log::trace;

use crate::unicode::{CharOracle, GeneralCategory};

/// Ways of finding the uppercase partner of a lowercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStrategy {
    /// `... SMALL ...` -> `... CAPITAL ...`, resolved through the name index.
    NameSubstitution,
    /// Single code point uppercase mapping.
    CaseMapping,
}

pub const DEFAULT_STRATEGIES: [PairStrategy; 2] = [PairStrategy::NameSubstitution, PairStrategy::CaseMapping];

const CASE_SUBSTITUTIONS: [(&str, &str); 2] = [("SMALL", "CAPITAL"), ("LOWERCASE", "UPPERCASE")];

impl PairStrategy {
    pub fn partner<O: CharOracle>(self, oracle: &O, cp: u32, name: &str) -> Option<u32> {
        let upper = match self {
            PairStrategy::NameSubstitution => {
                let capital = capital_name(name)?;
                oracle.lookup(&capital)?
            }
            PairStrategy::CaseMapping => match oracle.uppercase(cp).as_slice() {
                &[upper] if upper != cp => upper,
                _ => return None,
            },
        };

        if oracle.category(upper) == GeneralCategory::Lu {
            Some(upper)
        } else {
            None
        }
    }
}

/// Swap the first whole-word case marker of a lowercase name.
fn capital_name(name: &str) -> Option<String> {
    let words: Vec<&str> = name.split(' ').collect();

    CASE_SUBSTITUTIONS.iter().find_map(|&(lower, upper)| {
        let pos = words.iter().position(|w| *w == lower)?;
        let mut swapped = words.clone();
        swapped[pos] = upper;
        Some(swapped.join(" "))
    })
}

/// Lowercase -> uppercase partners within one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CasePairs {
    by_lower: BTreeMap<u32, u32>,
    claimed: HashSet<u32>,
}

impl CasePairs {
    pub fn partner_of(&self, lower: u32) -> Option<u32> {
        self.by_lower.get(&lower).cloned()
    }

    /// `cp` is some lowercase letter's partner and gets no record of its own.
    pub fn is_claimed_upper(&self, cp: u32) -> bool {
        self.claimed.contains(&cp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.by_lower.iter().map(|(&lower, &upper)| (lower, upper))
    }

    pub fn len(&self) -> usize {
        self.by_lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_lower.is_empty()
    }

    fn insert(&mut self, lower: u32, upper: u32) -> bool {
        if !self.claimed.insert(upper) {
            return false;
        }
        self.by_lower.insert(lower, upper);
        true
    }
}

#[derive(Debug, Clone)]
pub struct CasePairResolver {
    strategies: Vec<PairStrategy>,
}

impl Default for CasePairResolver {
    fn default() -> Self {
        CasePairResolver::new(DEFAULT_STRATEGIES.to_vec())
    }
}

impl CasePairResolver {
    pub fn new(strategies: Vec<PairStrategy>) -> Self {
        CasePairResolver { strategies }
    }

    /// Discover every pair in `range`. Partners outside the range are ignored
    /// so that a block never claims a letter another block emits.
    pub fn resolve<O: CharOracle>(&self, oracle: &O, range: RangeInclusive<u32>) -> CasePairs {
        let mut pairs = CasePairs::default();

        for cp in range.clone() {
            if oracle.category(cp) != GeneralCategory::Ll {
                continue;
            }
            let name = match oracle.name(cp) {
                Some(name) => name,
                None => continue,
            };

            // the first strategy with an answer decides, even if the
            // answer lies outside the range
            let upper = match self.strategies.iter().find_map(|s| s.partner(oracle, cp, &name)) {
                Some(upper) if range.contains(&upper) => upper,
                Some(upper) => {
                    trace!("U+{:04X}: partner U+{:04X} is outside the block", cp, upper);
                    continue;
                }
                None => continue,
            };

            if !pairs.insert(cp, upper) {
                trace!("U+{:04X}: partner U+{:04X} already claimed", cp, upper);
            }
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::UnicodeData;

    const SAMPLE: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
0062;LATIN SMALL LETTER B;Ll;0;L;;;;;N;;;0042;;0042
00B5;MICRO SIGN;Ll;0;L;<compat> 03BC;;;;N;;;039C;;039C
00DF;LATIN SMALL LETTER SHARP S;Ll;0;L;;;;;N;;;;;
0131;LATIN SMALL LETTER DOTLESS I;Ll;0;L;;;;;N;;;0049;;0049
0049;LATIN CAPITAL LETTER I;Lu;0;L;;;;;N;;;;0069;
0069;LATIN SMALL LETTER I;Ll;0;L;;;;;N;;;0049;;0049
";

    fn data() -> UnicodeData {
        UnicodeData::parse(SAMPLE).unwrap()
    }

    #[test]
    fn capital_name_swaps_whole_words() {
        assert_eq!(capital_name("LATIN SMALL LETTER A").as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(capital_name("SMALLER THAN"), None);
        assert_eq!(
            capital_name("ARMENIAN LOWERCASE LETTER X").as_deref(),
            Some("ARMENIAN UPPERCASE LETTER X")
        );
    }

    #[test]
    fn pairs_by_name() {
        let pairs = CasePairResolver::default().resolve(&data(), 0x0000..=0x007F);

        assert_eq!(pairs.partner_of(0x61), Some(0x41));
        assert_eq!(pairs.partner_of(0x62), Some(0x42));
        assert!(pairs.is_claimed_upper(0x41));
        assert!(!pairs.is_claimed_upper(0x61));
    }

    #[test]
    fn multi_char_uppercase_has_no_partner() {
        let pairs = CasePairResolver::default().resolve(&data(), 0x0080..=0x00FF);
        assert_eq!(pairs.partner_of(0xDF), None);
    }

    #[test]
    fn partner_must_be_in_range() {
        // U+00B5 uppercases to U+039C, which lives in another block
        let pairs = CasePairResolver::default().resolve(&data(), 0x0080..=0x00FF);
        assert_eq!(pairs.partner_of(0xB5), None);
        assert!(pairs.is_empty());
    }

    #[test]
    fn upper_claimed_only_once() {
        // both U+0069 and U+0131 uppercase to U+0049; ascending order wins
        let resolver = CasePairResolver::new(vec![PairStrategy::CaseMapping]);
        let pairs = resolver.resolve(&data(), 0x0000..=0x017F);

        assert_eq!(pairs.partner_of(0x69), Some(0x49));
        assert_eq!(pairs.partner_of(0x131), None);
        assert_eq!(pairs.iter().filter(|&(_, up)| up == 0x49).count(), 1);
    }

    /// U+0010 is a small letter whose name points to U+0090 while its case
    /// mapping points to U+0011. Both targets are capitals.
    struct Disagreeing;

    impl CharOracle for Disagreeing {
        fn name(&self, cp: u32) -> Option<String> {
            match cp {
                0x10 => Some("TEST SMALL LETTER X".to_owned()),
                0x11 => Some("TEST CAPITAL LETTER Y".to_owned()),
                0x90 => Some("TEST CAPITAL LETTER X".to_owned()),
                _ => None,
            }
        }

        fn category(&self, cp: u32) -> GeneralCategory {
            match cp {
                0x10 => GeneralCategory::Ll,
                0x11 | 0x90 => GeneralCategory::Lu,
                _ => GeneralCategory::Cn,
            }
        }

        fn lookup(&self, name: &str) -> Option<u32> {
            match name {
                "TEST CAPITAL LETTER X" => Some(0x90),
                _ => None,
            }
        }

        fn uppercase(&self, cp: u32) -> Vec<u32> {
            match cp {
                0x10 => vec![0x11],
                _ => vec![cp],
            }
        }
    }

    #[test]
    fn first_strategy_decides() {
        let pairs = CasePairResolver::default().resolve(&Disagreeing, 0x00..=0xFF);
        assert_eq!(pairs.partner_of(0x10), Some(0x90));
    }

    #[test]
    fn out_of_range_answer_is_not_replaced_by_a_later_strategy() {
        let pairs = CasePairResolver::default().resolve(&Disagreeing, 0x00..=0x7F);

        assert_eq!(pairs.partner_of(0x10), None);
        assert!(!pairs.is_claimed_upper(0x11));
        assert!(pairs.is_empty());
    }

    #[test]
    fn strategy_order_is_configurable() {
        let resolver = CasePairResolver::new(vec![PairStrategy::CaseMapping, PairStrategy::NameSubstitution]);
        let pairs = resolver.resolve(&Disagreeing, 0x00..=0x7F);

        assert_eq!(pairs.partner_of(0x10), Some(0x11));
    }

    #[test]
    fn name_strategy_rejects_missing_names() {
        let oracle = data();
        assert_eq!(PairStrategy::NameSubstitution.partner(&oracle, 0x131, "LATIN SMALL LETTER DOTLESS I"), None);
        assert_eq!(PairStrategy::CaseMapping.partner(&oracle, 0x131, "LATIN SMALL LETTER DOTLESS I"), Some(0x49));
    }
}
