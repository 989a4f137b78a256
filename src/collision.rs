/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashSet;

use log::{error, warn};
use serde_derive::Serialize;

/// Every identifier handed out during a run, across all blocks.
#[derive(Debug, Clone, Default)]
pub struct CollisionLedger {
    claimed: HashSet<String>,
}

impl CollisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `identifier`; returns `false` if it was already taken.
    pub fn claim(&mut self, identifier: &str) -> bool {
        if self.claimed.contains(identifier) {
            return false;
        }
        self.claimed.insert(identifier.to_owned())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.claimed.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// Which step of the fallback ladder produced an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rung {
    Abbreviated,
    Expanded,
    CodePointSuffix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub identifier: String,
    pub rung: Rung,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollisionStats {
    pub abbreviated: usize,
    pub expanded: usize,
    pub suffixed: usize,
}

/// Assigns final identifiers. Calls must arrive in ascending code point
/// order for the output to be reproducible.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver {
    ledger: CollisionLedger,
    stats: CollisionStats,
}

impl CollisionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, candidate: &str, expanded: &str, cp: u32) -> Resolution {
        if self.ledger.claim(candidate) {
            self.stats.abbreviated += 1;
            return Resolution {
                identifier: candidate.to_owned(),
                rung: Rung::Abbreviated,
            };
        }

        if self.ledger.claim(expanded) {
            warn!("U+{:04X}: {} already taken, using {}", cp, candidate, expanded);
            self.stats.expanded += 1;
            return Resolution {
                identifier: expanded.to_owned(),
                rung: Rung::Expanded,
            };
        }

        let base = format!("{}_U{:04X}", expanded, cp);
        let mut identifier = base.clone();
        let mut n = 2;
        while !self.ledger.claim(&identifier) {
            identifier = format!("{}_{}", base, n);
            n += 1;
        }

        error!(
            "U+{:04X}: {} and {} both taken, falling back to {}",
            cp, candidate, expanded, identifier
        );
        self.stats.suffixed += 1;

        Resolution {
            identifier,
            rung: Rung::CodePointSuffix,
        }
    }

    pub fn stats(&self) -> CollisionStats {
        self.stats
    }

    pub fn ledger(&self) -> &CollisionLedger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_claims_once() {
        let mut ledger = CollisionLedger::new();

        assert!(ledger.claim("UC_A"));
        assert!(!ledger.claim("UC_A"));
        assert!(ledger.contains("UC_A"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn first_rung_when_free() {
        let mut resolver = CollisionResolver::new();
        let r = resolver.resolve("UC_COLON", "UC_COLON", 0x3A);

        assert_eq!(r.identifier, "UC_COLON");
        assert_eq!(r.rung, Rung::Abbreviated);
    }

    #[test]
    fn ladder_escalates() {
        let mut resolver = CollisionResolver::new();

        resolver.resolve("UC_COLON", "UC_COLON", 0x3A);
        let second = resolver.resolve("UC_COLON", "UC_COLON_SIGN", 0x20A1);
        let third = resolver.resolve("UC_COLON", "UC_COLON_SIGN", 0xFE55);

        assert_eq!(second.identifier, "UC_COLON_SIGN");
        assert_eq!(second.rung, Rung::Expanded);
        assert_eq!(third.identifier, "UC_COLON_SIGN_UFE55");
        assert_eq!(third.rung, Rung::CodePointSuffix);

        assert_eq!(
            resolver.stats(),
            CollisionStats {
                abbreviated: 1,
                expanded: 1,
                suffixed: 1,
            }
        );
        assert_eq!(resolver.ledger().len(), 3);
    }

    #[test]
    fn suffix_never_reuses_an_identifier() {
        let mut resolver = CollisionResolver::new();

        resolver.resolve("UC_X_U0041", "UC_X_U0041", 0x100);
        resolver.resolve("UC_X", "UC_X", 0x101);
        let r = resolver.resolve("UC_X", "UC_X", 0x41);

        assert_eq!(r.identifier, "UC_X_U0041_2");
    }
}
