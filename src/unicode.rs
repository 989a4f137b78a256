/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One past the last Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x11_0000;

/// Unicode general category (the two-letter `gc` property).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    Lu,
    Ll,
    Lt,
    Lm,
    Lo,
    Mn,
    Mc,
    Me,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Ps,
    Pe,
    Pi,
    Pf,
    Po,
    Sm,
    Sc,
    Sk,
    So,
    Zs,
    Zl,
    Zp,
    Cc,
    Cf,
    Cs,
    Co,
    Cn,
}

impl GeneralCategory {
    pub fn as_str(self) -> &'static str {
        use GeneralCategory::*;

        match self {
            Lu => "Lu",
            Ll => "Ll",
            Lt => "Lt",
            Lm => "Lm",
            Lo => "Lo",
            Mn => "Mn",
            Mc => "Mc",
            Me => "Me",
            Nd => "Nd",
            Nl => "Nl",
            No => "No",
            Pc => "Pc",
            Pd => "Pd",
            Ps => "Ps",
            Pe => "Pe",
            Pi => "Pi",
            Pf => "Pf",
            Po => "Po",
            Sm => "Sm",
            Sc => "Sc",
            Sk => "Sk",
            So => "So",
            Zs => "Zs",
            Zl => "Zl",
            Zp => "Zp",
            Cc => "Cc",
            Cf => "Cf",
            Cs => "Cs",
            Co => "Co",
            Cn => "Cn",
        }
    }

    /// Control, format, surrogate, private use, unassigned and separators
    /// have no glyph worth printing in a comment.
    pub fn is_printable(self) -> bool {
        !matches!(self.as_str().as_bytes()[0], b'C' | b'Z')
    }
}

impl FromStr for GeneralCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use GeneralCategory::*;

        let gc = match s {
            "Lu" => Lu,
            "Ll" => Ll,
            "Lt" => Lt,
            "Lm" => Lm,
            "Lo" => Lo,
            "Mn" => Mn,
            "Mc" => Mc,
            "Me" => Me,
            "Nd" => Nd,
            "Nl" => Nl,
            "No" => No,
            "Pc" => Pc,
            "Pd" => Pd,
            "Ps" => Ps,
            "Pe" => Pe,
            "Pi" => Pi,
            "Pf" => Pf,
            "Po" => Po,
            "Sm" => Sm,
            "Sc" => Sc,
            "Sk" => Sk,
            "So" => So,
            "Zs" => Zs,
            "Zl" => Zl,
            "Zp" => Zp,
            "Cc" => Cc,
            "Cf" => Cf,
            "Cs" => Cs,
            "Co" => Co,
            "Cn" => Cn,
            _ => return Err(format!("unknown general category `{}`", s)),
        };

        Ok(gc)
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character property source consumed by the identifier pipeline.
pub trait CharOracle {
    /// The Unicode name, or `None` when the code point is unassigned or unnamed.
    fn name(&self, cp: u32) -> Option<String>;

    fn category(&self, cp: u32) -> GeneralCategory;

    /// Resolve a Unicode name back to its code point.
    fn lookup(&self, name: &str) -> Option<u32>;

    /// Full uppercase mapping. May yield several code points (`ß` -> `SS`).
    fn uppercase(&self, cp: u32) -> Vec<u32> {
        match std::char::from_u32(cp) {
            Some(c) => c.to_uppercase().map(|u| u as u32).collect(),
            None => vec![cp],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeNaming {
    CjkIdeograph,
    TangutIdeograph,
    HangulSyllable,
    Unnamed,
}

impl RangeNaming {
    fn from_label(label: &str) -> Self {
        if label.contains("CJK Ideograph") {
            RangeNaming::CjkIdeograph
        } else if label.contains("Tangut Ideograph") {
            RangeNaming::TangutIdeograph
        } else if label.contains("Hangul Syllable") {
            RangeNaming::HangulSyllable
        } else {
            RangeNaming::Unnamed
        }
    }

    fn name(self, cp: u32) -> Option<String> {
        match self {
            RangeNaming::CjkIdeograph => Some(format!("CJK UNIFIED IDEOGRAPH-{:04X}", cp)),
            RangeNaming::TangutIdeograph => Some(format!("TANGUT IDEOGRAPH-{:04X}", cp)),
            RangeNaming::HangulSyllable => hangul_syllable_name(cp),
            RangeNaming::Unnamed => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: Option<String>,
    gc: GeneralCategory,
}

#[derive(Debug, Clone)]
struct NamedRange {
    start: u32,
    end: u32,
    gc: GeneralCategory,
    naming: RangeNaming,
}

/// Character properties loaded from the UCD `UnicodeData.txt`.
#[derive(Debug, Clone, Default)]
pub struct UnicodeData {
    version: Option<String>,
    entries: BTreeMap<u32, Entry>,
    ranges: Vec<NamedRange>,
    by_name: HashMap<String, u32>,
}

impl UnicodeData {
    pub fn parse(text: &str) -> Result<Self> {
        let mut data = UnicodeData::default();

        // `<..., First>` waiting for its `<..., Last>`
        let mut range_start: Option<(u32, String, GeneralCategory)> = None;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(';').collect();
            if fields.len() < 3 {
                return Err(Error::UnicodeData {
                    line: line_no,
                    reason: format!("expected at least 3 fields, found {}", fields.len()),
                });
            }

            let code = parse_hex(fields[0]).ok_or_else(|| Error::UnicodeData {
                line: line_no,
                reason: format!("bad code point `{}`", fields[0]),
            })?;
            let gc = fields[2].parse::<GeneralCategory>().map_err(|reason| Error::UnicodeData {
                line: line_no,
                reason,
            })?;
            let name = fields[1];

            if name.starts_with('<') && name.ends_with(", First>") {
                let label = &name[1..name.len() - ", First>".len()];
                range_start = Some((code, label.to_owned(), gc));
                continue;
            }

            if name.starts_with('<') && name.ends_with(", Last>") {
                let (start, label, gc) = range_start.take().ok_or_else(|| Error::UnicodeData {
                    line: line_no,
                    reason: "range end without a start".to_owned(),
                })?;

                data.ranges.push(NamedRange {
                    start,
                    end: code,
                    gc,
                    naming: RangeNaming::from_label(&label),
                });
                continue;
            }

            // `<control>` and friends are labels, not names
            let name = if name.starts_with('<') || name.is_empty() {
                None
            } else {
                data.by_name.insert(name.to_owned(), code);
                Some(name.to_owned())
            };

            data.entries.insert(code, Entry { name, gc });
        }

        if range_start.is_some() {
            return Err(Error::UnicodeData {
                line: text.lines().count(),
                reason: "unterminated code point range".to_owned(),
            });
        }

        Ok(data)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_ref().map(String::as_str)
    }

    fn range_of(&self, cp: u32) -> Option<&NamedRange> {
        self.ranges.iter().find(|r| r.start <= cp && cp <= r.end)
    }
}

impl CharOracle for UnicodeData {
    fn name(&self, cp: u32) -> Option<String> {
        match self.entries.get(&cp) {
            Some(entry) => entry.name.clone(),
            None => self.range_of(cp).and_then(|r| r.naming.name(cp)),
        }
    }

    fn category(&self, cp: u32) -> GeneralCategory {
        match self.entries.get(&cp) {
            Some(entry) => entry.gc,
            None => self.range_of(cp).map_or(GeneralCategory::Cn, |r| r.gc),
        }
    }

    fn lookup(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).cloned()
    }
}

fn parse_hex(s: &str) -> Option<u32> {
    let cp = u32::from_str_radix(s.trim(), 16).ok()?;
    if cp < MAX_CODE_POINT {
        Some(cp)
    } else {
        None
    }
}

/// Parse a code point written as `1F600`, `U+1F600` or `0x1F600`.
pub fn parse_code_point(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| {
            if trimmed.starts_with(prefix) {
                Some(&trimmed[prefix.len()..])
            } else {
                None
            }
        })
        .unwrap_or(trimmed);

    parse_hex(digits).ok_or_else(|| Error::CodePoint(s.to_owned()))
}

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_COUNT: u32 = 11172;
const JAMO_V_COUNT: u32 = 21;
const JAMO_T_COUNT: u32 = 28;

const JAMO_L: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P", "H",
];
const JAMO_V: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE", "WI",
    "YU", "EU", "YI", "I",
];
const JAMO_T: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M", "B",
    "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// Algorithmic name of a precomposed Hangul syllable.
fn hangul_syllable_name(cp: u32) -> Option<String> {
    if cp < HANGUL_BASE || cp >= HANGUL_BASE + HANGUL_COUNT {
        return None;
    }

    let s = cp - HANGUL_BASE;
    let l = (s / (JAMO_V_COUNT * JAMO_T_COUNT)) as usize;
    let v = ((s % (JAMO_V_COUNT * JAMO_T_COUNT)) / JAMO_T_COUNT) as usize;
    let t = (s % JAMO_T_COUNT) as usize;

    Some(format!("HANGUL SYLLABLE {}{}{}", JAMO_L[l], JAMO_V[v], JAMO_T[t]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
00DF;LATIN SMALL LETTER SHARP S;Ll;0;L;;;;;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;
F8FF;<Private Use, Last>;Co;0;L;;;;;N;;;;;
";

    #[test]
    fn explicit_names_and_categories() {
        let data = UnicodeData::parse(SAMPLE).unwrap();

        assert_eq!(data.name(0x41).as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(data.category(0x61), GeneralCategory::Ll);
        assert_eq!(data.lookup("LATIN SMALL LETTER A"), Some(0x61));
        assert_eq!(data.lookup("LATIN SMALL LETTER B"), None);
    }

    #[test]
    fn labels_are_not_names() {
        let data = UnicodeData::parse(SAMPLE).unwrap();

        assert_eq!(data.name(0x0000), None);
        assert_eq!(data.category(0x0000), GeneralCategory::Cc);
        assert_eq!(data.name(0xE123), None);
        assert_eq!(data.category(0xE123), GeneralCategory::Co);
    }

    #[test]
    fn unlisted_code_points_are_unassigned() {
        let data = UnicodeData::parse(SAMPLE).unwrap();

        assert_eq!(data.name(0x0378), None);
        assert_eq!(data.category(0x0378), GeneralCategory::Cn);
    }

    #[test]
    fn derived_range_names() {
        let data = UnicodeData::parse(SAMPLE).unwrap();

        assert_eq!(data.name(0x4E00).as_deref(), Some("CJK UNIFIED IDEOGRAPH-4E00"));
        assert_eq!(data.name(0xAC00).as_deref(), Some("HANGUL SYLLABLE GA"));
        assert_eq!(data.name(0xD7A3).as_deref(), Some("HANGUL SYLLABLE HIH"));
        assert_eq!(data.name(0xAC01).as_deref(), Some("HANGUL SYLLABLE GAG"));
        assert_eq!(data.name(0xC544).as_deref(), Some("HANGUL SYLLABLE A"));
    }

    #[test]
    fn full_uppercase_mapping() {
        let data = UnicodeData::parse(SAMPLE).unwrap();

        assert_eq!(data.uppercase(0x61), vec![0x41]);
        assert_eq!(data.uppercase(0xDF), vec![0x53, 0x53]);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let err = UnicodeData::parse("0041;LATIN CAPITAL LETTER A;Xx;").unwrap_err();
        match err {
            Error::UnicodeData { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {}", other),
        }

        assert!(UnicodeData::parse("ZZZZ;FOO;Lu;").is_err());
        assert!(UnicodeData::parse("4E00;<CJK Ideograph, First>;Lo;").is_err());
    }

    #[test]
    fn code_point_notations() {
        assert_eq!(parse_code_point("U+0370").unwrap(), 0x370);
        assert_eq!(parse_code_point("0x1F600").unwrap(), 0x1F600);
        assert_eq!(parse_code_point("ffff").unwrap(), 0xFFFF);
        assert!(parse_code_point("110000").is_err());
        assert!(parse_code_point("nope").is_err());
    }
}
