/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

pub const NO_UNICODE_DATA: &str = "No UnicodeData.txt given. \
Pass --unicode-data or set `unicode_data` in the config file.";

pub const NO_BLOCKS: &str = "No Blocks.txt given. \
Pass --blocks or set `blocks` in the config file.";

pub const SUFFIX_ANOMALY: &str = "Some code points could only be named by their code point value. \
Extend the abbreviation tables so their names stop colliding.";

pub const NOT_DEFINED: &str = "(no definition)";

pub const DEFAULT_OUTPUT: &str = "identifiers.toml";
