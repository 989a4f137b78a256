/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "UnicodeData.txt line {}: {}", line, reason)]
    UnicodeData { line: usize, reason: String },

    #[fail(display = "Blocks.txt line {}: {}", line, reason)]
    Blocks { line: usize, reason: String },

    #[fail(display = "invalid configuration: {}", _0)]
    Config(#[cause] toml::de::Error),

    #[fail(display = "invalid code point: {}", _0)]
    CodePoint(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err)
    }
}
