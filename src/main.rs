/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use failure::{format_err, Error, ResultExt};
use log::{info, warn};
use quicli::prelude::*;
use serde_derive::Serialize;
use structopt::StructOpt;

use uc_identifiers::messages::*;
use uc_identifiers::{
    parse_blocks, parse_code_point, BlockOutput, CollisionStats, Config, Engine, MacroDefinition, UnicodeData,
};

/// Derive a short, unique constant name for every Unicode code point,
/// grouped by Unicode block.
#[derive(Debug, StructOpt)]
#[structopt(name = "uc-identifiers")]
struct Cli {
    /// UCD UnicodeData.txt
    #[structopt(long = "unicode-data", parse(from_os_str))]
    unicode_data: Option<PathBuf>,

    /// UCD Blocks.txt
    #[structopt(long = "blocks", parse(from_os_str))]
    blocks: Option<PathBuf>,

    /// TOML file with input paths and abbreviation tables
    #[structopt(long = "config", short = "c", parse(from_os_str))]
    config: Option<PathBuf>,

    /// Where to write the definitions manifest
    #[structopt(long = "output", short = "o", parse(from_os_str))]
    output: Option<PathBuf>,

    /// Unicode version recorded in the manifest
    #[structopt(long = "unicode-version")]
    unicode_version: Option<String>,

    /// Print the block and identifier of a code point (e.g. U+0370)
    #[structopt(long = "query", short = "q")]
    query: Vec<String>,

    #[structopt(flatten)]
    verbosity: Verbosity,
}

#[derive(Serialize)]
struct Manifest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    unicode_version: Option<&'a str>,
    stats: CollisionStats,
    blocks: &'a [BlockOutput],
}

fn main() -> CliResult {
    let args = Cli::from_args();
    args.verbosity.setup_env_logger(env!("CARGO_PKG_NAME"))?;

    let config = match args.config {
        Some(ref path) => Config::parse(&read_text(path)?)
            .with_context(|_| format!("could not load config {}", path.display()))?,
        None => Config::default(),
    };

    let unicode_data_path = args
        .unicode_data
        .clone()
        .or_else(|| config.unicode_data.clone())
        .ok_or_else(|| format_err!("{}", NO_UNICODE_DATA))?;
    let blocks_path = args
        .blocks
        .clone()
        .or_else(|| config.blocks.clone())
        .ok_or_else(|| format_err!("{}", NO_BLOCKS))?;
    let output = args
        .output
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let mut data = UnicodeData::parse(&read_text(&unicode_data_path)?)
        .with_context(|_| format!("could not load {}", unicode_data_path.display()))?;
    if let Some(version) = args.unicode_version.clone().or_else(|| config.unicode_version.clone()) {
        data = data.with_version(version);
    }
    let index = parse_blocks(&read_text(&blocks_path)?)
        .with_context(|_| format!("could not load {}", blocks_path.display()))?;

    info!("{} blocks loaded from {}", index.len(), blocks_path.display());

    let mut engine = Engine::new(&data, config.tables.clone());
    let outputs = engine.run(&index);
    let stats = engine.stats();

    let manifest = Manifest {
        unicode_version: data.version(),
        stats,
        blocks: &outputs,
    };
    write_to_file(&output, &toml::to_string(&manifest)?)?;

    let definitions: usize = outputs.iter().map(|o| o.records.len()).sum();
    println!(
        "{} definitions in {} blocks written to {}",
        definitions,
        outputs.len(),
        output.display()
    );
    println!(
        "identifiers: {} abbreviated, {} expanded, {} suffixed with their code point",
        stats.abbreviated, stats.expanded, stats.suffixed
    );
    if stats.suffixed > 0 {
        warn!("{}", SUFFIX_ANOMALY);
    }

    let by_cp: HashMap<u32, &MacroDefinition> = outputs
        .iter()
        .flat_map(|o| o.records.iter())
        .flat_map(|r| r.code_points().map(move |cp| (cp, r)))
        .collect();

    for query in &args.query {
        let cp = parse_code_point(query)?;
        let identifier = by_cp.get(&cp).map_or(NOT_DEFINED, |r| r.identifier.as_str());
        println!("U+{:04X}  {}  {}", cp, index.lookup(cp), identifier);
    }

    Ok(())
}

fn read_text(path: &Path) -> std::result::Result<String, Error> {
    Ok(std::fs::read_to_string(path).with_context(|_| format!("could not read {}", path.display()))?)
}
