// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Share-set file parsing.
//!
//! A share set is a JSON object with a `keys` metadata entry and one
//! entry per share, keyed by the share's x-coordinate:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": 2,    "value": "111" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use serde::Deserialize;
use tracing::warn;
use unshard_recover::ShareRecord;

/// Share-set metadata: total share count and reconstruction threshold.
#[derive(Debug, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// Base of a share value; files carry it as a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Base {
    Number(u32),
    Text(String),
}

impl Base {
    fn resolve(&self) -> Result<u32> {
        match self {
            Base::Number(n) => Ok(*n),
            Base::Text(s) => s
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Base {:?} is not an integer", s)),
        }
    }
}

/// One share entry as stored in the file.
#[derive(Debug, Deserialize)]
pub struct ShareEntry {
    pub base: Base,
    pub value: String,
}

/// A parsed share-set file.
#[derive(Debug, Deserialize)]
pub struct ShareSet {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, ShareEntry>,
}

impl ShareSet {
    /// Converts the file entries into decodable share records plus the
    /// reconstruction threshold.
    ///
    /// JSON objects carry no reliable entry order, so shares are ordered
    /// by numeric x-coordinate before the driver's first-k selection
    /// applies. `keys.n` disagreeing with the entry count is logged, not
    /// fatal: only `keys.k` governs reconstruction.
    pub fn into_records(self) -> Result<(Vec<ShareRecord>, usize)> {
        let mut records = Vec::with_capacity(self.shares.len());
        for (key, entry) in &self.shares {
            let x: BigInt = key
                .trim()
                .parse()
                .with_context(|| format!("Share key {:?} is not an integer x-coordinate", key))?;
            records.push(ShareRecord::new(x, entry.base.resolve()?, entry.value.clone()));
        }
        records.sort_by(|a, b| a.x.cmp(&b.x));

        if records.len() != self.keys.n {
            warn!(
                expected = self.keys.n,
                found = records.len(),
                "share count differs from keys.n"
            );
        }
        Ok((records, self.keys.k))
    }
}

/// Reads and parses a share-set file.
pub fn load_share_set(path: &Path) -> Result<ShareSet> {
    let contents = fs::read_to_string(path)?;
    let share_set = serde_json::from_str(&contents)?;
    Ok(share_set)
}
