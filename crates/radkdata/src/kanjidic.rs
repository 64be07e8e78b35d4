//! Reads kanji frequency ranks from the original text KANJIDIC.
//! See <https://www.edrdg.org/wiki/index.php/KANJIDIC_Project>
//!
//! Each entry is a single line starting with the kanji, the rank is the `F` field:
//! ```text
//! 亜 3021 U4e9c B1 C7 G8 S7 XJ05033 F1509 J1 N43 V81 H3540 ... ア つ.ぐ {Asia} {rank next}
//! ```
//! Everything else on the line is ignored.

use crate::{codec, Error, Result};
use regex::Regex;
use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// The name of the KANJIDIC file.
pub const KANJIDIC_NAME: &str = "kanjidic";

const ENTRY_PATTERN: &str = r"^([^# ]*) .* F([0-9]*) ";

/// Kanji frequency ranks, lower is more frequent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    ranks: HashMap<char, u32>,
}

impl FrequencyTable {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from(BufReader::new(file))
    }

    /// Loads the table, falling back to an empty one if anything goes wrong.
    /// Without ranks, results are still correct, just not ordered by frequency.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::open(path) {
            Ok(table) => {
                tracing::info!("loaded {} kanji frequencies", table.len());
                table
            }
            Err(err) => {
                tracing::warn!("Could not load {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn from<R: Read>(mut r: R) -> Result<Self> {
        let mut buf = vec![];
        r.read_to_end(&mut buf)?;
        Self::parse(&buf)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let entry = Regex::new(ENTRY_PATTERN).expect("invalid entry pattern");

        let mut ranks = HashMap::new();
        for (line_no, line) in codec::decode_lines(bytes) {
            let line = line.map_err(|source| Error::Decode {
                line: line_no,
                source,
            })?;
            let Some(captures) = entry.captures(&line) else {
                continue;
            };
            let (kanji, rank) = (&captures[1], &captures[2]);
            let rank = rank
                .parse::<u32>()
                .map_err(|err| Error::format(line_no, format!("invalid rank '{rank}': {err}")))?;

            // only single characters can be looked up
            let mut chars = kanji.chars();
            match (chars.next(), chars.next()) {
                (Some(kanji), None) => {
                    ranks.insert(kanji, rank);
                }
                _ => tracing::trace!("skipping rank for '{kanji}' on line {line_no}"),
            }
        }
        Ok(Self { ranks })
    }

    pub fn rank(&self, kanji: char) -> Option<u32> {
        self.ranks.get(&kanji).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<(char, u32)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (char, u32)>>(iter: T) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}
