//! Models and parses the RADKFILEX.
//! See <https://www.edrdg.org/krad/kradinf.html>
//!
//! The file lists every radical on a `$` header line, followed by lines of the kanji that
//! contain it. Headers are ordered by stroke count.
//!
//! ```text
//! # comment
//! $ 一 1
//! 亜唖娃阿哀愛挨姶逢葵茜穐悪握渥旭葦芦鯵梓圧斡扱宛姐虻飴絢綾鮎或粟袷安庵按暗案闇鞍杏
//! $ 化 2 js01
//! 化花貨靴傾
//! ```
//!
//! The optional fourth header field names a replacement for the glyph in the second field, either
//! as a JIS X 0212 code or as one of the labels in [`fallback_glyph`].

use crate::{codec, Error, Result};
use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// The name of the RADKFILEX, also its name inside `kradzip.zip`.
pub const RADKFILE_NAME: &str = "radkfilex";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalEntry {
    /// Usually a single character, the `kozato` radicals use two.
    pub glyph: String,
    pub stroke_count: u32,
    pub members: BTreeSet<char>,
}

impl RadicalEntry {
    pub fn new(glyph: impl Into<String>, stroke_count: u32) -> Self {
        Self {
            glyph: glyph.into(),
            stroke_count,
            members: BTreeSet::new(),
        }
    }

    /// Whether the glyph is made up of more than one character.
    pub fn is_composite(&self) -> bool {
        self.glyph.chars().count() > 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Radkfile {
    pub radicals: Vec<RadicalEntry>,
    /// Replacement labels that could not be resolved, in file order.
    pub unresolved: Vec<String>,
}

impl Radkfile {
    /// Opens the RADKFILEX at the given path. Zip archives are searched for an entry named
    /// [`RADKFILE_NAME`].
    pub fn open(path: &Path) -> Result<Self> {
        let file = BufReader::new(File::open(path)?);
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("zip")) {
            tracing::debug!("reading {RADKFILE_NAME} from {}", path.display());
            let mut archive = zip::ZipArchive::new(file)?;
            let entry = archive.by_name(RADKFILE_NAME)?;
            Self::from(entry)
        } else {
            Self::from(file)
        }
    }

    pub fn from<R: Read>(mut r: R) -> Result<Self> {
        let mut buf = vec![];
        r.read_to_end(&mut buf)?;
        Self::parse(&buf)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut radkfile = Self::default();
        for (line_no, line) in codec::decode_lines(bytes) {
            let line = line.map_err(|source| Error::Decode {
                line: line_no,
                source,
            })?;

            if line.starts_with('#') {
                continue;
            } else if line.starts_with('$') {
                let radical = radkfile.parse_header(line_no, &line)?;
                radkfile.radicals.push(radical);
            } else {
                let kanji = line.trim();
                if kanji.is_empty() {
                    continue;
                }
                let Some(current) = radkfile.radicals.last_mut() else {
                    return Err(Error::format(line_no, "kanji listed before the first radical"));
                };
                current
                    .members
                    .extend(kanji.chars().filter(|c| !c.is_whitespace()));
            }
        }

        tracing::debug!("parsed {} radicals", radkfile.radicals.len());
        Ok(radkfile)
    }

    /// Consecutive runs of radicals with the same stroke count.
    pub fn stroke_groups(&self) -> impl Iterator<Item = (u32, &[RadicalEntry])> {
        stroke_groups(&self.radicals)
    }

    // $ radical strokes [jis0212 code or label]
    fn parse_header(&mut self, line_no: usize, line: &str) -> Result<RadicalEntry> {
        let fields = line.split_whitespace().collect::<Vec<_>>();
        let [_, glyph, strokes, rest @ ..] = fields.as_slice() else {
            return Err(Error::format(
                line_no,
                format!("expected '$ radical strokes', found '{line}'"),
            ));
        };
        let stroke_count = strokes.parse::<u32>().map_err(|err| {
            Error::format(line_no, format!("invalid stroke count '{strokes}': {err}"))
        })?;

        let glyph = match rest.first() {
            Some(label) => match resolve_label(label) {
                Some(glyph) => glyph,
                None => {
                    tracing::warn!("no mapping found for {label}");
                    self.unresolved.push(label.to_string());
                    glyph.to_string()
                }
            },
            None => glyph.to_string(),
        };
        Ok(RadicalEntry::new(glyph, stroke_count))
    }
}

/// Consecutive runs of radicals with the same stroke count.
pub fn stroke_groups(radicals: &[RadicalEntry]) -> impl Iterator<Item = (u32, &[RadicalEntry])> {
    radicals
        .chunk_by(|l, r| l.stroke_count == r.stroke_count)
        .map(|group| (group[0].stroke_count, group))
}

fn resolve_label(label: &str) -> Option<String> {
    jis0212_glyph(label).or_else(|| fallback_glyph(label).map(str::to_string))
}

fn jis0212_glyph(label: &str) -> Option<String> {
    let code = u16::from_str_radix(label, 16).ok()?;
    codec::jis0212(code).ok()
}

/// Unicode replacements for the RADKFILEX placeholder labels that have no JIS code.
pub fn fallback_glyph(label: &str) -> Option<&'static str> {
    let glyph = match label {
        "js01" => "\u{2E85}",
        "js02" => "\u{201A2}",
        "js03" => "\u{2EBE}",
        "js04" => "\u{2E8C}",
        "js05" => "\u{2EB9}",
        "js07" => "\u{4E37}",
        // no single character exists for these, so they're shown next to a dot for the missing side
        "kozatoR" => "\u{B7}\u{2ECF}",
        "kozatoL" => "\u{2ED6}\u{B7}",
        _ => return None,
    };
    Some(glyph)
}
