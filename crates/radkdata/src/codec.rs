//! EUC-JP decoding for the EDRDG files.
//!
//! Both the RADKFILEX and KANJIDIC are EUC-JP encoded. Radicals that are not in JIS X 0208 are
//! referred to in the RADKFILEX by their JIS X 0212 code, which [`jis0212`] decodes through the
//! three byte EUC-JP form `0x8F hi lo`.

use encoding_rs::EUC_JP;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid EUC-JP byte sequence")]
pub struct DecodeError;

/// Decodes EUC-JP without replacement, any malformed or unmapped sequence is an error.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    EUC_JP
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or(DecodeError)
}

/// Decodes a JIS X 0212 code such as `0x3021`.
pub fn jis0212(code: u16) -> Result<String, DecodeError> {
    let [high, low] = (code | 0x8080).to_be_bytes();
    decode(&[0x8F, high, low]).map(Cow::into_owned)
}

/// Splits EUC-JP text into lines and decodes them one at a time.
/// Lines are numbered from 1.
pub fn decode_lines(
    bytes: &[u8],
) -> impl Iterator<Item = (usize, Result<Cow<'_, str>, DecodeError>)> {
    // 0x0A never occurs inside a multibyte EUC-JP sequence
    bytes.split(|&b| b == b'\n').enumerate().map(|(idx, line)| {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        (idx + 1, decode(line))
    })
}
