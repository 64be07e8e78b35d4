//! Parses the EDRDG files multirad is built on: the RADKFILEX radical table and the frequency
//! ranks in KANJIDIC.

pub mod codec;
pub mod error;
pub mod files;
pub mod kanjidic;
pub mod radkfile;

pub use error::{Error, Result};
