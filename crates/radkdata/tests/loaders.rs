use encoding_rs::EUC_JP;
use radkdata::{
    files::{self, RADKFILE_ARCHIVE_NAME},
    kanjidic::{FrequencyTable, KANJIDIC_NAME},
    radkfile::{Radkfile, RADKFILE_NAME},
    Error,
};
use std::{collections::BTreeSet, fs::File, io::Write, path::Path};

const RADKFILE: &str = "\
# radkfilex fixture
$ 一 1
亜唖明
$ 化 2 js01
化花
$ 口 3
唖品
";

const KANJIDIC: &str = "\
# KANJIDIC fixture
亜 3021 U4e9c B1 C7 G8 S7 F1509 J1 ア {Asia} 
明 4640 U660e B72 G2 S8 F66 J4 メイ あか.るい {bright} 
唖 3022 U5516 B30 S11 ア おし {mute} 
";

fn euc_jp(text: &str) -> Vec<u8> {
    let (bytes, _, unmappable) = EUC_JP.encode(text);
    assert!(!unmappable);
    bytes.into_owned()
}

fn write_zip(path: &Path, entry: &str, contents: &[u8]) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    zip.start_file(entry, zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(contents).unwrap();
    zip.finish().unwrap();
}

#[test]
fn loads_loose_radkfile() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(RADKFILE_NAME), euc_jp(RADKFILE)).unwrap();

    let path = files::find_file(&[dir.path()], &[RADKFILE_ARCHIVE_NAME, RADKFILE_NAME]).unwrap();
    let rf = Radkfile::open(&path).unwrap();
    let glyphs = rf
        .radicals
        .iter()
        .map(|r| r.glyph.as_str())
        .collect::<Vec<_>>();
    assert_eq!(glyphs, &["一", "\u{2E85}", "口"]);
    assert_eq!(rf.radicals[2].members, "唖品".chars().collect::<BTreeSet<_>>());
}

#[test]
fn archive_is_preferred_over_loose_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(RADKFILE_NAME), euc_jp("$ 一 1\n亜\n")).unwrap();
    write_zip(
        &dir.path().join(RADKFILE_ARCHIVE_NAME),
        RADKFILE_NAME,
        &euc_jp(RADKFILE),
    );

    let path = files::find_file(&[dir.path()], &[RADKFILE_ARCHIVE_NAME, RADKFILE_NAME]).unwrap();
    assert!(path.ends_with(RADKFILE_ARCHIVE_NAME));
    let rf = Radkfile::open(&path).unwrap();
    assert_eq!(rf.radicals.len(), 3);
}

#[test]
fn archive_without_radkfile_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(RADKFILE_ARCHIVE_NAME);
    write_zip(&path, "radkfile2", &euc_jp(RADKFILE));

    let err = Radkfile::open(&path).unwrap_err();
    assert!(matches!(err, Error::Zip(_)));
}

#[test]
fn loads_frequencies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(KANJIDIC_NAME);
    std::fs::write(&path, euc_jp(KANJIDIC)).unwrap();

    let ft = FrequencyTable::load_or_empty(&path);
    assert_eq!(ft.rank('亜'), Some(1509));
    assert_eq!(ft.rank('明'), Some(66));
    assert_eq!(ft.rank('唖'), None);
}

#[test]
fn undecodable_frequencies_give_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(KANJIDIC_NAME);
    let mut bytes = euc_jp(KANJIDIC);
    bytes.extend_from_slice(b"\xff\xff F1 \n");
    std::fs::write(&path, bytes).unwrap();

    assert!(FrequencyTable::open(&path).is_err());
    assert!(FrequencyTable::load_or_empty(&path).is_empty());
}

#[test]
fn loading_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let radkfile = dir.path().join(RADKFILE_NAME);
    let kanjidic = dir.path().join(KANJIDIC_NAME);
    std::fs::write(&radkfile, euc_jp(RADKFILE)).unwrap();
    std::fs::write(&kanjidic, euc_jp(KANJIDIC)).unwrap();

    assert_eq!(
        Radkfile::open(&radkfile).unwrap(),
        Radkfile::open(&radkfile).unwrap()
    );
    assert_eq!(
        FrequencyTable::open(&kanjidic).unwrap(),
        FrequencyTable::open(&kanjidic).unwrap()
    );
}

#[test]
fn missing_radkfile_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = files::find_file(&[dir.path()], &[RADKFILE_ARCHIVE_NAME, RADKFILE_NAME]).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { ref names } if names.len() == 2));
}
