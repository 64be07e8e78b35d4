//! Looks up kanji by the radicals they contain.

mod cli;
mod shell;

use clap::Parser;
use cli::Cli;
use eyre::WrapErr;
use multirad::QueryEngine;
use radkdata::{
    files::{self, RADKFILE_ARCHIVE_NAME},
    kanjidic::{FrequencyTable, KANJIDIC_NAME},
    radkfile::{Radkfile, RADKFILE_NAME},
};

fn main() -> eyre::Result<()> {
    // stdout belongs to the shell
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let mut dirs = cli.data_dir;
    dirs.extend(files::default_search_dirs());

    tracing::info!("loading radicals");
    let radkfile_path = files::find_file(&dirs, &[RADKFILE_ARCHIVE_NAME, RADKFILE_NAME])?;
    let radkfile = Radkfile::open(&radkfile_path).wrap_err_with(|| {
        format!(
            "Failed to load radicals from '{}'",
            radkfile_path.display()
        )
    })?;
    if !radkfile.unresolved.is_empty() {
        tracing::warn!(
            "{} radicals are shown with a placeholder glyph",
            radkfile.unresolved.len()
        );
    }

    tracing::info!("loading kanji frequencies");
    let frequencies = match files::find_file(&dirs, &[KANJIDIC_NAME]) {
        Ok(path) => FrequencyTable::load_or_empty(&path),
        Err(err) => {
            tracing::warn!("Could not load {KANJIDIC_NAME}: {err}");
            FrequencyTable::default()
        }
    };

    let mut engine = QueryEngine::new(&radkfile.radicals, &frequencies);
    let mut stdout = std::io::stdout().lock();
    shell::run(&mut engine, cli.columns, std::io::stdin().lock(), &mut stdout)
        .wrap_err("Failed to run the lookup shell")?;
    Ok(())
}
