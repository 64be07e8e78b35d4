use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// A directory to search for kradzip.zip, radkfilex and kanjidic before the default
    /// locations. Can be given more than once.
    #[arg(short = 'd', long)]
    pub data_dir: Vec<PathBuf>,
    /// How many radicals to show per row.
    #[arg(short, long, default_value_t = 21)]
    pub columns: usize,
}
