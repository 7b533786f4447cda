use std::path::PathBuf;

use clap::Parser;
use env_logger::{Env, TimestampPrecision};
use fldpln::{FileFormat, TileLibraryOptions};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[clap(name = "tilelibrary", about = "Tile a segment-based FLDPLN library")]
pub struct Opt {
    #[arg(long = "seg-lib", short = 'i')]
    pub seg_lib_folder: PathBuf,

    #[arg(long = "cell-size")]
    pub cell_size: f64,

    #[arg(long = "tiled-lib", short = 'o')]
    pub tiled_lib_folder: PathBuf,

    /// Tile size in number of cells
    #[arg(long = "tile-size")]
    pub tile_size: u32,

    #[arg(long = "format", short = 'f', value_name = "snappy|mat", default_value = "snappy", value_parser = FileFormat::from_name)]
    pub file_format: FileFormat,
}

impl From<Opt> for TileLibraryOptions {
    fn from(opt: Opt) -> Self {
        TileLibraryOptions {
            seg_lib_folder: opt.seg_lib_folder,
            cell_size: opt.cell_size,
            tiled_lib_folder: opt.tiled_lib_folder,
            tile_size: opt.tile_size,
            file_format: opt.file_format.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(Some(TimestampPrecision::Millis))
        .try_init()?;

    log::debug!("{opt:?}");
    TileLibraryOptions::from(opt).run();

    Ok(())
}
