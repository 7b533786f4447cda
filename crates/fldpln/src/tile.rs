use std::io::Write;
use std::path::{Path, PathBuf};

use crate::Result;

const TILE_LIBRARY_MESSAGE: &str = "Tile a library ...";

/// Parameters for turning a segment-based library into a tiled library
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLibraryOptions {
    /// Folder containing the segment-based library
    pub seg_lib_folder: PathBuf,
    /// Cell size of the library
    pub cell_size: f64,
    /// Folder receiving the tiled library
    pub tiled_lib_folder: PathBuf,
    /// Tile size in number of cells
    pub tile_size: u32,
    /// 'snappy' or 'mat'
    pub file_format: String,
}

impl TileLibraryOptions {
    pub fn run(&self) {
        tile_library(
            &self.seg_lib_folder,
            self.cell_size,
            &self.tiled_lib_folder,
            self.tile_size,
            &self.file_format,
        );
    }
}

/// Tile a library: turn the segment-based FSP-FPP relations into tile-based ones.
///
/// Announces the operation on stdout. No files are read or written and the arguments are not validated.
pub fn tile_library(
    seg_lib_folder: impl AsRef<Path>,
    cell_size: f64,
    tiled_lib_folder: impl AsRef<Path>,
    tile_size: u32,
    file_format: &str,
) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = tile_library_to(&mut stdout, seg_lib_folder, cell_size, tiled_lib_folder, tile_size, file_format) {
        log::warn!("Failed to report library tiling: {e}");
    }
}

/// Same as [`tile_library`] but reports to the provided writer
pub fn tile_library_to<W: Write>(
    out: &mut W,
    seg_lib_folder: impl AsRef<Path>,
    cell_size: f64,
    tiled_lib_folder: impl AsRef<Path>,
    tile_size: u32,
    file_format: &str,
) -> Result {
    writeln!(out, "{TILE_LIBRARY_MESSAGE}")?;

    log::debug!(
        "Segment library: '{}', cell size: {cell_size}, tiled library: '{}', tile size: {tile_size} cells, format: '{file_format}'",
        seg_lib_folder.as_ref().display(),
        tiled_lib_folder.as_ref().display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileFormat;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test_log::test]
    fn tile_library_prints_single_line() {
        let mut out = Vec::new();
        tile_library_to(&mut out, "seglib/", 10.0, "tiledlib/", 4, "snappy").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Tile a library ...\n");
    }

    #[test_log::test]
    fn tile_library_accepts_any_file_format() {
        let mut out = Vec::new();
        tile_library_to(&mut out, "", -1.0, "", 0, "not-a-format").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Tile a library ...\n");

        tile_library("seglib/", 10.0, "tiledlib/", 4, "");
    }

    #[test_log::test]
    fn tile_library_leaves_file_system_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let seg_lib = tmp.path().join("seglib");
        let tiled_lib = tmp.path().join("tiledlib");

        tile_library(&seg_lib, 10.0, &tiled_lib, 4, "snappy");

        let opts = TileLibraryOptions {
            seg_lib_folder: seg_lib.clone(),
            cell_size: 5.0,
            tiled_lib_folder: tiled_lib.clone(),
            tile_size: 1000,
            file_format: FileFormat::Mat.to_string(),
        };
        opts.run();

        assert!(!seg_lib.exists());
        assert!(!tiled_lib.exists());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_from_json() {
        let opts: TileLibraryOptions = serde_json::from_str(
            r#"{"seg_lib_folder": "seglib/", "cell_size": 10.0, "tiled_lib_folder": "tiledlib/", "tile_size": 4, "file_format": "snappy"}"#,
        )
        .unwrap();

        assert_eq!(opts.seg_lib_folder, PathBuf::from("seglib/"));
        assert_eq!(opts.tile_size, 4);
        assert_eq!(opts.file_format, FileFormat::Snappy.to_string());
    }

    #[test]
    fn write_failure_is_reported() {
        let res = tile_library_to(&mut BrokenWriter, "seglib/", 10.0, "tiledlib/", 4, "mat");
        assert!(matches!(res, Err(crate::Error::IOError(_))));
    }
}
