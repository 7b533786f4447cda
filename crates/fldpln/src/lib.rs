//! Conversion of segment-based FLDPLN libraries into tiled libraries.

pub use error::Error;
pub type Result<T = ()> = std::result::Result<T, Error>;

mod error;
pub mod fileformat;
pub mod tile;

#[doc(inline)]
pub use fileformat::FileFormat;
#[doc(inline)]
pub use tile::{TileLibraryOptions, tile_library, tile_library_to};
