use strum::{Display, EnumString};

use crate::{Error, Result};

/// Storage format of the tiles in a tiled library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FileFormat {
    #[default]
    Snappy,
    Mat,
}

impl FileFormat {
    pub fn extension(&self) -> &str {
        match self {
            FileFormat::Snappy => "snappy",
            FileFormat::Mat => "mat",
        }
    }

    pub fn from_name(name: &str) -> Result<FileFormat> {
        name.parse()
            .map_err(|_| Error::InvalidArgument(format!("Unsupported library file format '{name}' (expected snappy or mat)")))
    }
}
