//! Configuration file parser for the base scanner constants
//!
//! Any value left out of the file takes the Siemens mMR default. Lengths are
//! plain numbers in cm; times carry their units in a string, e.g.
//! `bin_width = "390 ps"`.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serializer};
use thiserror::Error;

use units::{ps_, Time};

use crate::base::BaseGeometry;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config file `{path}`: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("couldn't parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

pub fn read_config_file(path: impl AsRef<Path>) -> Result<BaseGeometry, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.into(), source })?;
    tracing::info!("read base geometry from {}", path.display());
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<BaseGeometry, ConfigError> {
    Ok(toml::from_str(text)?)
}

// TOML has no notion of units, so a quantity such as `390 ps` must be written
// as a string, and parsed into the relevant `uom` type by `uom`'s `FromStr`.
pub(crate) fn deserialize_uom<'d, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'d>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    String::deserialize(deserializer)?
        .parse::<T>()
        .map_err(de::Error::custom)
}

pub(crate) fn serialize_ps<S: Serializer>(t: &Time, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{} ps", ps_(*t)))
}
