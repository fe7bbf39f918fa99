//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "glyphgen.toml";

/// Where and under which names the generated sources are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base name of the generated files (`<name>.h`, `<name>.c`).
    pub glyph_name: String,
    /// Directory the generated files are written to.
    pub glyph_path: PathBuf,
    /// Prefix of the generated array and constant names.
    pub prefix: String,
    pub copyright_holder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyph_name: "glyphs".to_owned(),
            glyph_path: PathBuf::from("."),
            prefix: "GLYPH".to_owned(),
            copyright_holder: "Blinc Labs LLC".to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} {value:?} is not a valid C identifier")]
    InvalidIdentifier { field: &'static str, value: String },
}

impl Config {
    /// Load a TOML config file. Keys it leaves out take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Names flow into C identifiers (include guard, arrays), so both must be
    /// identifiers themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("glyph_name", &self.glyph_name), ("prefix", &self.prefix)] {
            if !is_c_identifier(value) {
                return Err(ConfigError::InvalidIdentifier {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn header_name(&self) -> String {
        format!("{}.h", self.glyph_name)
    }

    pub fn source_name(&self) -> String {
        format!("{}.c", self.glyph_name)
    }

    pub fn header_guard(&self) -> String {
        format!("{}_H_", self.glyph_name.to_uppercase())
    }

    pub fn count_name(&self) -> String {
        format!("{}_COUNT", self.prefix)
    }

    pub fn index_array(&self) -> String {
        format!("{}_IDX", self.prefix)
    }

    pub fn width_array(&self) -> String {
        format!("{}_WIDTH", self.prefix)
    }

    pub fn data_array(&self) -> String {
        format!("{}_DATA", self.prefix)
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
