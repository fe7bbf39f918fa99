//! `glyphgen` compiles the LED matrix glyph table into the C sources used by
//! the display firmware.
//!
//! The table is encoded with [led_glyph_core::encode_table] and rendered to
//! two texts: a declarations file (`<name>.h`) and a definitions file
//! (`<name>.c`). Both texts are complete before anything touches the disk.
//!
//! ```
//! use chrono::NaiveDate;
//! use glyphgen::{Config, generate};
//! use led_glyph_alphabet::{ALPHABET, LED_KEY};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let sources = generate(&Config::default(), &ALPHABET, &LED_KEY, date).unwrap();
//! assert!(sources.header.contains("GLYPH_COUNT = 0x2b"));
//! ```

use chrono::NaiveDate;
use led_glyph_core::{GlyphError, GlyphTable, RowPermutation, encode_table};
use thiserror::Error;

pub mod config;
pub mod emit;
pub mod logger;
pub mod output;

pub use config::{Config, ConfigError};
pub use emit::EmitError;
pub use output::{OutputError, write_sources};

/// The two generated files, named and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub header_name: String,
    pub header: String,
    pub source_name: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("failed to encode glyph table")]
    Encode(#[from] GlyphError),

    #[error("failed to render glyph definitions")]
    Emit(#[from] EmitError),
}

/// Encode `table` and render both generated files.
pub fn generate(
    config: &Config,
    table: &GlyphTable,
    permutation: &RowPermutation,
    date: NaiveDate,
) -> Result<Sources, GenerateError> {
    let encoded = encode_table(table, permutation)?;

    Ok(Sources {
        header_name: config.header_name(),
        header: emit::declarations(config, permutation, &encoded, date),
        source_name: config.source_name(),
        source: emit::definitions(config, table, &encoded, date)?,
    })
}
