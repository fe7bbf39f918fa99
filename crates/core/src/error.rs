use thiserror::Error;

use crate::GLYPH_HEIGHT;

/// Reasons a glyph table cannot be encoded.
///
/// Every variant describes malformed input. Encoding has no partial-success
/// mode, so any of these aborts the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    #[error("glyph table is empty")]
    EmptyTable,

    #[error("glyph {glyph} has no aliases")]
    NoAliases { glyph: usize },

    #[error("alias {alias:?} selects both glyph {first} and glyph {second}")]
    DuplicateAlias {
        alias: char,
        first: usize,
        second: usize,
    },

    #[error("glyph {glyph} has no columns")]
    EmptyGlyph { glyph: usize },

    #[error("glyph {glyph} row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        glyph: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("glyph {glyph} row {row} column {column} is {cell:?}, expected '#' or '.'")]
    InvalidCell {
        glyph: usize,
        row: usize,
        column: usize,
        cell: char,
    },

    #[error("row permutation {rows:?} is not a bijection over rows 0..8")]
    InvalidPermutation { rows: [u8; GLYPH_HEIGHT] },

    /// The firmware indexes glyph data with `uint8_t` offsets and widths.
    #[error("glyph {glyph} (offset {offset}, width {width}) does not fit in a byte-sized index")]
    TableTooLarge {
        glyph: usize,
        offset: usize,
        width: usize,
    },
}
