#![cfg_attr(not(test), no_std)]

//! `led-glyph-core` provides the data model and column encoder shared by the
//! `led-glyph` crates.
//!
//! A [Glyph] is an 8-row bitmap of variable width, and a [GlyphTable] is the
//! ordered list of glyphs whose positions are the glyph IDs used by the
//! display firmware. [encode_table] packs a table into a column-major,
//! active-low byte stream plus the start offset and width of every glyph.

extern crate alloc;

use alloc::collections::BTreeMap;

mod encoder;
mod error;
mod permutation;
mod render;

pub use encoder::{
    EncodedGlyphTable, compute_start_offsets, compute_widths, encode_column, encode_table,
};
pub use error::GlyphError;
pub use permutation::RowPermutation;
pub use render::{BLANK_COLUMN, preview, render_text};

/// Number of LED rows on the display. Every glyph has exactly this many rows.
pub const GLYPH_HEIGHT: usize = 8;

/// Cell drawn for a lit LED in glyph row art.
pub const LED_ON: char = '#';

/// Cell drawn for an unlit LED in glyph row art.
pub const LED_OFF: char = '.';

/// A single glyph (character) of an LED matrix font.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Characters which select this glyph
    pub aliases: &'static [char],
    /// Bitmap rows, top first, drawn with [LED_ON] and [LED_OFF]
    pub rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    /// Number of columns in this glyph, taken from its first row.
    pub fn width(&self) -> usize {
        self.rows[0].chars().count()
    }

    /// Is the LED at `row`, `column` lit?
    ///
    /// Cells past the end of the row read as unlit.
    pub fn bit(&self, row: usize, column: usize) -> bool {
        self.rows[row].chars().nth(column) == Some(LED_ON)
    }

    /// Check that this glyph has aliases, a non-zero width, equal-length
    /// rows, and only [LED_ON]/[LED_OFF] cells.
    ///
    /// `index` is the glyph's position in its table, used for error reporting.
    pub fn validate(&self, index: usize) -> Result<(), GlyphError> {
        if self.aliases.is_empty() {
            return Err(GlyphError::NoAliases { glyph: index });
        }

        let expected = self.width();
        if expected == 0 {
            return Err(GlyphError::EmptyGlyph { glyph: index });
        }

        for (row, art) in self.rows.iter().enumerate() {
            let found = art.chars().count();
            if found != expected {
                return Err(GlyphError::RaggedRows {
                    glyph: index,
                    row,
                    expected,
                    found,
                });
            }

            if let Some((column, cell)) = art
                .chars()
                .enumerate()
                .find(|&(_, cell)| cell != LED_ON && cell != LED_OFF)
            {
                return Err(GlyphError::InvalidCell {
                    glyph: index,
                    row,
                    column,
                    cell,
                });
            }
        }

        Ok(())
    }
}

/// The ordered glyphs of a font. A glyph's position is its ID.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: &'static [Glyph],
}

impl GlyphTable {
    pub const fn new(glyphs: &'static [Glyph]) -> Self {
        Self { glyphs }
    }

    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub const fn glyphs(&self) -> &'static [Glyph] {
        self.glyphs
    }

    pub fn get(&self, index: usize) -> Option<&'static Glyph> {
        self.glyphs.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'static, Glyph> {
        self.glyphs.iter()
    }

    /// Find the ID of the glyph which has `character` among its aliases.
    pub fn index_of(&self, character: char) -> Option<usize> {
        self.glyphs
            .iter()
            .position(|glyph| glyph.aliases.contains(&character))
    }

    /// Validate every glyph, and check that no alias selects two glyphs.
    pub fn validate(&self) -> Result<(), GlyphError> {
        if self.glyphs.is_empty() {
            return Err(GlyphError::EmptyTable);
        }

        let mut owners = BTreeMap::new();

        for (index, glyph) in self.glyphs.iter().enumerate() {
            glyph.validate(index)?;

            for &alias in glyph.aliases {
                if let Some(&first) = owners.get(&alias) {
                    return Err(GlyphError::DuplicateAlias {
                        alias,
                        first,
                        second: index,
                    });
                }
                owners.insert(alias, index);
            }
        }

        Ok(())
    }
}

impl IntoIterator for &GlyphTable {
    type Item = &'static Glyph;
    type IntoIter = core::slice::Iter<'static, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
