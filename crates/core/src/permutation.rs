use crate::{GLYPH_HEIGHT, GlyphError};

/// Maps each bit of an encoded column byte to the glyph row it carries.
///
/// Position 0 is the least significant bit. The mapping comes from how the
/// display's LED rows are wired to their driver, so it is a constant of the
/// hardware rather than something derived from glyph data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RowPermutation([u8; GLYPH_HEIGHT]);

impl RowPermutation {
    /// Build a permutation, rejecting anything that is not a bijection over
    /// the glyph rows.
    pub fn new(rows: [u8; GLYPH_HEIGHT]) -> Result<Self, GlyphError> {
        if Self::is_bijection(&rows) {
            Ok(Self(rows))
        } else {
            Err(GlyphError::InvalidPermutation { rows })
        }
    }

    /// Build a permutation in a `const` context.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, when used for a constant) if `rows` is not a
    /// bijection over the glyph rows.
    pub const fn wired(rows: [u8; GLYPH_HEIGHT]) -> Self {
        assert!(
            Self::is_bijection(&rows),
            "row permutation must name every row exactly once"
        );
        Self(rows)
    }

    /// Does `rows` name every row in `0..GLYPH_HEIGHT` exactly once?
    pub const fn is_bijection(rows: &[u8; GLYPH_HEIGHT]) -> bool {
        let mut seen: u16 = 0;
        let mut position = 0;

        while position < GLYPH_HEIGHT {
            let row = rows[position] as usize;
            if row >= GLYPH_HEIGHT || seen & (1 << row) != 0 {
                return false;
            }
            seen |= 1 << row;
            position += 1;
        }

        true
    }

    pub const fn rows(&self) -> [u8; GLYPH_HEIGHT] {
        self.0
    }

    /// Glyph row carried by bit `position` of an encoded byte.
    pub const fn source_row(&self, position: usize) -> usize {
        self.0[position] as usize
    }

    /// Recover the LED states of one encoded column, indexed by glyph row.
    /// `true` means lit.
    pub fn decode(&self, byte: u8) -> [bool; GLYPH_HEIGHT] {
        let mut lit = [false; GLYPH_HEIGHT];
        for (position, &row) in self.0.iter().enumerate() {
            // active-low
            lit[row as usize] = byte & (1 << position) == 0;
        }
        lit
    }
}
