//! Packing of glyph bitmaps into the column-major byte stream read by the
//! display firmware.

use alloc::vec::Vec;

use log::debug;

use crate::{Glyph, GlyphError, GlyphTable, RowPermutation};

/// Output of [encode_table]: three arrays indexed in lock-step by glyph ID,
/// except `data` which is indexed through `start_offsets`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedGlyphTable {
    /// Index into `data` of each glyph's first column
    pub start_offsets: Vec<u8>,
    /// Number of columns (bytes) of each glyph
    pub widths: Vec<u8>,
    /// One encoded byte per column, in glyph order then column order
    pub data: Vec<u8>,
}

impl EncodedGlyphTable {
    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Total number of data bytes, i.e. the offset one past the last glyph.
    pub fn total_len(&self) -> usize {
        self.data.len()
    }

    /// Encoded columns of the glyph with ID `index`.
    pub fn glyph(&self, index: usize) -> Option<&[u8]> {
        let start = *self.start_offsets.get(index)? as usize;
        let width = *self.widths.get(index)? as usize;
        self.data.get(start..start + width)
    }
}

/// Width of every glyph, read from its first row.
pub fn compute_widths(table: &GlyphTable) -> Vec<usize> {
    table.iter().map(Glyph::width).collect()
}

/// Exclusive prefix sum of `widths`.
///
/// The result has one more entry than `widths`: the last entry is the total
/// data length, and the rest are the per-glyph start offsets.
pub fn compute_start_offsets(widths: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(widths.len() + 1);
    offsets.push(0);

    let mut total = 0;
    for width in widths {
        total += width;
        offsets.push(total);
    }

    offsets
}

/// Encode one column of `glyph` into a byte.
///
/// Bit `p` (0 = least significant) holds the inverted state of row
/// `permutation[p]`: a lit LED is a cleared bit.
pub fn encode_column(glyph: &Glyph, column: usize, permutation: &RowPermutation) -> u8 {
    permutation
        .rows()
        .iter()
        .enumerate()
        .map(|(position, &row)| u8::from(!glyph.bit(row as usize, column)) << position)
        .fold(0, |a, b| a | b)
}

/// Encode a whole table.
///
/// The table is validated first; on error nothing is produced.
pub fn encode_table(
    table: &GlyphTable,
    permutation: &RowPermutation,
) -> Result<EncodedGlyphTable, GlyphError> {
    table.validate()?;

    let widths = compute_widths(table);
    let offsets = compute_start_offsets(&widths);

    let mut encoded = EncodedGlyphTable {
        start_offsets: Vec::with_capacity(table.len()),
        widths: Vec::with_capacity(table.len()),
        data: Vec::with_capacity(offsets[table.len()]),
    };

    for (index, glyph) in table.iter().enumerate() {
        let (offset, width) = (offsets[index], widths[index]);

        let (Ok(offset_byte), Ok(width_byte)) = (u8::try_from(offset), u8::try_from(width)) else {
            return Err(GlyphError::TableTooLarge {
                glyph: index,
                offset,
                width,
            });
        };

        encoded.start_offsets.push(offset_byte);
        encoded.widths.push(width_byte);
        encoded
            .data
            .extend((0..width).map(|column| encode_column(glyph, column, permutation)));

        debug!(
            "glyph {index} {:?}: {width} columns at offset {offset}",
            glyph.aliases
        );
    }

    Ok(encoded)
}
