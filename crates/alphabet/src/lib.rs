#![cfg_attr(not(test), no_std)]

//! `led-glyph-alphabet` holds the glyph set shown on the 8-row LED matrix:
//! a space, the letters A to Z (upper and lower case share a glyph), the
//! digits, and `! ? # . : *`.
//!
//! The glyphs are drawn in `data/alphabet.glyphs` and compiled into
//! [ALPHABET] at build time.

use led_glyph_core::{Glyph, GlyphTable, RowPermutation};

include!(concat!(env!("OUT_DIR"), "/alphabet.rs"));

/// Wiring of the display's LED rows to the bits of a column byte.
///
/// Bit 0 (least significant) drives glyph row 6, bit 1 row 7, and bits 2 to
/// 7 drive rows 0 to 5.
pub const LED_KEY: RowPermutation = RowPermutation::wired([6, 7, 0, 1, 2, 3, 4, 5]);

#[cfg(test)]
mod tests {
    use led_glyph_core::{EncodedGlyphTable, encode_table};

    use super::*;

    fn encoded() -> EncodedGlyphTable {
        encode_table(&ALPHABET, &LED_KEY).expect("canonical table encodes")
    }

    #[test]
    fn alphabet_is_well_formed() {
        assert_eq!(ALPHABET.validate(), Ok(()));
        assert_eq!(ALPHABET.len(), 43);
    }

    #[test]
    fn glyph_order_is_stable() {
        assert_eq!(ALPHABET.index_of(' '), Some(0));
        assert_eq!(ALPHABET.index_of('A'), Some(1));
        assert_eq!(ALPHABET.index_of('z'), Some(26));
        assert_eq!(ALPHABET.index_of('1'), Some(27));
        assert_eq!(ALPHABET.index_of('0'), Some(36));

        let punctuation: Vec<_> = ALPHABET.iter().skip(37).map(|g| g.aliases[0]).collect();
        assert_eq!(punctuation, vec!['!', '?', '#', '.', ':', '*']);
    }

    #[test]
    fn cases_share_a_glyph() {
        for (upper, lower) in ('A'..='Z').zip('a'..='z') {
            assert_eq!(ALPHABET.index_of(upper), ALPHABET.index_of(lower));
        }
    }

    #[test]
    fn space_is_six_blank_columns() {
        let encoded = encoded();
        assert_eq!(encoded.widths[0], 6);
        assert_eq!(encoded.glyph(0), Some(&[0xFF; 6][..]));
    }

    #[test]
    fn bang_columns() {
        let encoded = encoded();
        let bang = ALPHABET.index_of('!').expect("'!' glyph");
        assert_eq!(encoded.widths[bang], 2);
        assert_eq!(encoded.start_offsets[bang], 217);
        assert_eq!(encoded.glyph(bang), Some(&[0x80, 0x80][..]));
    }

    #[test]
    fn first_letter_columns() {
        let encoded = encoded();
        assert_eq!(encoded.start_offsets[1], 6);
        assert_eq!(
            encoded.glyph(1),
            Some(&[0x0C, 0x04, 0x33, 0x33, 0x04, 0x0C][..])
        );
    }

    #[test]
    fn every_column_decodes_to_its_rows() {
        let encoded = encoded();

        for (index, glyph) in ALPHABET.iter().enumerate() {
            let columns = encoded.glyph(index).expect("encoded glyph");
            assert_eq!(columns.len(), glyph.width());

            for (column, &byte) in columns.iter().enumerate() {
                for position in 0..8 {
                    let row = LED_KEY.source_row(position);
                    let bit = (byte >> position) & 1 == 1;
                    assert_eq!(
                        bit,
                        !glyph.bit(row, column),
                        "glyph {index} column {column} bit {position}"
                    );
                }

                let lit: [bool; 8] = core::array::from_fn(|row| glyph.bit(row, column));
                assert_eq!(LED_KEY.decode(byte), lit);
            }
        }
    }

    #[test]
    fn table_fits_byte_indices() {
        let encoded = encoded();
        assert_eq!(encoded.total_len(), 242);
        assert_eq!(encoded.start_offsets.last(), Some(&236));
        assert_eq!(encoded.widths.last(), Some(&6));
    }
}
