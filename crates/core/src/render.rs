use alloc::string::String;
use alloc::vec::Vec;

use crate::{EncodedGlyphTable, GLYPH_HEIGHT, GlyphTable, LED_OFF, LED_ON, RowPermutation};

/// An encoded column with every LED off.
pub const BLANK_COLUMN: u8 = 0xFF;

/// Render `text` to a stream of encoded columns, the way the firmware would
/// scroll it across the display.
///
/// Glyphs are separated by one [BLANK_COLUMN]. Characters without a glyph
/// are skipped.
pub fn render_text(table: &GlyphTable, encoded: &EncodedGlyphTable, text: &str) -> Vec<u8> {
    let mut result = Vec::new();

    for character in text.chars() {
        let Some(columns) = table
            .index_of(character)
            .and_then(|index| encoded.glyph(index))
        else {
            continue;
        };

        if !result.is_empty() {
            result.push(BLANK_COLUMN);
        }
        result.extend_from_slice(columns);
    }

    result
}

/// Draw encoded columns as row art, one line per LED row.
pub fn preview(columns: &[u8], permutation: &RowPermutation) -> String {
    let decoded: Vec<_> = columns.iter().map(|&byte| permutation.decode(byte)).collect();
    let mut out = String::with_capacity((columns.len() + 1) * GLYPH_HEIGHT);

    for row in 0..GLYPH_HEIGHT {
        out.extend(
            decoded
                .iter()
                .map(|lit| if lit[row] { LED_ON } else { LED_OFF }),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Glyph, encode_table};

    const KEY: RowPermutation = RowPermutation::wired([6, 7, 0, 1, 2, 3, 4, 5]);

    static TABLE: GlyphTable = GlyphTable::new(&[
        Glyph {
            aliases: &['I', 'i'],
            rows: ["###", ".#.", ".#.", ".#.", ".#.", ".#.", ".#.", "###"],
        },
        Glyph {
            aliases: &['.'],
            rows: ["..", "..", "..", "..", "..", "..", "##", "##"],
        },
    ]);

    #[test]
    fn renders_with_blank_separators() {
        let encoded = encode_table(&TABLE, &KEY).expect("encode");
        let columns = render_text(&TABLE, &encoded, "i.");

        assert_eq!(columns.len(), 3 + 1 + 2);
        assert_eq!(&columns[..3], encoded.glyph(0).expect("glyph 0"));
        assert_eq!(columns[3], BLANK_COLUMN);
        assert_eq!(&columns[4..], encoded.glyph(1).expect("glyph 1"));
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let encoded = encode_table(&TABLE, &KEY).expect("encode");
        assert_eq!(
            render_text(&TABLE, &encoded, "?I?"),
            render_text(&TABLE, &encoded, "I")
        );
        assert!(render_text(&TABLE, &encoded, "xyz").is_empty());
    }

    #[test]
    fn preview_redraws_source_rows() {
        let encoded = encode_table(&TABLE, &KEY).expect("encode");
        let art = preview(encoded.glyph(0).expect("glyph 0"), &KEY);

        let expected: Vec<_> = TABLE.glyphs()[0].rows.to_vec();
        assert_eq!(art.lines().collect::<Vec<_>>(), expected);
    }
}
