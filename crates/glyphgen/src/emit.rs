//! Text generation for the firmware's glyph declarations (`.h`) and
//! definitions (`.c`).

use chrono::NaiveDate;
use led_glyph_core::{EncodedGlyphTable, GlyphTable, RowPermutation};
use thiserror::Error;

use crate::config::Config;

/// A glyph table and an encoding that were not produced from each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("glyph table has {glyphs} glyphs but the encoding has {encoded}")]
    GlyphCount { glyphs: usize, encoded: usize },

    #[error("glyph {glyph} is {width} columns wide but has {found} encoded columns")]
    GlyphWidth {
        glyph: usize,
        width: usize,
        found: usize,
    },
}

/// Values per line in the index and width arrays.
const VALUES_PER_LINE: usize = 10;

/// Comment banner opening every generated file.
fn push_banner(
    out: &mut String,
    file_name: &str,
    holder: &str,
    date: NaiveDate,
    description: Option<&str>,
) {
    out.push_str("/**\n");
    out.push_str(&format!(" * @file {}\n", file_name));
    out.push_str(" *\n");
    out.push_str(&format!(
        " * @author This file was procedurally generated on {}\n",
        date.format("%d %b %Y")
    ));
    out.push_str(" *\n");
    out.push_str(&format!(
        " * @copyright Copyright (c) {} {}\n",
        date.format("%Y"),
        holder
    ));
    out.push_str(
        " * @copyright This software is licensed under the terms and conditions of the\n",
    );
    out.push_str(" * MIT License. See LICENSE.md in the root directory for more information.\n");

    if let Some(description) = description {
        out.push_str(" *\n");
        for line in description.lines() {
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(&format!(" * {}\n", line));
            }
        }
    }

    out.push_str(" */\n\n");
}

fn layout_description(config: &Config, permutation: &RowPermutation) -> String {
    let rows: Vec<String> = permutation.rows().iter().map(u8::to_string).collect();

    format!(
        "Define the glyphs used to display a message.\n\
         \n\
         Using an 8-LED display, each column of a glyph is defined in a byte.\n\
         Bit 0 (the LSB) up to bit 7 hold the LEDs of glyph rows {}\n\
         respectively, where row 0 is the top row. A value of 0 indicates the\n\
         LED should be on, while a value of 1 indicates the LED should be off.\n\
         \n\
         To determine the representation of a given glyph, find the start index\n\
         of its data in {}, then the number of bytes of data (its width)\n\
         in {}, then read the correct number of bytes from {}.",
        rows.join(", "),
        config.index_array(),
        config.width_array(),
        config.data_array(),
    )
}

/// Generate the declarations file.
pub fn declarations(
    config: &Config,
    permutation: &RowPermutation,
    encoded: &EncodedGlyphTable,
    date: NaiveDate,
) -> String {
    let mut out = String::new();
    let guard = config.header_guard();

    push_banner(
        &mut out,
        &config.header_name(),
        &config.copyright_holder,
        date,
        Some(&layout_description(config, permutation)),
    );

    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n\n", guard));
    out.push_str("#include <stdint.h>\n");
    out.push_str("#include <avr/pgmspace.h>\n\n");

    out.push_str("enum {\n");
    out.push_str("    /** The number of defined glyphs */\n");
    out.push_str(&format!(
        "    {} = 0x{:02x},\n",
        config.count_name(),
        encoded.len()
    ));
    out.push_str("};\n\n");

    out.push_str(&format!(
        "/** The start index of a glyph's data in {} */\n",
        config.data_array()
    ));
    out.push_str(&format!(
        "extern const uint8_t {}[] PROGMEM;\n\n",
        config.index_array()
    ));
    out.push_str("/** The number of bytes of data for the given glyph */\n");
    out.push_str(&format!(
        "extern const uint8_t {}[] PROGMEM;\n\n",
        config.width_array()
    ));
    out.push_str("/** Glyph data */\n");
    out.push_str(&format!(
        "extern const uint8_t {}[] PROGMEM;\n\n",
        config.data_array()
    ));

    out.push_str(&format!("#endif // {}\n", guard));

    out
}

/// Write a `uint8_t` array of hex literals, wrapped every [VALUES_PER_LINE].
fn push_hex_array(out: &mut String, name: &str, values: &[u8]) {
    out.push_str(&format!("const uint8_t {}[] PROGMEM = {{", name));

    let lines = values.chunks(VALUES_PER_LINE).count();
    for (i, chunk) in values.chunks(VALUES_PER_LINE).enumerate() {
        let literals: Vec<String> = chunk.iter().map(|v| format!("0x{:02x}", v)).collect();
        out.push_str("\n    ");
        out.push_str(&literals.join(", "));
        if i + 1 < lines {
            out.push(',');
        }
    }

    out.push_str("\n};\n\n");
}

/// Generate the definitions file.
///
/// Data bytes are written as binary literals, one line per glyph, so the
/// bit layout can be checked by eye. `encoded` must be the encoding of
/// `table`; anything else is rejected rather than written.
pub fn definitions(
    config: &Config,
    table: &GlyphTable,
    encoded: &EncodedGlyphTable,
    date: NaiveDate,
) -> Result<String, EmitError> {
    if table.len() != encoded.len() {
        return Err(EmitError::GlyphCount {
            glyphs: table.len(),
            encoded: encoded.len(),
        });
    }

    let mut out = String::new();

    push_banner(
        &mut out,
        &config.source_name(),
        &config.copyright_holder,
        date,
        None,
    );
    out.push_str(&format!("#include \"{}\"\n\n", config.header_name()));

    push_hex_array(&mut out, &config.index_array(), &encoded.start_offsets);
    push_hex_array(&mut out, &config.width_array(), &encoded.widths);

    out.push_str(&format!(
        "const uint8_t {}[] PROGMEM = {{",
        config.data_array()
    ));

    for (index, glyph) in table.iter().enumerate() {
        let columns = encoded.glyph(index).unwrap_or_default();
        if columns.len() != glyph.width() {
            return Err(EmitError::GlyphWidth {
                glyph: index,
                width: glyph.width(),
                found: columns.len(),
            });
        }

        let literals: Vec<String> = columns.iter().map(|b| format!("0b{:08b}", b)).collect();
        let aliases: Vec<String> = glyph.aliases.iter().map(|c| format!("{:?}", c)).collect();
        let separator = if index + 1 < table.len() { "," } else { "" };

        out.push_str(&format!(
            "\n    {}{} // {}",
            literals.join(", "),
            separator,
            aliases.join(" ")
        ));
    }

    out.push_str("\n};\n");

    Ok(out)
}
