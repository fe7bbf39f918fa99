use std::{fs, path::PathBuf};

const GLYPH_HEIGHT: usize = 8;

#[derive(Debug, Clone)]
struct Glyph {
    pub aliases: Vec<char>,
    pub rows: Vec<String>,
    /// Line of the glyph's header in the data file, for error messages
    pub line: usize,
}

/// Parse a header line such as `= 'A' 'a'` into its aliases.
fn parse_aliases(header: &str, line: usize) -> Vec<char> {
    let mut aliases = Vec::new();
    let mut chars = header.chars();

    loop {
        match chars.next() {
            None => break,
            Some(c) if c.is_whitespace() => continue,
            Some('\'') => {
                let alias = chars
                    .next()
                    .unwrap_or_else(|| panic!("line {}: unterminated alias", line));
                if chars.next() != Some('\'') {
                    panic!("line {}: alias must be a single quoted character", line);
                }
                aliases.push(alias);
            }
            Some(c) => panic!("line {}: unexpected {:?} in glyph header", line, c),
        }
    }

    if aliases.is_empty() {
        panic!("line {}: glyph header has no aliases", line);
    }

    aliases
}

/// Load a file of glyph definitions.
fn load_file(file: &str) -> Vec<Glyph> {
    let mut glyphs: Vec<Glyph> = Vec::new();

    for (idx, raw) in file.lines().enumerate() {
        let line = idx + 1;

        if raw.starts_with(';') {
            continue;
        }

        if let Some(header) = raw.strip_prefix('=') {
            glyphs.push(Glyph {
                aliases: parse_aliases(header, line),
                rows: Vec::with_capacity(GLYPH_HEIGHT),
                line,
            });
            continue;
        }

        let row = raw.trim_end();
        if row.is_empty() {
            continue;
        }

        match glyphs.last_mut() {
            Some(glyph) if glyph.rows.len() < GLYPH_HEIGHT => glyph.rows.push(row.to_owned()),
            Some(glyph) => panic!(
                "line {}: glyph from line {} already has {} rows",
                line, glyph.line, GLYPH_HEIGHT
            ),
            None => panic!("line {}: row before the first glyph header", line),
        }
    }

    for glyph in &glyphs {
        if glyph.rows.len() != GLYPH_HEIGHT {
            panic!(
                "line {}: glyph has {} rows, expected {}",
                glyph.line,
                glyph.rows.len(),
                GLYPH_HEIGHT
            );
        }
    }

    glyphs
}

/// Generate the glyph table Rust code that will be included in the crate.
fn generate_rust(glyphs: &[Glyph]) -> String {
    let mut out = String::new();

    out.push_str("/// The canonical glyph set, in glyph ID order.\n");
    out.push_str("pub static ALPHABET: GlyphTable = GlyphTable::new(&[\n");

    for (id, glyph) in glyphs.iter().enumerate() {
        out.push_str(&format!("    // {}\n", id));
        out.push_str("    Glyph {\n");

        let aliases: Vec<String> = glyph.aliases.iter().map(|c| format!("{:?}", c)).collect();
        out.push_str(&format!("        aliases: &[{}],\n", aliases.join(", ")));

        out.push_str("        rows: [\n");
        for row in &glyph.rows {
            out.push_str(&format!("            {:?},\n", row));
        }
        out.push_str("        ],\n    },\n");
    }

    out.push_str("]);\n");

    out
}

fn main() {
    let source = fs::read_to_string("data/alphabet.glyphs").unwrap();
    let glyphs = load_file(&source);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("alphabet.rs");

    fs::write(out_file, generate_rust(&glyphs)).unwrap();

    println!("cargo:rerun-if-changed=data/alphabet.glyphs");
}
