//! Serializes a finished [`FontTable`] into the two C artifacts a display
//! driver consumes: a header declaring the table's public shape and a source
//! file holding the packed bytes.

use crate::table::{FontTable, GlyphKey, TableKind};

/// Bytes per line in the flat hex dump of positional tables.
const ROW_WIDTH: usize = 12;

/// The header and source artifact of one run, named after the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: String,
    pub source: String,
}

/// Renders both artifacts. `include_struct` additionally embeds the
/// sFONT/cFONT typedefs so the header is self-contained for drivers that do
/// not ship their own fonts.h.
pub fn render(table: &FontTable, include_struct: bool) -> Artifacts {
    match table.kind {
        TableKind::Positional => Artifacts {
            header: positional_header(table, include_struct),
            source: positional_source(table),
        },
        TableKind::Keyed { narrow_width } => Artifacts {
            header: keyed_header(table, include_struct),
            source: keyed_source(table, narrow_width),
        },
    }
}

fn positional_header(table: &FontTable, include_struct: bool) -> String {
    let mut out = String::from("#pragma once\n#include <stdint.h>\n\n");

    if include_struct {
        out.push_str(
            "typedef struct {\n  \
               const uint8_t *table;\n  \
               uint16_t Width;\n  \
               uint16_t Height;\n\
             } sFONT;\n\n",
        );
    }

    out.push_str(&format!("extern const uint8_t {}_Table[];\n", table.name));
    out.push_str(&format!("extern const sFONT {};\n", table.name));
    out
}

fn positional_source(table: &FontTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("#include \"{}.h\"\n\n", table.name));
    out.push_str(&format!("const uint8_t {}_Table[] = {{\n", table.name));

    let bytes: Vec<u8> = table
        .entries
        .iter()
        .flat_map(|e| e.bitmap.as_bytes().iter().copied())
        .collect();
    for chunk in bytes.chunks(ROW_WIDTH) {
        out.push_str("  ");
        for b in chunk {
            out.push_str(&format!("0x{b:02X}, "));
        }
        out.push('\n');
    }

    out.push_str("};\n\n");
    out.push_str(&format!(
        "const sFONT {name} = {{ {name}_Table, {}, {} }};\n",
        table.cell.width,
        table.cell.height,
        name = table.name,
    ));
    out
}

fn keyed_header(table: &FontTable, include_struct: bool) -> String {
    let mut out = String::from("#pragma once\n#include <stdint.h>\n\n");

    if include_struct {
        out.push_str(&format!(
            "typedef struct {{\n  \
               uint8_t index[3];\n  \
               uint8_t matrix[{}];\n\
             }} CH_CN;\n\n",
            table.cell.bytes_per_glyph(),
        ));
        out.push_str(
            "typedef struct {\n  \
               const CH_CN *table;\n  \
               uint16_t size;\n  \
               uint16_t ascii_width;\n  \
               uint16_t width;\n  \
               uint16_t height;\n\
             } cFONT;\n\n",
        );
    }

    out.push_str(&format!("extern const CH_CN {}_Table[];\n", table.name));
    out.push_str(&format!("extern const cFONT {};\n", table.name));
    out
}

fn keyed_source(table: &FontTable, narrow_width: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("#include \"{}.h\"\n\n", table.name));
    out.push_str(&format!("const CH_CN {}_Table[] = {{\n", table.name));

    for entry in &table.entries {
        let key = match entry.key {
            GlyphKey::Utf8(key) => key,
            // Keyed tables are only ever built with UTF-8 keys.
            GlyphKey::Position(_) => [0; 3],
        };

        out.push_str(&format!(
            "  {{{{0x{:02X}, 0x{:02X}, 0x{:02X}}}, {{",
            key[0], key[1], key[2],
        ));
        let hex: Vec<String> = entry
            .bitmap
            .as_bytes()
            .iter()
            .map(|b| format!("0x{b:02X}"))
            .collect();
        out.push_str(&hex.join(", "));
        out.push_str("}},\n");
    }

    out.push_str("};\n\n");
    out.push_str(&format!(
        "const cFONT {name} = {{\n  \
           {name}_Table,\n  \
           {}, /* size */\n  \
           {}, /* ASCII width */\n  \
           {}, /* width */\n  \
           {}, /* height */\n\
         }};\n",
        table.entries.len(),
        narrow_width,
        table.cell.width,
        table.cell.height,
        name = table.name,
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::font::testing::ScriptedSource;
    use crate::font::GlyphBounds;
    use crate::metrics::{CellGeometry, FixedMetrics};
    use crate::table::{build_keyed_table, build_range_table};

    fn metrics(width: u32, height: u32) -> FixedMetrics {
        FixedMetrics {
            ascent: height * 3 / 4,
            descent: height / 4,
            cell: CellGeometry { width, height },
        }
    }

    fn solid(c: char, w: u32, h: u32) -> ScriptedSource {
        ScriptedSource::new(6, 2).with_glyph(
            c,
            GlyphBounds { xmin: 0, ymin: 0, width: w, height: h },
        )
    }

    #[test]
    fn positional_artifacts() {
        let source = solid('!', 4, 6);
        let (table, _) = build_range_table(&source, "Demo8", &metrics(8, 8), ' ', '!', None);

        let artifacts = render(&table, true);

        assert!(artifacts.header.contains("#pragma once"));
        assert!(artifacts.header.contains("} sFONT;"));
        assert!(artifacts.header.contains("extern const uint8_t Demo8_Table[];"));
        assert!(artifacts.header.contains("extern const sFONT Demo8;"));

        assert!(artifacts.source.starts_with("#include \"Demo8.h\"\n"));
        assert!(artifacts.source.contains("const uint8_t Demo8_Table[] = {"));
        assert!(artifacts.source.contains("const sFONT Demo8 = { Demo8_Table, 8, 8 };"));

        // 2 glyphs of 8 bytes, 12 bytes per emitted line
        let data_lines: Vec<&str> = artifacts
            .source
            .lines()
            .filter(|l| l.starts_with("  0x"))
            .collect();
        assert_eq!(data_lines.len(), 2);
        assert_eq!(data_lines[0].matches("0x").count(), 12);
        assert_eq!(data_lines[1].matches("0x").count(), 4);
    }

    #[test]
    fn header_struct_is_optional() {
        let source = solid('!', 4, 6);
        let (table, _) = build_range_table(&source, "Demo8", &metrics(8, 8), '!', '!', None);

        let artifacts = render(&table, false);

        assert!(!artifacts.header.contains("typedef struct"));
        assert!(artifacts.header.contains("extern const sFONT Demo8;"));
    }

    #[test]
    fn keyed_artifacts() {
        let source = solid('가', 6, 6);
        let (table, _) = build_keyed_table(&source, "Font8KR", &metrics(8, 8), 6, &['가']);

        let artifacts = render(&table, true);

        assert!(artifacts.header.contains("uint8_t matrix[8];"));
        assert!(artifacts.header.contains("} CH_CN;"));
        assert!(artifacts.header.contains("} cFONT;"));
        assert!(artifacts.header.contains("extern const CH_CN Font8KR_Table[];"));
        assert!(artifacts.header.contains("extern const cFONT Font8KR;"));

        // '가' is EA B0 80 in UTF-8.
        assert!(artifacts.source.contains("{{0xEA, 0xB0, 0x80}, {"));
        assert!(artifacts.source.contains("1, /* size */"));
        assert!(artifacts.source.contains("6, /* ASCII width */"));
        assert!(artifacts.source.contains("8, /* width */"));
        assert!(artifacts.source.contains("8, /* height */"));
    }

    #[test]
    fn every_byte_is_two_hex_digits() {
        let source = solid('A', 4, 6);
        let (table, _) = build_range_table(&source, "D", &metrics(8, 8), 'A', 'A', None);

        let artifacts = render(&table, false);

        for line in artifacts.source.lines().filter(|l| l.starts_with("  0x")) {
            for token in line.split_whitespace() {
                let token = token.trim_end_matches(',');
                assert_eq!(token.len(), 4, "byte literal {token}");
                assert!(token.starts_with("0x"));
            }
        }
    }
}
