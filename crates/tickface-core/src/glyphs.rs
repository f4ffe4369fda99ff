//! Oversized block glyphs for the digital and timer faces.
//!
//! Each glyph is a 5-row grid of cells. A `#` cell renders as two full
//! blocks so a glyph comes out roughly square in a terminal's tall cells.

pub const GLYPH_HEIGHT: usize = 5;

/// Digits 0-9 on a 3-cell-wide grid.
const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    ["  #", "  #", "  #", "  #", "  #"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];

const COLON: [&str; GLYPH_HEIGHT] = [" ", "#", " ", "#", " "];

fn glyph(c: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match c {
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        ':' => Some(&COLON),
        _ => None,
    }
}

/// Render `text` as block glyphs, one returned string per row. Characters
/// outside the font come out as a digit-wide blank.
pub fn big_lines(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];

    for (i, c) in text.chars().enumerate() {
        for (row_index, out) in rows.iter_mut().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            match glyph(c) {
                Some(pattern) => {
                    for cell in pattern[row_index].chars() {
                        out.push_str(if cell == '#' { "██" } else { "  " });
                    }
                }
                None => out.push_str("      "),
            }
        }
    }

    rows
}
