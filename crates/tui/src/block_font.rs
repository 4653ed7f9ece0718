//! Big letters for the menu banner.

const GLYPH_ROWS: usize = 5;
const GLYPH_COLS: usize = 5;
const LETTER_GAP: usize = 2;
const INK: char = '█';
const SHADOW: char = '░';

type Glyph = [&'static str; GLYPH_ROWS];

/// Lines of `text` drawn in block letters with a drop shadow below and to
/// the right. Letters are upper-cased; characters without a glyph become
/// blank columns.
pub fn render(text: &str) -> Vec<String> {
    let letters: Vec<Option<Glyph>> = text.chars().map(glyph).collect();
    let cell_width = GLYPH_COLS * 2 + LETTER_GAP;
    let width = letters.len() * cell_width + 2;
    let mut canvas = vec![vec![' '; width]; GLYPH_ROWS + 1];

    for (index, letter) in letters.iter().enumerate() {
        let Some(rows) = letter else { continue };
        let left = index * cell_width;
        for (y, row) in rows.iter().enumerate() {
            for (col, mark) in row.chars().enumerate() {
                if mark != '#' {
                    continue;
                }
                let x = left + col * 2;
                for dx in 0..2 {
                    canvas[y][x + dx] = INK;
                    let shade = &mut canvas[y + 1][x + dx + 2];
                    if *shade == ' ' {
                        *shade = SHADOW;
                    }
                }
            }
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

fn glyph(ch: char) -> Option<Glyph> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [" ### ", "#   #", "#####", "#   #", "#   #"],
        'B' => ["#### ", "#   #", "#### ", "#   #", "#### "],
        'C' => [" ####", "#    ", "#    ", "#    ", " ####"],
        'D' => ["#### ", "#   #", "#   #", "#   #", "#### "],
        'E' => ["#####", "#    ", "#### ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#### ", "#    ", "#    "],
        'G' => [" ####", "#    ", "#  ##", "#   #", " ####"],
        'H' => ["#   #", "#   #", "#####", "#   #", "#   #"],
        'I' => ["#####", "  #  ", "  #  ", "  #  ", "#####"],
        'J' => ["#####", "   # ", "   # ", "#  # ", " ##  "],
        'K' => ["#   #", "#  # ", "###  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "#   #", "#   #"],
        'N' => ["#   #", "##  #", "# # #", "#  ##", "#   #"],
        'O' => [" ### ", "#   #", "#   #", "#   #", " ### "],
        'P' => ["#### ", "#   #", "#### ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "# # #", "#  # ", " ## #"],
        'R' => ["#### ", "#   #", "#### ", "#  # ", "#   #"],
        'S' => [" ####", "#    ", " ### ", "    #", "#### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => ["#   #", " # # ", "  #  ", " # # ", "#   #"],
        'Y' => ["#   #", " # # ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "   # ", "  #  ", " #   ", "#####"],
        '?' => [" ### ", "#   #", "  ## ", "     ", "  #  "],
        _ => return None,
    };
    Some(rows)
}
