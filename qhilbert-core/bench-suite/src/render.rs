//! Draws a decoded curve with Unicode box-drawing glyphs, one character per cell.

use qhilbert_core::Position;

/// Largest order that still fits a terminal (64 columns).
pub const MAX_RENDER_ORDER: u32 = 6;

const UP: u8 = 1;
const DOWN: u8 = 2;
const LEFT: u8 = 4;
const RIGHT: u8 = 8;

fn direction(from: Position, to: Position) -> u8 {
    if to.y > from.y {
        UP
    } else if to.y < from.y {
        DOWN
    } else if to.x < from.x {
        LEFT
    } else {
        RIGHT
    }
}

fn glyph(links: u8) -> char {
    match links {
        l if l == UP | DOWN => '┃',
        l if l == LEFT | RIGHT => '━',
        l if l == UP | RIGHT => '┗',
        l if l == UP | LEFT => '┛',
        l if l == DOWN | RIGHT => '┏',
        l if l == DOWN | LEFT => '┓',
        UP => '╹',
        DOWN => '╻',
        LEFT => '╸',
        RIGHT => '╺',
        _ => '·',
    }
}

/// Renders `positions` (the curve in distance order) on a `side x side` grid.
///
/// Each cell links to its predecessor and successor. Rows come out with the
/// highest `y` first, so the curve reads the right way up.
pub fn render(positions: &[Position], side: usize) -> Vec<String> {
    let mut links = vec![0u8; side * side];
    for (i, &p) in positions.iter().enumerate() {
        let cell = p.y as usize * side + p.x as usize;
        if i > 0 {
            links[cell] |= direction(p, positions[i - 1]);
        }
        if let Some(&next) = positions.get(i + 1) {
            links[cell] |= direction(p, next);
        }
    }

    links
        .chunks(side)
        .rev()
        .map(|row| {
            let body: String = row.iter().map(|&l| glyph(l)).collect();
            format!("|{body}|")
        })
        .collect()
}
