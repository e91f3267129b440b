//! Plain-text board rendering.

use derive_getters::Getters;
use derive_setters::Setters;
use std::collections::BTreeSet;
use strictly_gomoku::{Action, Board, Cell, Player};

/// Glyphs for increasing probability, lowest first.
const DENSITY: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// What to draw on top of the bare board.
#[derive(Debug, Clone, Default, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct RenderOptions {
    /// Per-cell probabilities in row-major order, shown on empty cells.
    #[setters(strip_option)]
    probabilities: Option<Vec<f64>>,
    /// Cells drawn in brackets.
    highlights: BTreeSet<Action>,
    /// Whether to print row and column indices.
    coordinates: bool,
}

fn mark(player: Player) -> char {
    match player {
        Player::One => 'X',
        Player::Two => 'O',
    }
}

/// Maps a probability to a density glyph. Out-of-range values are clamped.
fn density(p: f64) -> char {
    if p.is_nan() || p <= 0.0 {
        return '.';
    }
    let last = DENSITY.len() - 1;
    let level = ((p.min(1.0) * last as f64).ceil() as usize).clamp(1, last);
    DENSITY[level]
}

/// Renders `board` as text, one line per row.
///
/// `X` marks player one, `O` player two and `.` an empty cell. With a
/// probability overlay, empty cells show a density glyph instead. A
/// highlighted cell is drawn as `[c]`, others as ` c `.
pub fn render_board(board: &Board, options: &RenderOptions) -> String {
    let size = board.size();
    let mut out = String::new();

    if options.coordinates {
        out.push_str("    ");
        for col in 0..size.cols() {
            out.push_str(&format!("{:^3}", col % 100));
        }
        out.truncate(out.trim_end_matches(' ').len());
        out.push('\n');
    }

    for row in 0..size.rows() {
        if options.coordinates {
            out.push_str(&format!("{row:>3} "));
        }
        for col in 0..size.cols() {
            let glyph = match board.get(row, col) {
                Some(Cell::Occupied(player)) => mark(player),
                _ => options
                    .probabilities
                    .as_ref()
                    .and_then(|p| p.get(row * size.cols() + col))
                    .map_or('.', |&p| density(p)),
            };
            if options.highlights.contains(&Action::new(row, col)) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }
        out.truncate(out.trim_end_matches(' ').len());
        out.push('\n');
    }

    out
}
