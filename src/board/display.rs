//! Glyph rendering of a board, for diagnostics only.

use std::fmt;

use super::board::Board;
use super::position::Position;

const EMPTY_GLYPH: char = '·';

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.size()));
        writeln!(f, "{border}")?;
        for row in 0..self.size() as i32 {
            f.write_str("|")?;
            for col in 0..self.size() as i32 {
                let glyph = self
                    .occupant(Position::new(row, col))
                    .map_or(EMPTY_GLYPH, |p| p.kind.glyph(p.color));
                write!(f, "{glyph}")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{border}")
    }
}
