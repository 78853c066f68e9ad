//! ASCII art for the two logo glyphs.

/// Glyph height in rows.
pub const ART_HEIGHT: usize = 7;

/// Letter L (7 lines tall, 6 chars wide)
const LETTER_L: [&str; ART_HEIGHT] = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

/// Letter S (7 lines tall, 6 chars wide). Rows 0-3 form the upper path,
/// rows 4-6 the lower one.
const LETTER_S: [&str; ART_HEIGHT] = [
    " █████",
    "██    ",
    "██    ",
    " ████ ",
    "    ██",
    "    ██",
    "█████ ",
];

/// Last row belonging to the upper S path.
const S_PATH_SPLIT: usize = 3;

/// Columns between the two glyphs.
const GLYPH_GAP: usize = 3;

/// Which part of the logo a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    L,
    SPath1,
    SPath2,
}

/// The logo as a grid of filled cells.
#[derive(Debug, Clone)]
pub struct LogoArt {
    cells: Vec<Vec<Option<Part>>>,
    width: usize,
}

impl Default for LogoArt {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoArt {
    pub fn new() -> Self {
        let s_offset = glyph_width(&LETTER_L) + GLYPH_GAP;
        let width = s_offset + glyph_width(&LETTER_S);

        let cells = (0..ART_HEIGHT)
            .map(|row| {
                let mut line = vec![None; width];
                for (col, ch) in LETTER_L[row].chars().enumerate() {
                    if ch != ' ' {
                        line[col] = Some(Part::L);
                    }
                }
                let s_part = if row <= S_PATH_SPLIT {
                    Part::SPath1
                } else {
                    Part::SPath2
                };
                for (col, ch) in LETTER_S[row].chars().enumerate() {
                    if ch != ' ' {
                        line[s_offset + col] = Some(s_part);
                    }
                }
                line
            })
            .collect();

        Self { cells, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn part_at(&self, col: usize, row: usize) -> Option<Part> {
        self.cells.get(row).and_then(|line| line.get(col)).copied().flatten()
    }

    /// Iterate over every filled cell as `(col, row, part)`.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, Part)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, part)| part.map(|p| (col, row, p)))
        })
    }
}

fn glyph_width(glyph: &[&str; ART_HEIGHT]) -> usize {
    glyph.iter().map(|row| row.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let art = LogoArt::new();
        assert_eq!(art.width(), 15);
        assert_eq!(art.height(), ART_HEIGHT);
    }

    #[test]
    fn test_parts() {
        let art = LogoArt::new();
        assert_eq!(art.part_at(0, 0), Some(Part::L));
        assert_eq!(art.part_at(6, 0), None);
        assert_eq!(art.part_at(10, 0), Some(Part::SPath1));
        assert_eq!(art.part_at(13, 4), Some(Part::SPath2));
        assert_eq!(art.part_at(99, 99), None);
        assert!(art.filled().any(|(_, _, p)| p == Part::SPath2));
    }
}
