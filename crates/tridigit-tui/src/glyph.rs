//! Block-glyph bitmaps for the displayed number.
//!
//! Each digit is a 3x5 bitmap; digits are joined with one blank column. The
//! display transforms are applied to the bitmap itself because a terminal
//! cannot rotate or flip text.

use tridigit_app::{DisplayNumber, Transform};

/// Width of one digit glyph in pixels.
pub const DIGIT_WIDTH: usize = 3;
/// Height of one digit glyph in pixels.
pub const DIGIT_HEIGHT: usize = 5;
/// Blank columns between two digits.
const DIGIT_GAP: usize = 1;

const FONT: [[&str; DIGIT_HEIGHT]; 10] = [
    ["###", "#.#", "#.#", "#.#", "###"],
    [".#.", "##.", ".#.", ".#.", "###"],
    ["###", "..#", "###", "#..", "###"],
    ["###", "..#", "###", "..#", "###"],
    ["#.#", "#.#", "###", "..#", "..#"],
    ["###", "#..", "###", "..#", "###"],
    ["###", "#..", "###", "#.#", "###"],
    ["###", "..#", "..#", "..#", "..#"],
    ["###", "#.#", "###", "#.#", "###"],
    ["###", "#.#", "###", "..#", "###"],
];

/// Monochrome pixel grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Blank bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![false; width * height] }
    }

    /// Build from rows of `#` (set) and anything else (clear). Rows shorter
    /// than the first are padded with clear pixels.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut bitmap = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().take(width).enumerate() {
                bitmap.set(x, y, c == '#');
            }
        }
        bitmap
    }

    /// Render `number` with the built-in digit font.
    pub fn from_number(number: &DisplayNumber) -> Self {
        let digits: Vec<u8> = number.digits().collect();
        let width = digits.len() * (DIGIT_WIDTH + DIGIT_GAP) - DIGIT_GAP;
        let mut bitmap = Self::new(width, DIGIT_HEIGHT);

        for (i, digit) in digits.iter().enumerate() {
            let x0 = i * (DIGIT_WIDTH + DIGIT_GAP);
            let glyph = &FONT[usize::from(*digit) % FONT.len()];
            for (y, row) in glyph.iter().enumerate() {
                for (dx, c) in row.chars().enumerate() {
                    bitmap.set(x0 + dx, y, c == '#');
                }
            }
        }
        bitmap
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`. Out-of-range reads are clear.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, on: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = on;
        }
    }

    fn map(
        &self,
        width: usize,
        height: usize,
        source: impl Fn(usize, usize) -> (usize, usize),
    ) -> Self {
        let mut out = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let (sx, sy) = source(x, y);
                out.set(x, y, self.get(sx, sy));
            }
        }
        out
    }

    /// Flipped left to right.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let w = self.width;
        self.map(self.width, self.height, |x, y| (w - 1 - x, y))
    }

    /// Rotated by a half turn.
    #[must_use]
    pub fn rotated_180(&self) -> Self {
        let (w, h) = (self.width, self.height);
        self.map(w, h, |x, y| (w - 1 - x, h - 1 - y))
    }

    /// Rotated a quarter turn clockwise; width and height swap.
    #[must_use]
    pub fn rotated_90_cw(&self) -> Self {
        let h = self.height;
        self.map(self.height, self.width, |x, y| (y, h - 1 - x))
    }

    /// Each pixel becomes a `factor` x `factor` block.
    #[must_use]
    pub fn scaled(&self, factor: usize) -> Self {
        let factor = factor.max(1);
        self.map(self.width * factor, self.height * factor, |x, y| (x / factor, y / factor))
    }

    /// Apply transforms listed in composition order.
    ///
    /// Like a CSS transform list, the last entry acts on the bitmap first.
    #[must_use]
    pub fn transformed(&self, transforms: &[Transform]) -> Self {
        transforms.iter().rev().fold(self.clone(), |bitmap, transform| match transform {
            Transform::PortraitRotation => bitmap.rotated_90_cw(),
            Transform::UpsideDown => bitmap.rotated_180(),
            Transform::Mirror => bitmap.mirrored(),
        })
    }

    /// One string per row, using `on` and `off` for set and clear pixels.
    pub fn to_lines(&self, on: &str, off: &str) -> Vec<String> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| if self.get(x, y) { on } else { off }).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn number(s: &str) -> DisplayNumber {
        DisplayNumber::try_from(s).unwrap()
    }

    #[test]
    fn renders_129() {
        let bitmap = Bitmap::from_number(&number("129"));
        insta::assert_snapshot!(bitmap.to_lines("#", ".").join("\n"), @r"
        .#..###.###
        ##....#.#.#
        .#..###.###
        .#..#.....#
        ###.###.###
        ");
    }

    #[test]
    fn mirror_reverses_rows() {
        let bitmap = Bitmap::from_rows(&["##.", "#.."]).mirrored();
        assert_eq!(bitmap.to_lines("#", "."), vec![".##", "..#"]);
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        // Top row becomes right column.
        let bitmap = Bitmap::from_rows(&["##", ".."]).rotated_90_cw();
        assert_eq!(bitmap.to_lines("#", "."), vec![".#", ".#"]);

        let tall = Bitmap::from_number(&number("111")).rotated_90_cw();
        assert_eq!((tall.width(), tall.height()), (DIGIT_HEIGHT, 11));
    }

    #[test]
    fn transforms_apply_right_to_left() {
        let bitmap = Bitmap::from_rows(&["#..", "..."]);
        let composed = bitmap.transformed(&[Transform::PortraitRotation, Transform::Mirror]);

        assert_eq!(composed, bitmap.mirrored().rotated_90_cw());
        assert_ne!(composed, bitmap.rotated_90_cw().mirrored());
    }

    #[test]
    fn scaled_blocks() {
        let bitmap = Bitmap::from_rows(&["#."]).scaled(2);
        assert_eq!(bitmap.to_lines("#", "."), vec!["##..", "##.."]);
    }

    proptest! {
        #[test]
        fn four_quarter_turns_are_identity(digits in "[0-9]{3}") {
            let bitmap = Bitmap::from_number(&number(&digits));
            let turned = bitmap.rotated_90_cw().rotated_90_cw().rotated_90_cw().rotated_90_cw();
            prop_assert_eq!(turned, bitmap);
        }

        #[test]
        fn half_turn_is_two_quarter_turns(digits in "[0-9]{3}") {
            let bitmap = Bitmap::from_number(&number(&digits));
            prop_assert_eq!(bitmap.rotated_180(), bitmap.rotated_90_cw().rotated_90_cw());
        }

        #[test]
        fn double_mirror_is_identity(digits in "[0-9]{3}") {
            let bitmap = Bitmap::from_number(&number(&digits));
            prop_assert_eq!(bitmap.mirrored().mirrored(), bitmap);
        }
    }
}
