//! Brick grid generation and layout
//!
//! The grid is a fixed rows x cols array of optional bricks. It is rolled once
//! per round and afterwards only loses bricks; it is never resized.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::tuning::Tuning;

/// Brick palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
    Teal,
    Cyan,
    Blue,
    Violet,
    Fuchsia,
}

impl BrickColor {
    pub const ALL: [BrickColor; 10] = [
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Yellow,
        BrickColor::Lime,
        BrickColor::Green,
        BrickColor::Teal,
        BrickColor::Cyan,
        BrickColor::Blue,
        BrickColor::Violet,
        BrickColor::Fuchsia,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            BrickColor::Red => "#ef4444",
            BrickColor::Orange => "#f97316",
            BrickColor::Yellow => "#eab308",
            BrickColor::Lime => "#84cc16",
            BrickColor::Green => "#22c55e",
            BrickColor::Teal => "#14b8a6",
            BrickColor::Cyan => "#06b6d4",
            BrickColor::Blue => "#3b82f6",
            BrickColor::Violet => "#8b5cf6",
            BrickColor::Fuchsia => "#d946ef",
        }
    }

    /// RGBA in 0..1, decoded from `hex()` and still sRGB-encoded. The
    /// renderer writes to a non-sRGB surface so these land on screen as the
    /// hex codes read.
    pub fn rgba(&self) -> [f32; 4] {
        let hex = &self.hex()[1..];
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_or(0.0, |v| v as f32 / 255.0)
        };
        [channel(0), channel(2), channel(4), 1.0]
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Row-major grid of bricks; `None` is an empty or destroyed cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<BrickColor>>,
}

impl BrickGrid {
    /// A grid with every cell empty
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// A grid with every cell holding `color`
    pub fn filled(rows: usize, cols: usize, color: BrickColor) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Some(color); rows * cols],
        }
    }

    /// Roll a fresh layout.
    ///
    /// Row `r` keeps each cell with probability `1 - (r / rows) * falloff`, so
    /// the top is dense and the bottom sparse. An all-empty roll is retried up
    /// to `max_grid_attempts` times; after that one brick is forced into the
    /// top row so a round can always be won.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        for attempt in 1..=tuning.max_grid_attempts {
            let grid = Self::roll(rng, tuning);
            if !grid.is_cleared() {
                log::info!(
                    "Brick grid generated: {} bricks (attempt {})",
                    grid.remaining(),
                    attempt
                );
                return grid;
            }
        }

        log::warn!(
            "Brick grid empty after {} attempts, forcing one brick",
            tuning.max_grid_attempts
        );
        let mut grid = Self::empty(tuning.rows, tuning.cols);
        let col = rng.random_range(0..tuning.cols);
        grid.cells[col] = Some(BrickColor::random(rng));
        grid
    }

    fn roll<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        let mut grid = Self::empty(tuning.rows, tuning.cols);
        for row in 0..tuning.rows {
            let probability = 1.0 - (row as f32 / tuning.rows as f32) * tuning.row_falloff;
            for col in 0..tuning.cols {
                if rng.random::<f32>() < probability {
                    grid.cells[row * tuning.cols + col] = Some(BrickColor::random(rng));
                }
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<BrickColor> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Destroy one brick, returning its color if it was present
    pub fn remove(&mut self, row: usize, col: usize) -> Option<BrickColor> {
        let i = self.index(row, col)?;
        self.cells[i].take()
    }

    /// Number of bricks still standing
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Present bricks as `(row, col, color)` in row-major order
    pub fn bricks(&self) -> impl Iterator<Item = (usize, usize, BrickColor)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|color| (i / self.cols, i % self.cols, color))
        })
    }

    /// Rows of cells, top to bottom
    pub fn row_slices(&self) -> impl Iterator<Item = &[Option<BrickColor>]> {
        self.cells.chunks(self.cols.max(1))
    }
}

/// Brick rectangles for a given play-area width
///
/// Bricks span the full width: `cols` bricks and `cols - 1` gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickLayout {
    pub brick_width: f32,
    pub brick_height: f32,
    pub gap: f32,
}

impl BrickLayout {
    pub fn new(container_width: f32, cols: usize, tuning: &Tuning) -> Self {
        let cols = cols.max(1) as f32;
        let brick_width = (container_width - (cols - 1.0) * tuning.brick_gap) / cols;
        Self {
            brick_width,
            brick_height: brick_width / tuning.brick_aspect,
            gap: tuning.brick_gap,
        }
    }

    pub fn rect(&self, row: usize, col: usize) -> Aabb {
        Aabb::new(
            col as f32 * (self.brick_width + self.gap),
            row as f32 * (self.brick_height + self.gap),
            self.brick_width,
            self.brick_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_is_non_empty_and_sized() {
        let tuning = Tuning::default();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let grid = BrickGrid::generate(&mut rng, &tuning);
            assert_eq!(grid.rows(), 8);
            assert_eq!(grid.cols(), 14);
            assert!(grid.remaining() > 0);
        }
    }

    #[test]
    fn test_top_row_denser_than_bottom() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let (mut top, mut bottom) = (0, 0);
        for _ in 0..200 {
            let grid = BrickGrid::generate(&mut rng, &tuning);
            top += (0..14).filter(|&c| grid.get(0, c).is_some()).count();
            bottom += (0..14).filter(|&c| grid.get(7, c).is_some()).count();
        }
        // Top row is always full with the default falloff
        assert_eq!(top, 200 * 14);
        assert!(bottom < top);
    }

    #[test]
    fn test_forced_brick_when_rolls_come_up_empty() {
        // Zero attempts goes straight to the fallback
        let tuning = Tuning {
            max_grid_attempts: 0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let grid = BrickGrid::generate(&mut rng, &tuning);
        assert_eq!(grid.remaining(), 1);
        assert!((0..tuning.cols).any(|c| grid.get(0, c).is_some()));
    }

    #[test]
    fn test_remove_is_permanent() {
        let mut grid = BrickGrid::filled(2, 3, BrickColor::Blue);
        assert_eq!(grid.remove(1, 2), Some(BrickColor::Blue));
        assert_eq!(grid.remove(1, 2), None);
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.remaining(), 5);
        assert_eq!(grid.remove(5, 5), None);
    }

    #[test]
    fn test_bricks_row_major() {
        let mut grid = BrickGrid::empty(2, 2);
        grid.cells[3] = Some(BrickColor::Red);
        grid.cells[1] = Some(BrickColor::Green);
        let order: Vec<_> = grid.bricks().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 1), (1, 1)]);
        assert_eq!(grid.row_slices().count(), 2);
    }

    #[test]
    fn test_layout_spans_container() {
        let tuning = Tuning::default();
        let layout = BrickLayout::new(800.0, 14, &tuning);
        let expected_width = (800.0 - 13.0 * 6.0) / 14.0;
        assert!((layout.brick_width - expected_width).abs() < 1e-4);
        assert!((layout.brick_height - expected_width / 2.5).abs() < 1e-4);

        let last = layout.rect(7, 13);
        assert!((last.right() - 800.0).abs() < 1e-3);
        assert!((last.top() - 7.0 * (layout.brick_height + 6.0)).abs() < 1e-3);
    }

    #[test]
    fn test_palette_hex_decodes() {
        assert_eq!(BrickColor::Red.rgba(), [239.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0]);
        for color in BrickColor::ALL {
            assert_eq!(color.hex().len(), 7);
        }
    }
}
