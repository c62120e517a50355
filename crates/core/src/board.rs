//! Board module - render/query view of the playfield
//!
//! The board is rebuilt from the snake and the food every time it is needed.
//! It is never a source of truth: collisions are computed from the snake itself.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Uses a flat row-major vector so a rebuild reuses its allocation.

use crate::snake::Snake;
use crate::types::{Cell, Point, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the standard 80x25 size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub fn with_size(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; (width as usize) * (height as usize)],
        }
    }

    /// Build a board holding `snake` and `food`.
    pub fn from_parts(width: i32, height: i32, snake: &Snake, food: Point) -> Self {
        let mut board = Self::with_size(width, height);
        board.rebuild(snake, food);
        board
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    fn stamp(&mut self, p: Point, cell: Cell) {
        if let Some(idx) = self.index(p.x, p.y) {
            self.cells[idx] = cell;
        }
    }

    /// Check if position holds a snake segment
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_snake)
    }

    /// Recompute every cell: clear, stamp the snake (head first), then the food.
    ///
    /// Out-of-bounds coordinates are skipped.
    pub fn rebuild(&mut self, snake: &Snake, food: Point) {
        self.cells.fill(Cell::Empty);
        for (i, p) in snake.segments().enumerate() {
            let cell = if i == 0 { Cell::Head } else { Cell::Body };
            self.stamp(p, cell);
        }
        self.stamp(food, Cell::Food);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count cells of a given kind
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Row `y` as glyphs, or `None` if out of range
    pub fn row_string(&self, y: i32) -> Option<String> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        let end = start + self.width as usize;
        Some(self.cells[start..end].iter().map(|c| c.glyph()).collect())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.width(), 80);
        assert_eq!(board.height(), 25);
        assert_eq!(board.cells().len(), 2000);
        assert_eq!(board.count(Cell::Empty), 2000);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(80, 0), None);
        assert_eq!(board.get(0, 25), None);
    }

    #[test]
    fn test_rebuild_stamps_head_body_food() {
        let snake = Snake::new(Point::new(10, 12), Direction::Right, 3, 100);
        let board = Board::from_parts(80, 25, &snake, Point::new(17, 2));

        assert_eq!(board.get(10, 12), Some(Cell::Head));
        assert_eq!(board.get(9, 12), Some(Cell::Body));
        assert_eq!(board.get(8, 12), Some(Cell::Body));
        assert_eq!(board.get(17, 2), Some(Cell::Food));
        assert_eq!(board.count(Cell::Head), 1);
        assert_eq!(board.count(Cell::Body), 2);
        assert!(board.is_occupied(9, 12));
        assert!(!board.is_occupied(17, 2));
    }

    #[test]
    fn test_rebuild_clears_previous_frame() {
        let mut board = Board::new();
        let snake = Snake::new(Point::new(10, 12), Direction::Right, 3, 100);
        board.rebuild(&snake, Point::new(17, 2));

        let moved = Snake::new(Point::new(40, 5), Direction::Down, 2, 100);
        board.rebuild(&moved, Point::new(0, 0));

        assert_eq!(board.get(10, 12), Some(Cell::Empty));
        assert_eq!(board.get(17, 2), Some(Cell::Empty));
        assert_eq!(board.get(40, 5), Some(Cell::Head));
        assert_eq!(board.get(40, 4), Some(Cell::Body));
        assert_eq!(board.count(Cell::Empty), 2000 - 3);
    }

    #[test]
    fn test_food_is_stamped_over_body() {
        let snake = Snake::new(Point::new(10, 12), Direction::Right, 3, 100);
        let board = Board::from_parts(80, 25, &snake, Point::new(9, 12));
        assert_eq!(board.get(9, 12), Some(Cell::Food));
    }

    #[test]
    fn test_row_string_uses_glyphs() {
        let snake = Snake::new(Point::new(2, 0), Direction::Right, 2, 10);
        let board = Board::from_parts(5, 2, &snake, Point::new(4, 0));
        assert_eq!(board.row_string(0).as_deref(), Some(" oO *"));
        assert_eq!(board.row_string(1).as_deref(), Some("     "));
        assert_eq!(board.row_string(2), None);
    }
}
