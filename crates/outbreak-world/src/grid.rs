//! Spatial index mapping grid cells to the people standing on them.

use outbreak_core::Position;
use serde::{Deserialize, Serialize};

/// Dense cell-bucket index over the world grid.
///
/// Buckets hold indices into the world's agent list, never the agents
/// themselves. The index is a cache of start-of-day positions: the world
/// discards and rebuilds it once per day rather than editing it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Vec<usize>>,
}

impl Grid {
    /// Create an empty index covering the inclusive bounds
    /// [0, x_max] x [0, y_max].
    pub fn new(x_max: i32, y_max: i32) -> Self {
        let width = x_max + 1;
        let height = y_max + 1;
        Self {
            width,
            height,
            cells: vec![Vec::new(); (width * height) as usize],
        }
    }

    /// Agent indices currently recorded at the given cell.
    pub fn cell(&self, x: i32, y: i32) -> &[usize] {
        &self.cells[self.pos_to_index(x, y)]
    }

    /// Record one agent index at its position.
    pub fn insert(&mut self, pos: Position, agent_idx: usize) {
        let index = self.pos_to_index(pos.x, pos.y);
        self.cells[index].push(agent_idx);
    }

    /// Drop every entry, keeping bucket allocations for the next rebuild.
    pub fn clear(&mut self) {
        for bucket in &mut self.cells {
            bucket.clear();
        }
    }

    /// Total number of recorded agent indices across all cells.
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pos_to_index(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        (y * self.width + x) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(9, 9);
        assert!(grid.is_empty());
        assert_eq!(grid.cell(0, 0), &[] as &[usize]);
        assert_eq!(grid.cell(9, 9), &[] as &[usize]);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut grid = Grid::new(9, 9);
        grid.insert(Position::new(3, 4), 0);
        grid.insert(Position::new(3, 4), 2);
        grid.insert(Position::new(9, 0), 1);

        assert_eq!(grid.cell(3, 4), &[0, 2]);
        assert_eq!(grid.cell(9, 0), &[1]);
        assert_eq!(grid.cell(0, 0), &[] as &[usize]);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_clear_empties_every_bucket() {
        let mut grid = Grid::new(4, 4);
        for idx in 0..5 {
            grid.insert(Position::new(idx as i32, 2), idx);
        }
        assert_eq!(grid.len(), 5);

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.cell(2, 2), &[] as &[usize]);
    }
}
