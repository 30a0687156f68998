use serde::{Deserialize, Serialize};

use crate::engine::CHUNK_SIZE;

/// Per-pixel escape counts of one rendering, row-major with index
/// `x + y * resolution`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeGrid {
    resolution: usize,
    cells: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSummary {
    pub min: u32,
    pub max: u32,
    /// Cells stored as 0, i.e. points that never escaped (or escaped on
    /// exactly the last iteration).
    pub bounded: usize,
    pub escaped: usize,
}

impl EscapeGrid {
    pub fn new(resolution: usize) -> Self {
        Self::filled(resolution, 0)
    }

    pub fn filled(resolution: usize, value: u32) -> Self {
        Self {
            resolution,
            cells: vec![value; resolution * resolution],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.cells[x + y * self.resolution]
    }

    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        self.cells[x + y * self.resolution] = value;
    }

    /// Writes `value` into the whole chunk whose bottom-left pixel is
    /// `(x, y)`. The chunk must lie inside the grid.
    pub fn fill_chunk(&mut self, x: usize, y: usize, value: u32) {
        for row in y..y + CHUNK_SIZE {
            let start = x + row * self.resolution;
            self.cells[start..start + CHUNK_SIZE].fill(value);
        }
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<u32> {
        self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.resolution)
    }

    pub fn summary(&self) -> GridSummary {
        let min = self.cells.iter().copied().min().unwrap_or(0);
        let max = self.cells.iter().copied().max().unwrap_or(0);
        let bounded = self.cells.iter().filter(|&&value| value == 0).count();
        GridSummary {
            min,
            max,
            bounded,
            escaped: self.cells.len() - bounded,
        }
    }
}
