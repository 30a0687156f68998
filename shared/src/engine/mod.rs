pub mod chunk;
pub mod evaluator;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::result::FractalResult,
    models::{grid::EscapeGrid, view::ViewParameters},
};

use self::evaluator::EscapeContext;

/// Side of the square blocks the grid is cut into.
pub const CHUNK_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    pub filled_chunks: usize,
    pub traced_chunks: usize,
    /// Calls to the escape-time loop, including recomputed pixels.
    pub evaluations: usize,
}

/// One rendering in progress: an immutable context and the grid it writes.
#[derive(Debug)]
pub struct ChunkRenderer {
    context: EscapeContext,
    grid: EscapeGrid,
    stats: RenderStats,
}

/// Renders `view` with the chunk heuristic.
pub fn render(view: &ViewParameters) -> FractalResult<EscapeGrid> {
    render_with_stats(view).map(|(grid, _)| grid)
}

pub fn render_with_stats(view: &ViewParameters) -> FractalResult<(EscapeGrid, RenderStats)> {
    let mut renderer = ChunkRenderer::new(view)?;
    info!(
        "Rendering {}x{} pixels around ({}, {}), size {}, {} iterations",
        view.resolution, view.resolution, view.center.x, view.center.y, view.size, view.max_iterations
    );
    renderer.seed_gridlines();
    renderer.sweep_chunks();
    renderer.evaluate_border_strip();
    let (grid, stats) = renderer.finish();
    info!(
        "Rendering done: {} chunks filled, {} traced, {} evaluations",
        stats.filled_chunks, stats.traced_chunks, stats.evaluations
    );
    Ok((grid, stats))
}

/// Renders `view` one pixel at a time, without any shortcut.
pub fn brute_force(view: &ViewParameters) -> FractalResult<EscapeGrid> {
    let context = EscapeContext::new(view)?;
    let resolution = context.resolution();
    let mut grid = EscapeGrid::new(resolution);
    for y in 0..resolution {
        for x in 0..resolution {
            grid.set(x, y, context.escape_time(x, y));
        }
    }
    Ok(grid)
}

impl ChunkRenderer {
    pub fn new(view: &ViewParameters) -> FractalResult<Self> {
        let context = EscapeContext::new(view)?;
        Ok(Self::with_grid(context, EscapeGrid::new(context.resolution())))
    }

    fn with_grid(context: EscapeContext, grid: EscapeGrid) -> Self {
        Self {
            context,
            grid,
            stats: RenderStats::default(),
        }
    }

    pub fn context(&self) -> &EscapeContext {
        &self.context
    }

    pub fn grid(&self) -> &EscapeGrid {
        &self.grid
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    fn chunks(&self) -> usize {
        self.context.resolution() / CHUNK_SIZE
    }

    /// Computes the escape value of pixel `(x, y)` and stores it.
    pub fn evaluate(&mut self, x: usize, y: usize) -> u32 {
        let value = self.context.escape_time(x, y);
        self.grid.set(x, y, value);
        self.stats.evaluations += 1;
        value
    }

    /// Evaluates every other pixel along the rows and columns that are a
    /// multiple of the chunk size, giving each chunk its corner and
    /// sampled edges.
    pub fn seed_gridlines(&mut self) {
        let resolution = self.context.resolution();
        for i in (0..resolution).step_by(CHUNK_SIZE) {
            for j in (0..resolution).step_by(2) {
                self.evaluate(i, j);
                // intersections were just done
                if j % CHUNK_SIZE != 0 {
                    self.evaluate(j, i);
                }
            }
        }
        debug!("Gridlines seeded: {} evaluations", self.stats.evaluations);
    }

    /// Processes every chunk except the last row and column, row by row.
    pub fn sweep_chunks(&mut self) {
        let chunks = self.chunks();
        for i in 0..chunks.saturating_sub(1) {
            for j in 0..chunks.saturating_sub(1) {
                self.process_chunk(j * CHUNK_SIZE, i * CHUNK_SIZE);
            }
        }
        debug!(
            "Chunk sweep done: {} filled, {} traced",
            self.stats.filled_chunks, self.stats.traced_chunks
        );
    }

    /// First row/column not covered by the chunk sweep.
    ///
    /// Equals `resolution - CHUNK_SIZE` when the resolution is a multiple of
    /// the chunk size, so the strip redoes the last chunk row and column.
    /// Otherwise the strip also takes in the remainder pixels.
    pub fn border_start(&self) -> usize {
        self.chunks().saturating_sub(1) * CHUNK_SIZE
    }

    /// Evaluates every pixel of the trailing rows and columns.
    pub fn evaluate_border_strip(&mut self) {
        let resolution = self.context.resolution();
        for i in self.border_start()..resolution {
            for j in 0..resolution {
                self.evaluate(i, j);
                self.evaluate(j, i);
            }
        }
    }

    pub fn finish(self) -> (EscapeGrid, RenderStats) {
        (self.grid, self.stats)
    }
}
