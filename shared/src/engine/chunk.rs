use log::trace;

use super::{ChunkRenderer, CHUNK_SIZE};

/// Offsets along each chunk edge that are compared against the corner.
const SAMPLE_OFFSETS: [usize; 4] = [2, 4, 6, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// Every sampled border cell matched the corner, the chunk was filled.
    Filled(u32),
    /// The border disagreed, every cell was evaluated.
    Traced,
}

impl ChunkRenderer {
    /// Renders the chunk whose bottom-left pixel is `(x, y)`.
    ///
    /// The corner and the even-offset cells of all four edges must already
    /// hold their escape values, as left by gridline seeding. When all
    /// sixteen samples equal the corner the chunk is assumed uniform and
    /// filled without evaluating its interior. A chunk hiding detail that
    /// none of the samples hit is filled all the same.
    pub fn process_chunk(&mut self, x: usize, y: usize) -> ChunkOutcome {
        let corner = self.grid.get(x, y);

        let uniform = SAMPLE_OFFSETS.iter().all(|&k| {
            self.grid.get(x + k, y) == corner
                && self.grid.get(x, y + k) == corner
                && self.grid.get(x + k, y + CHUNK_SIZE) == corner
                && self.grid.get(x + CHUNK_SIZE, y + k) == corner
        });

        if uniform {
            trace!("Chunk ({}, {}) filled with {}", x, y, corner);
            self.grid.fill_chunk(x, y, corner);
            self.stats.filled_chunks += 1;
            return ChunkOutcome::Filled(corner);
        }

        for k in (1..CHUNK_SIZE).step_by(2) {
            self.evaluate(x + k, y);
            self.evaluate(x, y + k);
            self.evaluate(x + CHUNK_SIZE, y + k);
            self.evaluate(x + k, y + CHUNK_SIZE);
        }
        for i in 1..CHUNK_SIZE {
            for j in 1..CHUNK_SIZE {
                self.evaluate(x + j, y + i);
            }
        }
        trace!("Chunk ({}, {}) traced", x, y);
        self.stats.traced_chunks += 1;
        ChunkOutcome::Traced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::evaluator::EscapeContext,
        models::{point::Point, view::ViewParameters},
    };

    fn renderer(view: ViewParameters) -> ChunkRenderer {
        ChunkRenderer::new(&view).unwrap()
    }

    /// Writes `value` into the corner and every cell the homogeneity test
    /// reads for the chunk at `(x, y)`.
    fn plant_samples(renderer: &mut ChunkRenderer, x: usize, y: usize, value: u32) {
        renderer.grid.set(x, y, value);
        for k in SAMPLE_OFFSETS {
            renderer.grid.set(x + k, y, value);
            renderer.grid.set(x, y + k, value);
            renderer.grid.set(x + k, y + CHUNK_SIZE, value);
            renderer.grid.set(x + CHUNK_SIZE, y + k, value);
        }
    }

    #[test]
    fn matching_samples_fill_the_chunk() {
        let view = ViewParameters::new(Point::new(0.0, 0.0), 4.0, 30, 100);
        let mut renderer = renderer(view);
        plant_samples(&mut renderer, 10, 10, 7);

        assert_eq!(renderer.process_chunk(10, 10), ChunkOutcome::Filled(7));
        for y in 10..20 {
            for x in 10..20 {
                assert_eq!(renderer.grid.get(x, y), 7);
            }
        }
        assert_eq!(renderer.stats.filled_chunks, 1);
        assert_eq!(renderer.stats.evaluations, 0);
    }

    #[test]
    fn fill_ignores_interior_detail_the_samples_miss() {
        // The real escape values around c = -2 - 2i are all 1, the planted
        // samples claim 42: the chunk is filled with 42 regardless.
        let view = ViewParameters::new(Point::new(0.0, 0.0), 4.0, 100, 100);
        let context = EscapeContext::new(&view).unwrap();
        let mut renderer = renderer(view);
        plant_samples(&mut renderer, 0, 0, 42);

        assert_eq!(renderer.process_chunk(0, 0), ChunkOutcome::Filled(42));
        for y in 1..CHUNK_SIZE {
            for x in 1..CHUNK_SIZE {
                assert_ne!(context.escape_time(x, y), 42);
                assert_eq!(renderer.grid.get(x, y), 42);
            }
        }
    }

    #[test]
    fn single_mismatch_traces_the_chunk() {
        let view = ViewParameters::new(Point::new(-0.5, 0.0), 3.0, 40, 100);
        let context = EscapeContext::new(&view).unwrap();
        let mut renderer = renderer(view);
        plant_samples(&mut renderer, 10, 10, 3);
        renderer.grid.set(20, 16, 4);

        assert_eq!(renderer.process_chunk(10, 10), ChunkOutcome::Traced);
        for y in 11..20 {
            for x in 11..20 {
                assert_eq!(renderer.grid.get(x, y), context.escape_time(x, y));
            }
        }
        for k in (1..CHUNK_SIZE).step_by(2) {
            assert_eq!(renderer.grid.get(10 + k, 10), context.escape_time(10 + k, 10));
            assert_eq!(renderer.grid.get(10, 10 + k), context.escape_time(10, 10 + k));
            assert_eq!(renderer.grid.get(20, 10 + k), context.escape_time(20, 10 + k));
            assert_eq!(renderer.grid.get(10 + k, 20), context.escape_time(10 + k, 20));
        }
        // planted corner is left alone
        assert_eq!(renderer.grid.get(10, 10), 3);
        assert_eq!(renderer.stats.traced_chunks, 1);
        assert_eq!(renderer.stats.evaluations, 20 + 81);
    }

    #[test]
    fn edge_cells_zero_and_ten_are_not_sampled() {
        let view = ViewParameters::new(Point::new(0.0, 0.0), 4.0, 30, 100);
        let mut renderer = renderer(view);
        plant_samples(&mut renderer, 0, 0, 5);
        // far corner and odd offsets are outside the sample
        renderer.grid.set(10, 10, 6);
        renderer.grid.set(3, 0, 6);
        renderer.grid.set(0, 9, 6);

        assert_eq!(renderer.process_chunk(0, 0), ChunkOutcome::Filled(5));
        assert_eq!(renderer.grid.get(3, 0), 5);
        assert_eq!(renderer.grid.get(0, 9), 5);
        assert_eq!(renderer.grid.get(10, 10), 6);
    }
}
