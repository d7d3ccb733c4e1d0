use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::core::data::colour::Colour;
use crate::core::engine::{FrameEngine, FrameParams, render_pixel};

/// Parallel strategy backed by a private rayon thread pool.
///
/// Rows of the output buffer are disjoint, so they are farmed out to the
/// pool as independent slices; pixels share no mutable state and the work
/// completes before `step` returns. The pool is this engine's private
/// resource: nothing else holds it, and dropping the engine shuts it down.
///
/// Per-pixel work is byte-identical to [`ReferenceEngine`]: both go through
/// `render_pixel`, so parallelism never changes the numeric outcome.
///
/// [`ReferenceEngine`]: crate::core::engine::ReferenceEngine
#[derive(Debug)]
pub struct AcceleratedEngine {
    pool: ThreadPool,
}

impl AcceleratedEngine {
    /// Builds the backend thread pool. Fails if the pool cannot be created,
    /// leaving no acceleration state behind; the caller decides whether to
    /// fall back to the reference strategy.
    pub fn new() -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new().build()?;
        Ok(Self { pool })
    }
}

impl FrameEngine for AcceleratedEngine {
    fn step(&self, params: &FrameParams<'_>, output: &mut [Colour]) {
        let width = params.width as usize;

        self.pool.install(|| {
            output
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = render_pixel(params, x as u32, y as u32);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_table::{COLOUR_TABLE_SIZE, build_colour_table};
    use crate::core::data::view_state::ViewState;
    use crate::core::engine::ReferenceEngine;

    fn params_for<'a>(
        view: &'a ViewState,
        table: &'a crate::core::colour_table::ColourTable,
        width: u32,
        height: u32,
        max_iters: u32,
    ) -> FrameParams<'a> {
        FrameParams { view, max_iters, table, width, height }
    }

    #[test]
    fn test_accelerated_matches_reference_pixel_for_pixel() {
        let view = ViewState::new(64, 48);
        let table = build_colour_table(COLOUR_TABLE_SIZE);
        let params = params_for(&view, &table, 64, 48, 128);

        let engine = AcceleratedEngine::new().unwrap();
        let mut accelerated = vec![Colour::INTERIOR; 64 * 48];
        let mut reference = vec![Colour::INTERIOR; 64 * 48];

        engine.step(&params, &mut accelerated);
        ReferenceEngine.step(&params, &mut reference);

        assert_eq!(accelerated, reference);
    }

    #[test]
    fn test_accelerated_matches_reference_when_zoomed_in() {
        let mut view = ViewState::new(32, 32);
        view.zoom = 0.01;
        view.center_x = -0.7436;
        view.center_y = 0.1318;
        let table = build_colour_table(COLOUR_TABLE_SIZE);
        let params = params_for(&view, &table, 32, 32, 600);

        let engine = AcceleratedEngine::new().unwrap();
        let mut accelerated = vec![Colour::INTERIOR; 32 * 32];
        let mut reference = vec![Colour::INTERIOR; 32 * 32];

        engine.step(&params, &mut accelerated);
        ReferenceEngine.step(&params, &mut reference);

        assert_eq!(accelerated, reference);
    }

    #[test]
    fn test_single_pixel_frame() {
        let view = ViewState::new(1, 1);
        let table = build_colour_table(COLOUR_TABLE_SIZE);
        let params = params_for(&view, &table, 1, 1, 16);

        let engine = AcceleratedEngine::new().unwrap();
        let mut accelerated = vec![Colour::from_channels(9, 9, 9, 9); 1];
        let mut reference = vec![Colour::from_channels(9, 9, 9, 9); 1];

        engine.step(&params, &mut accelerated);
        ReferenceEngine.step(&params, &mut reference);

        assert_eq!(accelerated, reference);
    }
}
