use crate::core::data::colour::Colour;
use crate::core::engine::{FrameEngine, FrameParams, render_pixel};

/// Sequential CPU strategy: a plain double loop over every pixel. This is
/// the semantic baseline the accelerated strategy is checked against.
#[derive(Debug, Default)]
pub struct ReferenceEngine;

impl FrameEngine for ReferenceEngine {
    fn step(&self, params: &FrameParams<'_>, output: &mut [Colour]) {
        let width = params.width as usize;

        for y in 0..params.height {
            for x in 0..params.width {
                output[y as usize * width + x as usize] = render_pixel(params, x, y);
            }
        }
    }
}
