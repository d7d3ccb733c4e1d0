//! Frame engines: interchangeable strategies that fill the output buffer.
//!
//! A strategy is picked when the session is created and never re-selected;
//! both implementations route every pixel through the same [`render_pixel`]
//! helper, which is what guarantees the accelerated output matches the
//! reference output exactly.

pub mod accelerated;
pub mod reference;

pub use accelerated::AcceleratedEngine;
pub use reference::ReferenceEngine;

use crate::core::colour_table::ColourTable;
use crate::core::data::colour::Colour;
use crate::core::data::view_state::ViewState;
use crate::core::escape_time::evaluate;
use crate::core::viewport::pixel_to_complex;

/// Everything a strategy needs to compute one frame. Borrowed from the
/// session for the duration of a single `step`.
#[derive(Debug, Clone, Copy)]
pub struct FrameParams<'a> {
    pub view: &'a ViewState,
    pub max_iters: u32,
    pub table: &'a ColourTable,
    pub width: u32,
    pub height: u32,
}

/// An execution strategy for one frame.
///
/// `step` must overwrite `output` entirely, every pixel on every call, with
/// no partial updates. It must not allocate per pixel. `output` is row-major
/// with exactly `width * height` entries. Any backend-private resources
/// (thread pools, device handles) belong to the engine and are released by
/// its `Drop`.
pub trait FrameEngine: std::fmt::Debug {
    fn step(&self, params: &FrameParams<'_>, output: &mut [Colour]);
}

/// Computes the colour of a single pixel: viewport transform, escape-time
/// iteration, table lookup. Shared by every strategy.
#[must_use]
pub fn render_pixel(params: &FrameParams<'_>, x: u32, y: u32) -> Colour {
    let c = pixel_to_complex(x, y, params.width, params.height, params.view);
    params.table.colour_for(evaluate(c, params.max_iters))
}
