mod core;
#[cfg(feature = "gui")]
mod gui;
mod input;
mod storage;

pub use crate::core::colour_table::{COLOUR_TABLE_SIZE, ColourTable, build_colour_table};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::iteration_budget::{DEFAULT_ITERATION_BUDGET, IterationBudget};
pub use crate::core::data::view_state::ViewState;
pub use crate::core::engine::{
    AcceleratedEngine, FrameEngine, FrameParams, ReferenceEngine, render_pixel,
};
pub use crate::core::escape_time::{Escape, evaluate};
pub use crate::core::session::{AttachAcceleratorError, Backend, Fallback, Session};
pub use crate::core::viewport::pixel_to_complex;
pub use crate::input::navigation::NavigationInput;
pub use crate::storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use crate::gui::run_gui;
