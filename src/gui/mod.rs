//! Live viewport using winit for window management and pixels for
//! framebuffer presentation.

mod app;

pub use app::run_gui;
