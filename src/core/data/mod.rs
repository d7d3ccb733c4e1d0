pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod iteration_budget;
pub mod view_state;
