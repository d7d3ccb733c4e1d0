pub mod colour_table;
pub mod data;
pub mod engine;
pub mod escape_time;
pub mod session;
pub mod viewport;
