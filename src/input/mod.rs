//! Input handling for the explorer.
//!
//! Raw events are translated into an explicit [`NavigationInput`] struct
//! which the event loop applies to the session between frames.
//!
//! [`NavigationInput`]: navigation::NavigationInput

pub mod navigation;

#[cfg(feature = "gui")]
pub mod keys;
