use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;

/// Maps a pixel coordinate to its point on the complex plane.
///
/// Both axes are scaled by `zoom` and divided by the *width*: the height
/// only participates through the aspect ratio on the imaginary axis, which
/// keeps non-square windows from distorting the set.
#[must_use]
pub fn pixel_to_complex(x: u32, y: u32, width: u32, height: u32, view: &ViewState) -> Complex {
    let w = width as f32;
    let h = height as f32;

    Complex {
        real: view.center_x + ((x as f32 - w / 2.0) * view.zoom) / w,
        imag: view.center_y - ((y as f32 - h / 2.0) * view.zoom * view.aspect()) / w,
    }
}
