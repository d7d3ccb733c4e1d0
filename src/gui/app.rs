//! Window loop: polls events, applies navigation, steps the session and
//! blits the frame buffer to the screen.

use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::core::data::colour::Colour;
use crate::core::session::Session;
use crate::input::keys::handle_key_event;
use crate::input::navigation::NavigationInput;

/// Copies the session's frame buffer into the pixels surface.
///
/// Alpha is forced opaque on the way out: interior pixels carry alpha 0 as
/// a background sentinel, but the screen should show them as solid black.
fn present_frame(frame: &mut [u8], pixels: &[Colour]) {
    for (cell, colour) in frame.chunks_exact_mut(4).zip(pixels) {
        let mut bytes = colour.to_rgba_bytes();
        bytes[3] = Colour::ALPHA_OPAQUE;
        cell.copy_from_slice(&bytes);
    }
}

/// Runs the live viewport over an already-created session.
///
/// Does not return until the window is closed. The session's buffer
/// dimensions decide the window size; resizing only rescales the surface,
/// the render resolution stays fixed.
pub fn run_gui(mut session: Session) {
    let width = session.buffer().width();
    let height = session.buffer().height();
    let title = format!("Mandelbrot [{}]", session.backend().label());

    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, window);
    let mut pixels =
        Pixels::new(width, height, surface_texture).expect("Failed to create pixels surface");

    let mut nav = NavigationInput::default();

    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent { ref event, window_id } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput { event: key_event, .. } => {
                            if let PhysicalKey::Code(code) = key_event.physical_key {
                                handle_key_event(&mut nav, code, key_event.state);
                            }
                        }
                        WindowEvent::Focused(false) => {
                            // Releases get lost while unfocused; drop held keys.
                            nav.reset();
                        }
                        WindowEvent::Resized(size) => {
                            if size.width > 0 && size.height > 0 {
                                pixels
                                    .resize_surface(size.width, size.height)
                                    .expect("Failed to resize surface");
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            nav.apply(&mut session);
                            session.step();

                            present_frame(pixels.frame_mut(), session.buffer().pixels());

                            if let Err(e) = pixels.render() {
                                eprintln!("Render error: {e}");
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    // Continuous rendering: navigation is applied per frame.
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_frame_forces_opaque_alpha() {
        let pixels = [Colour::INTERIOR, Colour::from_channels(1, 2, 3, 0xff)];
        let mut frame = [0u8; 8];

        present_frame(&mut frame, &pixels);

        assert_eq!(frame, [0, 0, 0, 0xff, 1, 2, 3, 0xff]);
    }

    #[test]
    fn test_present_frame_preserves_channel_order() {
        let pixels = [Colour::from_channels(0xaa, 0xbb, 0xcc, 0xff)];
        let mut frame = [0u8; 4];

        present_frame(&mut frame, &pixels);

        assert_eq!(frame, [0xaa, 0xbb, 0xcc, 0xff]);
    }
}
