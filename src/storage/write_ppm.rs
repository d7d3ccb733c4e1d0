use std::io::Write;
use std::path::Path;

use crate::core::data::frame_buffer::FrameBuffer;

/// Writes a rendered frame as binary PPM. The format carries no alpha
/// channel, so interior pixels come out as plain black.
pub fn write_ppm(buffer: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;

    let mut bytes = Vec::with_capacity(buffer.len() * 3);
    for colour in buffer.pixels() {
        bytes.extend_from_slice(&[colour.red(), colour.green(), colour.blue()]);
    }
    file.write_all(&bytes)?;

    Ok(())
}
