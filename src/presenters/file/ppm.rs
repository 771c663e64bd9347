use std::io::{self, Write};

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as a binary PPM image.
pub fn encode_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}
