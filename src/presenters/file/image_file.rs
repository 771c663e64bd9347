use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::controllers::ports::image_sink::{ImageSinkError, ImageSinkPort};
use crate::core::data::frame::Frame;
use crate::presenters::file::ppm::encode_ppm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFileFormat {
    /// Lossy; quality in `1..=100`.
    Jpeg { quality: u8 },
    Png,
    /// Uncompressed binary PPM, no codec involved.
    Ppm,
}

impl ImageFileFormat {
    pub const DEFAULT_JPEG_QUALITY: u8 = 75;

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg { .. } => "jpg",
            Self::Png => "png",
            Self::Ppm => "ppm",
        }
    }
}

impl Default for ImageFileFormat {
    fn default() -> Self {
        Self::Jpeg {
            quality: Self::DEFAULT_JPEG_QUALITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFileSinkError {
    InvalidJpegQuality(u8),
}

impl fmt::Display for ImageFileSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJpegQuality(quality) => {
                write!(f, "JPEG quality must be in 1..=100, got {}", quality)
            }
        }
    }
}

impl Error for ImageFileSinkError {}

/// Stores each frame as `<directory>/<prefix><index>.<ext>`, creating the
/// directory when needed. Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct ImageFileSink {
    directory: PathBuf,
    prefix: String,
    format: ImageFileFormat,
}

impl ImageFileSink {
    pub fn new(
        directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
        format: ImageFileFormat,
    ) -> Result<Self, ImageFileSinkError> {
        match format {
            ImageFileFormat::Jpeg { quality } if !(1..=100).contains(&quality) => {
                return Err(ImageFileSinkError::InvalidJpegQuality(quality));
            }
            _ => {}
        }

        Ok(Self {
            directory: directory.into(),
            prefix: prefix.into(),
            format,
        })
    }

    #[must_use]
    pub fn frame_path(&self, frame_index: u32) -> PathBuf {
        self.directory.join(format!(
            "{}{}.{}",
            self.prefix,
            frame_index,
            self.format.extension()
        ))
    }

    /// Encodes in memory first, so a frame the codec rejects leaves no file.
    fn store(&self, frame: &Frame) -> Result<(), Box<dyn Error + Send + Sync>> {
        let bytes = encode_frame(self.format, frame)?;

        fs::create_dir_all(&self.directory)?;
        fs::write(self.frame_path(frame.index), bytes)?;
        Ok(())
    }
}

fn encode_frame(format: ImageFileFormat, frame: &Frame) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
    let buffer = &frame.pixel_buffer;
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();
    let mut bytes = Vec::with_capacity(buffer.buffer_size());

    match format {
        ImageFileFormat::Jpeg { quality } => JpegEncoder::new_with_quality(&mut bytes, quality)
            .write_image(buffer.buffer(), width, height, ExtendedColorType::Rgb8)?,
        ImageFileFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(buffer.buffer(), width, height, ExtendedColorType::Rgb8)?
        }
        ImageFileFormat::Ppm => encode_ppm(&mut bytes, buffer)?,
    }

    Ok(bytes)
}

impl ImageSinkPort for ImageFileSink {
    fn write_frame(&self, frame: Frame) -> Result<(), ImageSinkError> {
        self.store(&frame)
            .map_err(|err| ImageSinkError::new(frame.index, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::pixel_rect::PixelRect;

    fn frame(index: u32) -> Frame {
        let pixel_rect = PixelRect::try_from_size(2, 1).unwrap();

        Frame {
            index,
            pixel_buffer: PixelBuffer::from_data(pixel_rect, vec![255, 0, 0, 255, 6, 0]).unwrap(),
        }
    }

    fn wide_frame(index: u32, width: u32) -> Frame {
        let pixel_rect = PixelRect::try_from_size(width, 1).unwrap();

        Frame {
            index,
            pixel_buffer: PixelBuffer::from_data(pixel_rect, vec![0; width as usize * 3]).unwrap(),
        }
    }

    #[test]
    fn default_is_jpeg_quality_75() {
        assert_eq!(ImageFileFormat::default(), ImageFileFormat::Jpeg { quality: 75 });
    }

    #[test]
    fn frame_path_uses_prefix_and_index() {
        let sink = ImageFileSink::new("mandelbrot_img", "m_", ImageFileFormat::default()).unwrap();

        assert_eq!(sink.frame_path(1), PathBuf::from("mandelbrot_img/m_1.jpg"));
        assert_eq!(sink.frame_path(1000), PathBuf::from("mandelbrot_img/m_1000.jpg"));
    }

    #[test]
    fn jpeg_quality_out_of_range_is_rejected() {
        for quality in [0, 101] {
            let result = ImageFileSink::new("out", "m_", ImageFileFormat::Jpeg { quality });

            assert_eq!(result.unwrap_err(), ImageFileSinkError::InvalidJpegQuality(quality));
        }
    }

    #[test]
    fn png_round_trips_exact_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageFileSink::new(dir.path().join("frames"), "m_", ImageFileFormat::Png).unwrap();

        sink.write_frame(frame(3)).unwrap();

        let decoded = image::open(dir.path().join("frames/m_3.png")).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.into_raw(), vec![255, 0, 0, 255, 6, 0]);
    }

    #[test]
    fn jpeg_file_has_frame_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageFileSink::new(dir.path(), "m_", ImageFileFormat::default()).unwrap();

        sink.write_frame(frame(1)).unwrap();

        let decoded = image::open(dir.path().join("m_1.jpg")).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 1));
    }

    #[test]
    fn ppm_file_holds_header_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageFileSink::new(dir.path(), "frame", ImageFileFormat::Ppm).unwrap();

        sink.write_frame(frame(7)).unwrap();

        let bytes = fs::read(dir.path().join("frame7.ppm")).unwrap();
        assert!(bytes.starts_with(b"P6\n2 1\n255\n"));
        assert!(bytes.ends_with(&[255, 0, 0, 255, 6, 0]));
    }

    #[test]
    fn unwritable_directory_reports_the_frame() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"").unwrap();
        let sink = ImageFileSink::new(&blocker, "m_", ImageFileFormat::Png).unwrap();

        let err = sink.write_frame(frame(5)).unwrap_err();

        assert_eq!(err.frame_index(), 5);
        assert!(err.to_string().starts_with("failed to write frame 5: "));
    }

    #[test]
    fn frame_too_wide_for_jpeg_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageFileSink::new(dir.path(), "m_", ImageFileFormat::default()).unwrap();

        let err = sink.write_frame(wide_frame(9, 70_000)).unwrap_err();

        assert_eq!(err.frame_index(), 9);
        assert!(!dir.path().join("m_9.jpg").exists());
    }

    #[test]
    fn wide_frame_is_fine_as_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageFileSink::new(dir.path(), "m_", ImageFileFormat::Ppm).unwrap();

        sink.write_frame(wide_frame(9, 70_000)).unwrap();

        let bytes = fs::read(dir.path().join("m_9.ppm")).unwrap();
        assert_eq!(bytes.len(), b"P6\n70000 1\n255\n".len() + 70_000 * 3);
    }
}
