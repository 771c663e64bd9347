use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::controllers::zoom_sequence::sequence_config::{SequenceConfig, ZoomPreset};
use crate::controllers::zoom_sequence::zoom_plan::{FrameScheduling, SinkFailurePolicy};
use crate::core::actions::render_frame::render_frame::RenderStrategy;
use crate::core::data::complex::Complex;
use crate::core::fractals::multibrot::colour_mapping::kinds::MultibrotColourMapKinds;
use crate::presenters::file::image_file::ImageFileFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    Seahorse,
    Spiral,
}

impl From<PresetArg> for ZoomPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Seahorse => Self::Seahorse,
            PresetArg::Spiral => Self::Spiral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColourSchemeArg {
    Rainbow,
    Inverted,
}

impl From<ColourSchemeArg> for MultibrotColourMapKinds {
    fn from(scheme: ColourSchemeArg) -> Self {
        match scheme {
            ColourSchemeArg::Rainbow => Self::Rainbow,
            ColourSchemeArg::Inverted => Self::Inverted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Jpeg,
    Png,
    Ppm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SinkErrorArg {
    Abort,
    Skip,
}

impl From<SinkErrorArg> for SinkFailurePolicy {
    fn from(policy: SinkErrorArg) -> Self {
        match policy {
            SinkErrorArg::Abort => Self::Abort,
            SinkErrorArg::Skip => Self::Skip,
        }
    }
}

/// Render a sequence of frames zooming into a point of a multibrot set.
#[derive(Debug, Clone, Parser)]
#[command(name = "multibrot_zoom", version)]
pub struct ZoomArgs {
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    #[arg(long, default_value_t = 1000)]
    pub height: u32,

    /// Iteration cap per pixel
    #[arg(long, default_value_t = 2000)]
    pub iterations: u32,

    /// Scale of the first frame; the view spans 2.4 * scale on each axis
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Real part of the zoom centre, overrides the preset
    #[arg(long, allow_negative_numbers = true)]
    pub center_re: Option<f64>,

    /// Imaginary part of the zoom centre, overrides the preset
    #[arg(long, allow_negative_numbers = true)]
    pub center_im: Option<f64>,

    #[arg(long, value_enum, default_value_t = PresetArg::Seahorse)]
    pub preset: PresetArg,

    #[arg(long, default_value_t = 1.0)]
    pub colour_variation: f64,

    #[arg(long, value_enum, default_value_t = ColourSchemeArg::Rainbow)]
    pub colour_scheme: ColourSchemeArg,

    /// Exponent d in z -> z^d + c
    #[arg(long, default_value_t = 2)]
    pub degree: u32,

    /// Index of the last frame
    #[arg(long, default_value_t = 1000)]
    pub frames: u32,

    /// First frame to render, for resuming an interrupted sequence
    #[arg(long, default_value_t = 1)]
    pub start_frame: u32,

    /// Scale of frame i is scale * decay_rate^(1 - i)
    #[arg(long, default_value_t = 1.03)]
    pub decay_rate: f64,

    #[arg(long, default_value = "mandelbrot_img")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = "m_")]
    pub prefix: String,

    #[arg(long, value_enum, default_value_t = FormatArg::Jpeg)]
    pub format: FormatArg,

    #[arg(long, default_value_t = ImageFileFormat::DEFAULT_JPEG_QUALITY)]
    pub jpeg_quality: u8,

    /// Render each frame on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Render several frames at once
    #[arg(long)]
    pub parallel_frames: bool,

    #[arg(long, value_enum, default_value_t = SinkErrorArg::Abort)]
    pub on_sink_error: SinkErrorArg,

    /// Stop after this many seconds, keeping the frames already written
    #[arg(long)]
    pub time_limit_secs: Option<u64>,

    /// No progress output
    #[arg(long, short)]
    pub quiet: bool,
}

impl ZoomArgs {
    #[must_use]
    pub fn center(&self) -> Complex {
        let preset = ZoomPreset::from(self.preset).center();

        Complex::new(
            self.center_re.unwrap_or(preset.real),
            self.center_im.unwrap_or(preset.imag),
        )
    }

    #[must_use]
    pub fn sequence_config(&self) -> SequenceConfig {
        SequenceConfig {
            width: self.width,
            height: self.height,
            max_iterations: self.iterations,
            scale: self.scale,
            center: self.center(),
            colour_variation: self.colour_variation,
            colour_scheme: self.colour_scheme.into(),
            degree: self.degree,
            frame_count: self.frames,
            start_frame: self.start_frame,
            decay_rate: self.decay_rate,
            strategy: if self.serial {
                RenderStrategy::Serial
            } else {
                RenderStrategy::ParallelRows
            },
            scheduling: if self.parallel_frames {
                FrameScheduling::Parallel
            } else {
                FrameScheduling::Sequential
            },
            on_sink_error: self.on_sink_error.into(),
        }
    }

    #[must_use]
    pub fn image_format(&self) -> ImageFileFormat {
        match self.format {
            FormatArg::Jpeg => ImageFileFormat::Jpeg {
                quality: self.jpeg_quality,
            },
            FormatArg::Png => ImageFileFormat::Png,
            FormatArg::Ppm => ImageFileFormat::Ppm,
        }
    }
}
