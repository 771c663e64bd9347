use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use crate::controllers::zoom_sequence::zoom_plan::{FrameScheduling, SinkFailurePolicy, ZoomPlan};
use crate::core::actions::render_frame::render_frame::RenderStrategy;
use crate::core::data::complex::Complex;
use crate::core::data::frame_params::FrameParams;
use crate::core::fractals::multibrot::colour_mapping::kinds::MultibrotColourMapKinds;

/// Named zoom targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPreset {
    #[default]
    Seahorse,
    Spiral,
}

impl ZoomPreset {
    #[must_use]
    pub const fn center(self) -> Complex {
        match self {
            Self::Seahorse => Complex {
                real: -0.744881555193959,
                imag: 0.100107514886258,
            },
            Self::Spiral => Complex {
                real: -1.4790645,
                imag: 0.0107495,
            },
        }
    }
}

/// Unvalidated sequence settings, as collected from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub scale: f64,
    pub center: Complex,
    pub colour_variation: f64,
    pub colour_scheme: MultibrotColourMapKinds,
    pub degree: u32,
    pub frame_count: u32,
    pub start_frame: u32,
    pub decay_rate: f64,
    pub strategy: RenderStrategy,
    pub scheduling: FrameScheduling,
    pub on_sink_error: SinkFailurePolicy,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            max_iterations: 2000,
            scale: 1.0,
            center: ZoomPreset::Seahorse.center(),
            colour_variation: 1.0,
            colour_scheme: MultibrotColourMapKinds::Rainbow,
            degree: 2,
            frame_count: 1000,
            start_frame: 1,
            decay_rate: 1.03,
            strategy: RenderStrategy::default(),
            scheduling: FrameScheduling::default(),
            on_sink_error: SinkFailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroDimension { width: u32, height: u32 },
    ZeroIterations,
    ZeroDegree,
    InvalidScale(f64),
    InvalidCenter(Complex),
    InvalidColourVariation(f64),
    InvalidDecayRate(f64),
    /// Frames are numbered from 1.
    ZeroStartFrame,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "image size must be non-zero, got {}x{}", width, height)
            }
            Self::ZeroIterations => write!(f, "max iterations must be at least 1"),
            Self::ZeroDegree => write!(f, "degree must be at least 1"),
            Self::InvalidScale(scale) => {
                write!(f, "scale must be finite and positive, got {}", scale)
            }
            Self::InvalidCenter(center) => write!(
                f,
                "center must be finite, got ({}, {})",
                center.real, center.imag
            ),
            Self::InvalidColourVariation(cv) => {
                write!(f, "colour variation must be finite and non-negative, got {}", cv)
            }
            Self::InvalidDecayRate(rate) => {
                write!(f, "decay rate must be finite and positive, got {}", rate)
            }
            Self::ZeroStartFrame => write!(f, "start frame must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

impl SequenceConfig {
    /// Checks every precondition the renderer relies on and freezes the
    /// settings into a plan. A `start_frame` past `frame_count` (or a
    /// `frame_count` of 0) gives a plan with no frames.
    pub fn validate(&self) -> Result<ZoomPlan, ConfigError> {
        let (Some(width), Some(height)) = (NonZeroU32::new(self.width), NonZeroU32::new(self.height))
        else {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        };
        let max_iterations = NonZeroU32::new(self.max_iterations).ok_or(ConfigError::ZeroIterations)?;
        let degree = NonZeroU32::new(self.degree).ok_or(ConfigError::ZeroDegree)?;

        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if !self.center.is_finite() {
            return Err(ConfigError::InvalidCenter(self.center));
        }
        if !(self.colour_variation.is_finite() && self.colour_variation >= 0.0) {
            return Err(ConfigError::InvalidColourVariation(self.colour_variation));
        }
        if !(self.decay_rate.is_finite() && self.decay_rate > 0.0) {
            return Err(ConfigError::InvalidDecayRate(self.decay_rate));
        }
        if self.start_frame == 0 {
            return Err(ConfigError::ZeroStartFrame);
        }

        Ok(ZoomPlan {
            base: FrameParams {
                width,
                height,
                max_iterations,
                scale: self.scale,
                center: self.center,
                colour_variation: self.colour_variation,
                colour_scheme: self.colour_scheme,
                degree,
                frame_index: self.start_frame,
            },
            frame_count: self.frame_count,
            start_frame: self.start_frame,
            decay_rate: self.decay_rate,
            strategy: self.strategy,
            scheduling: self.scheduling,
            on_sink_error: self.on_sink_error,
        })
    }
}
