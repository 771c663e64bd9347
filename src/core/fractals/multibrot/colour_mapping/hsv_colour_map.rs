use std::convert::Infallible;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::multibrot::colour_mapping::kinds::MultibrotColourMapKinds;
use crate::core::util::hsv_to_rgb::{channel_to_byte, hsv_to_rgb};

/// Hue cycles every 256 escape counts but is normalised by 255.
const HUE_PERIOD: u32 = 256;
const HUE_DIVISOR: f64 = 255.0;
const INVERTED_HUE_OFFSET: f64 = 0.1;

fn rainbow_hue(iterations: u32, colour_variation: f64) -> f64 {
    (colour_variation * (iterations % HUE_PERIOD) as f64) / HUE_DIVISOR
}

/// Maps an escape result to a colour: hue from the escape count, full
/// saturation, and zero value (black) for points in the set.
#[must_use]
pub fn colorize(
    result: EscapeResult,
    colour_variation: f64,
    kind: MultibrotColourMapKinds,
) -> Colour {
    let rainbow = rainbow_hue(result.iterations, colour_variation);
    let hue = match kind {
        MultibrotColourMapKinds::Rainbow => rainbow,
        MultibrotColourMapKinds::Inverted => 1.0 / (rainbow + INVERTED_HUE_OFFSET),
    };
    let value = if result.in_set { 0.0 } else { 1.0 };

    let (r, g, b) = hsv_to_rgb(hue, 1.0, value);

    Colour {
        r: channel_to_byte(r),
        g: channel_to_byte(g),
        b: channel_to_byte(b),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultibrotHsvColourMap {
    colour_variation: f64,
    kind: MultibrotColourMapKinds,
}

impl ColourMap<EscapeResult> for MultibrotHsvColourMap {
    type Failure = Infallible;

    fn map(&self, value: EscapeResult) -> Result<Colour, Self::Failure> {
        Ok(colorize(value, self.colour_variation, self.kind))
    }
}

impl MultibrotHsvColourMap {
    #[must_use]
    pub fn new(colour_variation: f64, kind: MultibrotColourMapKinds) -> Self {
        Self {
            colour_variation,
            kind,
        }
    }
}
