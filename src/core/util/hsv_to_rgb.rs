/// Converts hue/saturation/value to red/green/blue fractions in `[0, 1]`.
///
/// Hue is measured in turns; values of 1 or more wrap around the colour wheel.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (value, value, value);
    }

    let sector = (hue * 6.0).trunc();
    let fraction = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fraction);
    let t = value * (1.0 - saturation * (1.0 - fraction));

    match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}

/// Scales a `[0, 1]` channel to a byte, truncating rather than rounding.
#[inline]
#[must_use]
pub fn channel_to_byte(channel: f64) -> u8 {
    (255.0 * channel) as u8
}
