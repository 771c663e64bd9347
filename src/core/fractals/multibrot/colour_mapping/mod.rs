pub mod hsv_colour_map;
pub mod kinds;
