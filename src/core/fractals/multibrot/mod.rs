//! Multibrot sets: the escape-time family `z -> z^d + c`.

pub mod algorithm;
pub mod colour_mapping;
