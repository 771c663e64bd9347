//! Ports through which controllers hand results to the outside world.

pub mod image_sink;
