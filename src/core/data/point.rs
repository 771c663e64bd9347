/// A pixel position, `x` counting columns from the left and `y` rows from the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
