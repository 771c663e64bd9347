/// Outcome of iterating one point: the pass at which it escaped, or the last
/// pass index with `in_set` raised when it never did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub in_set: bool,
}
