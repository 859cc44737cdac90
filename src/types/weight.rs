//! Numeric edge weights.

use std::fmt::{Debug, Display};
use std::str::FromStr;

/// A numeric edge weight.
///
/// The zero value (`Default::default()`) doubles as "no edge" in a matrix,
/// so a zero-weighted edge cannot survive a trip through one.
pub trait Weight: Copy + PartialEq + Default + Debug + Display + FromStr + 'static {
    /// Whether this weight encodes an absent edge.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Weight for i32 {}
impl Weight for i64 {}
impl Weight for u32 {}
impl Weight for u64 {}
impl Weight for f32 {}
impl Weight for f64 {}
