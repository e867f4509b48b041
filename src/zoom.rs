//! Zoom factor applied to every input coordinate.

use crate::error::PlotError;
use std::fmt;
use std::str::FromStr;

/// Scalar multiplier applied to every coordinate while loading.
///
/// Any `f64` is accepted: zero, negative and non-finite values are passed
/// through unchanged and simply produce a degenerate or mirrored drawing.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use polyplot::ZoomFactor;
///
/// let zoom = ZoomFactor::from_str(" 2.5 ").unwrap();
/// assert_eq!(zoom.apply(4.0), 10.0);
/// assert_eq!(ZoomFactor::default().value(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    /// Zoom used when none is given on the command line.
    pub const DEFAULT: Self = ZoomFactor(10.0);

    pub fn new(value: f64) -> Self {
        ZoomFactor(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Scales a single coordinate value.
    pub fn apply(&self, value: f64) -> f64 {
        value * self.0
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for ZoomFactor {
    type Err = PlotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(ZoomFactor)
            .map_err(|source| PlotError::InvalidZoom {
                value: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
