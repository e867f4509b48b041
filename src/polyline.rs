//! Polyline model: a flattened list of alternating x,y values.

/// One row of the input file after scaling.
///
/// Values alternate x, y, x, y... and are kept flattened exactly as they
/// appear in the file. An odd value count is allowed here; the trailing
/// value is simply not part of any point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline(Vec<f64>);

/// Every polyline of a file, in row order.
pub type LineSet = Vec<Polyline>;

impl Polyline {
    pub fn new(values: Vec<f64>) -> Self {
        Polyline(values)
    }

    /// Returns the flattened coordinate values.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over complete (x, y) points.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns the unpaired last value of an odd-length polyline.
    pub fn dangling_value(&self) -> Option<f64> {
        if self.0.len() % 2 == 1 {
            self.0.last().copied()
        } else {
            None
        }
    }
}
