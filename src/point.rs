//! Points

/// Point in the plane carrying a depth value
///
/// `z` is not a camera distance, only the value interpolated across a
/// polygon and compared in the depth test.  Smaller is nearer.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    /// Point in the plane with a depth of 0
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Arithmetic mean of all points, each coordinate averaged independently
///
/// An empty slice yields NaN components
///
///     use zpoly::{Point,centroid};
///
///     let pts = [Point::new(0.,0.,1.), Point::new(4.,0.,1.), Point::new(4.,2.,4.)];
///     let c = centroid(&pts);
///     assert_eq!(c, Point::new(8./3., 2./3., 2.0));
///
pub fn centroid(pts: &[Point]) -> Point {
    let n = pts.len() as f64;
    let sum = pts.iter().fold(Point::default(), |acc, p| {
        Point::new(acc.x + p.x, acc.y + p.y, acc.z + p.z)
    });
    Point::new(sum.x / n, sum.y / n, sum.z / n)
}
