//! Scanline fill of convex polygons
//!
//! Rows are filled between the left-most and right-most edge crossing,
//! with depth interpolated first along the edges and then across the row.

use crate::point::Point;

use log::trace;

/// Edges with a smaller change in y are treated as horizontal
const HORIZONTAL_EPSILON: f64 = 0.001;

/// Round half up, matching integer truncation of `v + 0.5` for positive `v`
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Candidate pixel write with its interpolated depth
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Fragment {
    pub x: i64,
    pub y: i64,
    pub depth: f64,
}

impl Fragment {
    pub fn new(x: i64, y: i64, depth: f64) -> Self {
        Self { x, y, depth }
    }
}

impl From<Fragment> for Point {
    fn from(f: Fragment) -> Point {
        Point::new(f.x as f64, f.y as f64, f.depth)
    }
}

/// Horizontal extent of a polygon on a single row
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ScanlineSpan {
    /// Row
    pub y: i64,
    /// Left-most pixel
    pub x0: i64,
    /// Depth at the left-most pixel
    pub z0: f64,
    /// Right-most pixel
    pub x1: i64,
    /// Depth at the right-most pixel
    pub z1: f64,
}

impl ScanlineSpan {
    /// Number of pixels covered, both ends included
    pub fn len(&self) -> i64 {
        self.x1 - self.x0 + 1
    }
    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }
    /// Depth at pixel `x` by linear interpolation between the ends
    pub fn depth_at(&self, x: i64) -> f64 {
        if self.x1 == self.x0 {
            return self.z0;
        }
        let t = (x - self.x0) as f64 / (self.x1 - self.x0) as f64;
        self.z0 + t * (self.z1 - self.z0)
    }
    /// Fragments covering the span, left to right
    pub fn fragments(&self) -> impl Iterator<Item = Fragment> + '_ {
        (self.x0 ..= self.x1).map(move |x| Fragment::new(x, self.y, self.depth_at(x)))
    }
}

/// First and last row covered by `pts`
///
/// Each y is rounded before taking the extremes.  Rounding is monotonic so
/// this is the same as rounding the extremes.
pub fn vertical_extent(pts: &[Point]) -> Option<(i64, i64)> {
    let mut rows = pts.iter().map(|p| round_half_up(p.y));
    let first = rows.next()?;
    Some(rows.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
}

/// Crossings of row `y` with every edge of the polygon
///
/// Edges are visited starting with the closing edge, last point to first.
/// A horizontal edge lying on the row contributes both of its end points.
fn row_intersections(pts: &[Point], y: f64, out: &mut Vec<(i64, f64)>) {
    out.clear();
    let mut p0 = match pts.last() {
        Some(p) => p,
        None => return,
    };
    for p1 in pts {
        if (p0.y <= y && y <= p1.y) || (p0.y >= y && y >= p1.y) {
            if (p0.y - p1.y).abs() < HORIZONTAL_EPSILON {
                out.push((round_half_up(p0.x), p0.z));
                out.push((round_half_up(p1.x), p1.z));
            } else {
                let t = (y - p0.y) / (p1.y - p0.y);
                let x = round_half_up(p0.x + t * (p1.x - p0.x));
                let z = p0.z + t * (p1.z - p0.z);
                out.push((x, z));
            }
        }
        p0 = p1;
    }
}

/// Spans for every row the polygon covers, top to bottom
///
/// Only the minimum and maximum crossing of a row are kept, so extra
/// crossings at vertices are harmless.  This is only correct for convex
/// polygons.
pub fn scanline_spans(pts: &[Point]) -> Vec<ScanlineSpan> {
    let (min_y, max_y) = match vertical_extent(pts) {
        Some(v) => v,
        None => return vec![],
    };
    let mut spans = Vec::with_capacity((max_y - min_y + 1) as usize);
    let mut hits = Vec::with_capacity(pts.len() + 2);
    for y in min_y ..= max_y {
        row_intersections(pts, y as f64, &mut hits);
        let mut iter = hits.iter();
        let first = match iter.next() {
            Some(h) => *h,
            None => continue,
        };
        let (lo, hi) = iter.fold((first, first), |(lo, hi), h| {
            (if h.0 < lo.0 { *h } else { lo },
             if h.0 > hi.0 { *h } else { hi })
        });
        let span = ScanlineSpan { y, x0: lo.0, z0: lo.1, x1: hi.0, z1: hi.1 };
        trace!("SCANLINE SPAN: y {} x {} .. {} z {} .. {}",
               y, span.x0, span.x1, span.z0, span.z1);
        spans.push(span);
    }
    spans
}

/// Scanline fill a convex polygon
///
/// Returns every fragment covered, row by row, with depth interpolated
/// across each row
///
///     use zpoly::{Point,polygon_fill};
///
///     let pts = [Point::new(0.,0.,0.), Point::new(2.,0.,2.), Point::new(2.,2.,2.)];
///     let frags = polygon_fill(&pts);
///     assert_eq!(frags.len(), 3 + 2 + 1);
///     assert_eq!(frags[1].depth, 1.0);
///
pub fn polygon_fill(pts: &[Point]) -> Vec<Fragment> {
    scanline_spans(pts)
        .iter()
        .flat_map(|span| span.fragments())
        .collect()
}
