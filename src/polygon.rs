//! Convex Polygons

use crate::color::Rgb;
use crate::point::{centroid, Point};
use crate::raster::{polygon_fill, Fragment};
use crate::transform::Transform;
use crate::DrawingSurface;

use log::debug;

/// Convex polygon with a fill color and its own placement
///
/// Scaling and rotation pivot about the polygon's centroid, then the
/// polygon is translated.  Vertices must form a convex shape; this is not
/// checked.
#[derive(Debug,Clone,PartialEq)]
pub struct ConvexPolygon {
    pts: Vec<Point>,
    color: Rgb,
    scale_x: f64,
    scale_y: f64,
    translate_x: f64,
    translate_y: f64,
    theta: f64,
    render_id: Option<usize>,
}

impl Default for ConvexPolygon {
    fn default() -> Self {
        Self::new(vec![], Rgb::black(), 1.0, 1.0, 0.0, 0.0, 0.0)
    }
}

impl ConvexPolygon {
    /// Create a new polygon
    ///
    /// `theta` is a rotation about the z axis in degrees
    pub fn new(pts: Vec<Point>, color: Rgb,
               scale_x: f64, scale_y: f64,
               translate_x: f64, translate_y: f64,
               theta: f64) -> Self {
        Self { pts, color, scale_x, scale_y, translate_x, translate_y, theta,
               render_id: None }
    }
    /// Create an untransformed polygon
    pub fn with_points(pts: Vec<Point>, color: Rgb) -> Self {
        Self::new(pts, color, 1.0, 1.0, 0.0, 0.0, 0.0)
    }
    /// Replace all values
    pub fn set(&mut self, pts: Vec<Point>, color: Rgb,
               scale_x: f64, scale_y: f64,
               translate_x: f64, translate_y: f64,
               theta: f64) {
        *self = Self::new(pts, color, scale_x, scale_y, translate_x, translate_y, theta);
    }
    pub fn points(&self) -> &[Point] {
        &self.pts
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }
    pub fn translation(&self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }
    pub fn rotation_degrees(&self) -> f64 {
        self.theta
    }
    /// Handle returned by the surface the last time the polygon was rendered
    pub fn render_id(&self) -> Option<usize> {
        self.render_id
    }
    /// Center point of the polygon
    ///
    /// Undefined (NaN) for a polygon without points
    pub fn centroid(&self) -> Point {
        centroid(&self.pts)
    }
    /// Placement of the polygon
    ///
    /// Operations, in the order applied to a point:
    ///   - translate by -centroid, moving the center to the origin
    ///   - scale
    ///   - rotate about z
    ///   - translate by +centroid
    ///   - translate
    pub fn transform(&self) -> Transform {
        let c = self.centroid();
        Transform::new_translate(-c.x, -c.y)
            * Transform::new_scale(self.scale_x, self.scale_y)
            * Transform::new_rotate(self.theta.to_radians())
            * Transform::new_translate(c.x, c.y)
            * Transform::new_translate(self.translate_x, self.translate_y)
    }
    /// Points after placement, depth is unchanged
    pub fn transformed_points(&self) -> Vec<Point> {
        let t = self.transform();
        self.pts.iter().map(|p| t.transform_point(p)).collect()
    }
    /// Scanline fill the placed polygon
    pub fn fragments(&self) -> Vec<Fragment> {
        polygon_fill(&self.transformed_points())
    }
    /// Draw the filled polygon onto `ren`
    ///
    /// All fragments are added in a single batch with the identity
    /// transform, as the points are already placed
    pub fn render<S: DrawingSurface + ?Sized>(&mut self, ren: &mut S) -> Option<usize> {
        debug!("POLYGON: {} points centroid {:?}", self.pts.len(), self.centroid());
        let pts: Vec<Point> = self.fragments().into_iter().map(Point::from).collect();
        debug!("POLYGON: {} fragments", pts.len());
        self.render_id = ren.add_points(&pts, self.color, 1.0, &Transform::new());
        self.render_id
    }
}
