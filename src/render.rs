//! Renderers

use crate::color::Rgb;
use crate::depth::DepthBuffer;
use crate::error::Error;
use crate::point::Point;
use crate::polygon::ConvexPolygon;
use crate::raster::{round_half_up, Fragment};
use crate::scene::{load_scene, load_scene_file, VertexFormat};
use crate::surface::Canvas;
use crate::transform::Transform;
use crate::DrawingSurface;

use log::{debug, info};
use std::path::Path;

/// Depth tested drawing
///
/// Wraps another surface and only passes on points nearer than anything
/// already drawn at their pixel.  A point's `z` is its depth, and the
/// point wins only if it is strictly less than the stored depth.
#[derive(Debug)]
pub struct DepthRenderer<S> {
    surface: S,
    zbuf: DepthBuffer,
}

impl DepthRenderer<Canvas> {
    /// Depth test drawing onto `canvas`, depth buffer matches its size
    pub fn new(canvas: Canvas) -> Self {
        let (w, h) = (canvas.width(), canvas.height());
        Self::with_size(canvas, w, h)
    }
}

impl<S: DrawingSurface> DepthRenderer<S> {
    /// Depth test drawing onto `surface` of `width` x `height` pixels
    pub fn with_size(surface: S, width: usize, height: usize) -> Self {
        Self { surface, zbuf: DepthBuffer::new(height, width) }
    }
    /// Depth test and draw the fragments of one polygon
    pub fn submit(&mut self, fragments: &[Fragment], color: Rgb) -> Option<usize> {
        let pts: Vec<Point> = fragments.iter().map(|f| Point::from(*f)).collect();
        self.add_points(&pts, color, 1.0, &Transform::new())
    }
    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.zbuf
    }
    pub fn surface(&self) -> &S {
        &self.surface
    }
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
    /// Give back the wrapped surface
    pub fn into_inner(self) -> S {
        self.surface
    }
}

impl<S: DrawingSurface> DrawingSurface for DepthRenderer<S> {
    /// Points are placed by `transform` before the depth test, survivors
    /// are forwarded already placed.  Points outside the depth buffer
    /// never pass
    fn add_points(&mut self, points: &[Point], color: Rgb, point_size: f64,
                  transform: &Transform) -> Option<usize> {
        let (rows, cols) = self.zbuf.dims();
        let mut keep = Vec::with_capacity(points.len());
        for p in points {
            let p = transform.transform_point(p);
            let row = round_half_up(p.y);
            let col = round_half_up(p.x);
            if row < 0 || col < 0 || row as usize >= rows || col as usize >= cols {
                continue;
            }
            let z = &mut self.zbuf[(row as usize, col as usize)];
            if p.z < *z {
                *z = p.z;
                keep.push(p);
            }
        }
        debug!("DEPTH TEST: {} of {} points pass", keep.len(), points.len());
        if keep.is_empty() {
            return None;
        }
        self.surface.add_points(&keep, color, point_size, &Transform::new())
    }
}

/// Load a scene and render it once
///
/// All polygons are drawn, in order, when the renderer is created
#[derive(Debug)]
pub struct SceneRenderer<S> {
    ren: S,
    polygons: Vec<ConvexPolygon>,
}

impl<S: DrawingSurface> SceneRenderer<S> {
    /// Render `polygons` onto `ren`
    pub fn new(mut ren: S, mut polygons: Vec<ConvexPolygon>) -> Self {
        info!("rendering {} polygons", polygons.len());
        for poly in polygons.iter_mut() {
            poly.render(&mut ren);
        }
        Self { ren, polygons }
    }
    /// Render the polygons in scene `text`
    pub fn from_text(ren: S, text: &str, format: VertexFormat) -> Self {
        Self::new(ren, load_scene(text, format))
    }
    /// Render the polygons in the scene file `filename`
    pub fn from_file<P: AsRef<Path>>(ren: S, filename: P, format: VertexFormat) -> Result<Self, Error> {
        Ok(Self::new(ren, load_scene_file(filename, format)?))
    }
    /// Polygons read from the scene
    pub fn polygons(&self) -> &[ConvexPolygon] {
        &self.polygons
    }
    pub fn renderer(&self) -> &S {
        &self.ren
    }
    /// Give back the renderer
    pub fn into_inner(self) -> S {
        self.ren
    }
}
