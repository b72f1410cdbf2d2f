//! Convex polygon rendering with a per-pixel depth buffer
//!
//! How does this work
//!
//!    ren = SceneRenderer( DepthRenderer( Canvas( RenderingBuffer ) ) )
//!
//!  Scene
//!    load_scene()
//!      parse_polygon()  -- one record per polygon, stops at first failure
//!  Per Polygon
//!    ConvexPolygon::render()
//!      transform()          -- T(t) * T(c) * R(theta) * S(s) * T(-c)
//!      polygon_fill()
//!        scanline_spans()   -- min/max x and z on each row
//!        Output: Fragments with x, y, and depth
//!      add_points()         -- one batch per polygon
//!  Depth Test
//!    DepthRenderer::add_points()
//!      depth < zbuf[row][col] => update zbuf, keep point
//!      Canvas::add_points()   -- surviving points only
//!
//! # Example
//!
//!     use zpoly::{Canvas, DepthRenderer, SceneRenderer, VertexFormat, Rgb};
//!
//!     let scene = "4  1 1  3 1  3 3  1 3   1 0 0   1 1 0 0 0";
//!     let mut canvas = Canvas::new(5, 5);
//!     canvas.clear(Rgb::white());
//!     let ren = SceneRenderer::from_text(DepthRenderer::new(canvas), scene,
//!                                       VertexFormat::Planar);
//!     assert_eq!(ren.polygons().len(), 1);
//!     let canvas = ren.into_inner().into_inner();
//!     assert_eq!(canvas.get(2, 2), zpoly::Rgb8::new(255, 0, 0));
//!     assert_eq!(canvas.get(0, 0), zpoly::Rgb8::white());
//!

pub mod buffer;
pub mod color;
pub mod config;
pub mod depth;
pub mod error;
pub mod point;
pub mod polygon;
pub mod ppm;
pub mod raster;
pub mod render;
pub mod scene;
pub mod surface;
pub mod transform;

pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::config::*;
pub use crate::depth::*;
pub use crate::error::*;
pub use crate::point::*;
pub use crate::polygon::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::scene::*;
pub use crate::surface::*;
pub use crate::transform::*;

/// Something points can be drawn onto
///
/// Each call adds one drawable made of `points`, all in a single `color`,
/// and returns a handle to it.  `None` means nothing was drawn.
pub trait DrawingSurface {
    fn add_points(&mut self, points: &[Point], color: Rgb, point_size: f64,
                  transform: &Transform) -> Option<usize>;
}
