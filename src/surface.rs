//! Drawing surface

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::point::Point;
use crate::ppm;
use crate::raster::round_half_up;
use crate::transform::Transform;
use crate::error::Error;
use crate::DrawingSurface;

use std::path::Path;

/// Points added in a single call to [`add_points`]
///
/// [`add_points`]: ../trait.DrawingSurface.html#tymethod.add_points
#[derive(Debug,Clone,PartialEq)]
pub struct Drawable {
    pub points: Vec<Point>,
    pub color: Rgb,
    pub point_size: f64,
    pub transform: Transform,
}

/// In-memory RGB surface
///
/// Pixel (0,0) is the first pixel of the first row of the image.  Every
/// call to [`add_points`] is also kept as a [`Drawable`].
///
/// [`add_points`]: ../trait.DrawingSurface.html#tymethod.add_points
/// [`Drawable`]: struct.Drawable.html
#[derive(Debug,Clone)]
pub struct Canvas {
    rbuf: RenderingBuffer,
    drawables: Vec<Drawable>,
}

impl Canvas {
    /// Create new Canvas of width * height, all black
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create canvas with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height, 3), drawables: vec![] }
    }
    /// Height of canvas in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of canvas in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Set every pixel to `color`
    ///
    /// Drawables already added are kept
    pub fn clear(&mut self, color: Rgb) {
        let c = color.to_rgb8();
        self.rbuf.fill(&[c.r, c.g, c.b]);
    }
    /// Color of pixel at (`x`,`y`)
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        Rgb8::from_slice(&self.rbuf[(x,y)])
    }
    /// Copies the color `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the canvas are ignored
    ///
    ///     use zpoly::{Canvas,Rgb,Rgb8};
    ///
    ///     let mut canvas = Canvas::new(1,2);
    ///     canvas.copy_pixel(0, 1, Rgb::white());
    ///     assert_eq!(canvas.get(0,0), Rgb8::black());
    ///     assert_eq!(canvas.get(0,1), Rgb8::white());
    ///
    ///     canvas.copy_pixel(10, 10, Rgb::white()); // Ignored, outside of range
    ///     canvas.copy_pixel(-1, 0, Rgb::white());  // Ignored, outside of range
    ///
    pub fn copy_pixel(&mut self, x: i64, y: i64, c: Rgb) {
        self.copy_pixel8(x, y, c.to_rgb8());
    }
    fn copy_pixel8(&mut self, x: i64, y: i64, c: Rgb8) {
        if ! self.rbuf.contains(x, y) {
            return;
        }
        let p = &mut self.rbuf[(x as usize, y as usize)];
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
    }
    /// Everything drawn so far, in order
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }
    /// Raw RGB pixel data, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.rbuf.data
    }
    /// Write the canvas to an image file, format is taken from the extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), Error> {
        ppm::write_file(self.as_bytes(), self.width(), self.height(), filename)
    }
}

impl DrawingSurface for Canvas {
    /// Points are transformed, rounded half up to a pixel, and filled
    /// as squares `point_size` pixels wide
    fn add_points(&mut self, points: &[Point], color: Rgb, point_size: f64,
                  transform: &Transform) -> Option<usize> {
        let c = color.to_rgb8();
        let n = point_size.ceil().max(1.0) as i64;
        for p in points {
            let (x, y) = transform.transform(p.x, p.y);
            let (x, y) = (round_half_up(x), round_half_up(y));
            for dy in 0 .. n {
                for dx in 0 .. n {
                    self.copy_pixel8(x + dx, y + dy, c);
                }
            }
        }
        self.drawables.push(Drawable {
            points: points.to_vec(),
            color, point_size,
            transform: *transform,
        });
        Some(self.drawables.len() - 1)
    }
}
