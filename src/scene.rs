//! Scene files
//!
//! A scene is a sequence of whitespace separated numeric records, one per
//! polygon:
//!
//! ```text
//! numVertices
//! x1 y1 [z1]
//! ...
//! xN yN [zN]
//! r g b
//! scaleX scaleY translateX translateY rotationDegrees
//! ```
//!
//! Depth values are only present with [`VertexFormat::Spatial`].
//!
//! [`VertexFormat::Spatial`]: enum.VertexFormat.html

use crate::color::Rgb;
use crate::error::{Error, ParseError};
use crate::point::Point;
use crate::polygon::ConvexPolygon;

use log::debug;
use serde::Deserialize;

use std::path::Path;
use std::str::SplitWhitespace;

/// Layout of each vertex in a scene record
#[derive(Debug,Copy,Clone,PartialEq,Eq,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexFormat {
    /// x y, depth is 0
    Planar,
    /// x y z
    Spatial,
}

impl Default for VertexFormat {
    fn default() -> VertexFormat {
        VertexFormat::Planar
    }
}

/// Cursor over whitespace separated tokens
#[derive(Debug,Clone)]
pub struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { iter: text.split_whitespace(), consumed: 0 }
    }
    /// Number of tokens read so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }
    /// Returns true if no tokens remain
    pub fn is_exhausted(&self) -> bool {
        self.iter.clone().next().is_none()
    }
    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        let tok = self.iter.next().ok_or(ParseError::UnexpectedEof { expected })?;
        self.consumed += 1;
        Ok(tok)
    }
    /// Read the next token as a finite number
    ///
    /// `inf`, `infinity` and `nan` are not numbers here
    pub fn number(&mut self, expected: &'static str) -> Result<f64, ParseError> {
        let tok = self.next_token(expected)?;
        tok.parse::<f64>().ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                token: tok.to_string(), expected
            })
    }
    /// Read the next token as a count
    pub fn count(&mut self) -> Result<usize, ParseError> {
        let tok = self.next_token("vertex count")?;
        tok.parse::<usize>().map_err(|_| ParseError::InvalidVertexCount {
            token: tok.to_string()
        })
    }
}

/// Read a single polygon record
///
///     use zpoly::{Tokens, VertexFormat, parse_polygon, Point, Rgb};
///
///     let mut toks = Tokens::new("3  0 0  4 0  0 4   1 0 0   1 1 0 0 45");
///     let poly = parse_polygon(&mut toks, VertexFormat::Planar).unwrap();
///     assert_eq!(poly.points()[1], Point::new(4.0, 0.0, 0.0));
///     assert_eq!(poly.color(), Rgb::new(1.0, 0.0, 0.0));
///     assert_eq!(poly.rotation_degrees(), 45.0);
///     assert!(toks.is_exhausted());
///
pub fn parse_polygon(toks: &mut Tokens, format: VertexFormat) -> Result<ConvexPolygon, ParseError> {
    let n = toks.count()?;
    let mut pts = Vec::with_capacity(n.min(1024));
    for _ in 0 .. n {
        let x = toks.number("vertex x")?;
        let y = toks.number("vertex y")?;
        let z = match format {
            VertexFormat::Planar  => 0.0,
            VertexFormat::Spatial => toks.number("vertex z")?,
        };
        pts.push(Point::new(x, y, z));
    }
    let r = toks.number("red")?;
    let g = toks.number("green")?;
    let b = toks.number("blue")?;

    let sx    = toks.number("x scale")?;
    let sy    = toks.number("y scale")?;
    let tx    = toks.number("x translation")?;
    let ty    = toks.number("y translation")?;
    let theta = toks.number("rotation")?;

    Ok(ConvexPolygon::new(pts, Rgb::new(r, g, b), sx, sy, tx, ty, theta))
}

/// Read polygons until input runs out or a record cannot be read
///
/// A bad or truncated record ends the scene; every complete record before
/// it is returned
///
///     use zpoly::{load_scene, VertexFormat};
///
///     let text = "3 0 0 1 0 0 1  0 0 1  1 1 0 0 0
///                 3 0 0 1 0 0 1  0 0";
///     assert_eq!(load_scene(text, VertexFormat::Planar).len(), 1);
///
pub fn load_scene(text: &str, format: VertexFormat) -> Vec<ConvexPolygon> {
    let mut toks = Tokens::new(text);
    let mut polygons = vec![];
    loop {
        let start = toks.consumed();
        match parse_polygon(&mut toks, format) {
            Ok(poly) => polygons.push(poly),
            Err(ParseError::UnexpectedEof { .. }) if toks.consumed() == start => break,
            Err(err) => {
                debug!("SCENE: stopped after {} polygons at token {}: {}",
                       polygons.len(), toks.consumed(), err);
                break;
            }
        }
    }
    debug!("SCENE: {} polygons", polygons.len());
    polygons
}

/// Read polygons from a scene file
///
/// Only failing to read the file is an error, see [`load_scene`]
///
/// [`load_scene`]: fn.load_scene.html
pub fn load_scene_file<P: AsRef<Path>>(filename: P, format: VertexFormat) -> Result<Vec<ConvexPolygon>, Error> {
    let path = filename.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(), source
    })?;
    Ok(load_scene(&text, format))
}
