//! Render configuration

use crate::color::Rgb;
use crate::error::Error;
use crate::scene::VertexFormat;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for rendering a scene to an image
///
/// Missing keys in a configuration file take their default value
///
///     use zpoly::{RenderConfig, VertexFormat};
///
///     let cfg = RenderConfig::from_toml("width = 320\nvertex_format = \"spatial\"").unwrap();
///     assert_eq!(cfg.width, 320);
///     assert_eq!(cfg.height, 540);
///     assert_eq!(cfg.vertex_format, VertexFormat::Spatial);
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Name of the rendering
    pub title: String,
    /// Color of pixels no polygon covers
    pub background: Rgb,
    /// Whether vertices carry a depth value
    pub vertex_format: VertexFormat,
    /// Image file to write
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            title: String::from("ConvexPolygon"),
            background: Rgb::white(),
            vertex_format: VertexFormat::Planar,
            output: PathBuf::from("scene.png"),
        }
    }
}

impl RenderConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
    /// Read configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let path = filename.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(), source
        })?;
        Self::from_toml(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(), source
        })
    }
}
