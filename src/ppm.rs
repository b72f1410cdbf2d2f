//! Reading and writing of image files
//!
//! The format is chosen from the file extension; `.ppm` writes a
//! Portable Pixmap.
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
use crate::error::Error;

use log::debug;
use std::path::Path;

/// Read an image as RGB8 data, with its width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize), Error> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGB8 data of `width` x `height` pixels to an image file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), Error> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::ColorType::Rgb8)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, Error> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("image sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    if d1.len() != d2.len() {
        debug!("files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
