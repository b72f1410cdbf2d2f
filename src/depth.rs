//! Depth buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Per-pixel nearest depth
///
/// Values are stored in row-major order and start at +infinity, so any
/// finite depth is nearer than an untouched pixel.
#[derive(Debug,Clone,PartialEq)]
pub struct DepthBuffer {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DepthBuffer {
    /// Create a `rows` x `cols` buffer filled with +infinity
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { data: vec![f64::INFINITY; rows * cols], rows, cols }
    }
    /// Resize to `rows` x `cols` and fill with +infinity
    pub fn init(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, f64::INFINITY);
    }
    /// Fill with +infinity
    pub fn reset(&mut self) {
        self.data.iter_mut().for_each(|v| *v = f64::INFINITY);
    }
    /// Number of rows and columns
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Depth at (`row`, `col`), None if outside the buffer
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[self.offset(row, col)])
    }
    /// Set the depth at (`row`, `col`)
    pub fn set(&mut self, row: usize, col: usize, depth: f64) {
        self[(row, col)] = depth;
    }
    /// All values in a single row
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "request {} >= {} rows :: row", row, self.rows);
        let i = row * self.cols;
        &self.data[i .. i + self.cols]
    }
    /// All values, row-major
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
    /// Returns true if no pixel has been written since the last reset
    pub fn is_clear(&self) -> bool {
        self.data.iter().all(|v| *v == f64::INFINITY)
    }
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows, "request {} >= {} rows :: depth", row, self.rows);
        assert!(col < self.cols, "request {} >= {} cols :: depth", col, self.cols);
        row * self.cols + col
    }
}

impl Index<(usize,usize)> for DepthBuffer {
    type Output = f64;
    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[self.offset(index.0, index.1)]
    }
}
impl IndexMut<(usize,usize)> for DepthBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        let i = self.offset(index.0, index.1);
        &mut self.data[i]
    }
}

