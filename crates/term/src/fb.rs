//! Character framebuffer flattened from a composite.

use crate::core::Composite;
use crate::sink::Glyph;

/// 2D framebuffer of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, ' ');
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn clear(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Row `y` as a string, or empty when out of range.
    pub fn row_string(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize].iter().collect()
    }

    /// Flatten a composite: front glyph per cell, `blank` where nothing is opaque.
    pub fn fill_from<P: Glyph>(&mut self, composite: &Composite<P>, blank: char) {
        self.resize(composite.width(), composite.height());
        for y in 0..composite.height() {
            for x in 0..composite.width() {
                let ch = composite.top(x, y).map_or(blank, |c| c.payload.glyph());
                self.set(x, y, ch);
            }
        }
    }
}
