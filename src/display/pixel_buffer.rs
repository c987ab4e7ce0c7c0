use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

const BYTES_PER_PIXEL: usize = 4;

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn pack_pixel(dest: &mut [u8], r: u8, g: u8, b: u8) {
    dest[0] = 255; // A
    dest[1] = b; // B
    dest[2] = g; // G
    dest[3] = r; // R
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8888 framebuffer, row-major, `width * height` pixels.
///
/// Dimensions are fixed for the lifetime of the buffer; a new size means a
/// new buffer (see `RenderSurface`).
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (800x600)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new pixel buffer with custom resolution, cleared to black
    pub fn with_size(width: u32, height: u32) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut buffer = Self {
            pixels: vec![0; pixel_count * BYTES_PER_PIXEL],
            width,
            height,
        };
        buffer.clear(0, 0, 0);
        buffer
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn has_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Number of pixels (not bytes)
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.width as i64 && y >= 0 && (y as i64) < self.height as i64
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Fill every pixel with a solid color
    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pack_pixel(chunk, r, g, b);
        }
    }

    /// Write a single pixel.
    ///
    /// # Panics
    /// Any coordinate outside `[0, width) x [0, height)` is a caller defect
    /// and aborts the frame.
    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        assert!(
            self.in_bounds(x, y),
            "attempt at writing to screen out of its bounds: ({}, {}) on {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.pixel_index(x as u32, y as u32);
        pack_pixel(&mut self.pixels[idx..idx + BYTES_PER_PIXEL], r, g, b);
    }

    /// Read a pixel from the buffer (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some((
                self.pixels[idx + 3], // R
                self.pixels[idx + 2], // G
                self.pixels[idx + 1], // B
            ))
        } else {
            None
        }
    }

    /// Raw bytes for texture upload, pitch is `width * 4`
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
