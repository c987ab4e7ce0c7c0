//! Escape-time Mandelbrot renderer
//!
//! Recomputes the whole fixed viewport every frame, one pixel at a time,
//! and shades each pixel by how quickly its orbit escapes radius 2.
//! No camera state: the same size always yields the same frame.

use super::{color, Effect};
use crate::display::PixelBuffer;
use crate::util::map_range;

/// Iteration cap; points that reach it are treated as inside the set
pub const ITER_MAX: u32 = 500;
/// Number of entries in the grayscale gradient
pub const ITER_MAX_COLORS: usize = 50;
/// Orbits with |z| >= this have escaped
pub const ESCAPE_RADIUS: f64 = 2.0;

pub const VIEW_REAL_MIN: f64 = -2.5;
pub const VIEW_REAL_MAX: f64 = 1.0;
pub const VIEW_IMAG_MIN: f64 = -1.25;
pub const VIEW_IMAG_MAX: f64 = 1.25;

/// Iteration count -> grayscale intensity lookup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    levels: [u8; ITER_MAX_COLORS],
}

impl Gradient {
    /// Linear ramp: entry i holds (i+1) mapped from [1, 50] onto [0, 255]
    pub fn new() -> Self {
        let mut levels = [0u8; ITER_MAX_COLORS];
        for (i, level) in levels.iter_mut().enumerate() {
            *level = map_range(
                (i + 1) as f64,
                1.0,
                ITER_MAX_COLORS as f64,
                0.0,
                255.0,
            ) as u8;
        }
        Self { levels }
    }

    /// Intensity for an iteration count; counts past the table use the last entry
    #[inline]
    pub fn intensity(&self, iteration: u32) -> u8 {
        let idx = (iteration as usize).min(ITER_MAX_COLORS - 1);
        self.levels[idx]
    }

    pub fn levels(&self) -> &[u8; ITER_MAX_COLORS] {
        &self.levels
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterate z -> z^2 + c from z = 0 for c = (x0, y0).
/// Returns the number of steps taken before |z| reached the escape radius,
/// or `ITER_MAX` if it never did.
#[inline]
pub fn escape_time(x0: f64, y0: f64) -> u32 {
    let threshold = ESCAPE_RADIUS * ESCAPE_RADIUS;
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut iteration = 0;

    while x * x + y * y < threshold && iteration < ITER_MAX {
        let x_next = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = x_next;
        iteration += 1;
    }

    iteration
}

/// Complex-plane point for pixel (px, py) on a width x height grid
#[inline]
pub fn pixel_to_point(px: u32, py: u32, width: u32, height: u32) -> (f64, f64) {
    let x0 = map_range(px as f64, 0.0, width as f64, VIEW_REAL_MIN, VIEW_REAL_MAX);
    let y0 = map_range(py as f64, 0.0, height as f64, VIEW_IMAG_MIN, VIEW_IMAG_MAX);
    (x0, y0)
}

pub struct Mandelbrot {
    gradient: Gradient,
}

impl Mandelbrot {
    pub fn new() -> Self {
        Self {
            gradient: Gradient::new(),
        }
    }

    /// Fill `buffer` with one complete frame at its current size
    pub fn render_frame(&self, buffer: &mut PixelBuffer) {
        let width = buffer.width();
        let height = buffer.height();

        for py in 0..height {
            for px in 0..width {
                let (x0, y0) = pixel_to_point(px, py, width, height);
                let (r, g, b) = color::gray(self.gradient.intensity(escape_time(x0, y0)));
                buffer.write_pixel(px as i32, py as i32, r, g, b);
            }
        }
    }
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Mandelbrot {
    fn render(&self, buffer: &mut PixelBuffer) {
        self.render_frame(buffer);
    }

    fn name(&self) -> &str {
        "Mandelbrot"
    }
}
