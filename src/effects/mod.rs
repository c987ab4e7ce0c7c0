mod mandelbrot;

pub use mandelbrot::Mandelbrot;
#[allow(unused_imports)]
pub use mandelbrot::{
    escape_time, pixel_to_point, Gradient, ESCAPE_RADIUS, ITER_MAX, ITER_MAX_COLORS,
    VIEW_IMAG_MAX, VIEW_IMAG_MIN, VIEW_REAL_MAX, VIEW_REAL_MIN,
};

use crate::display::PixelBuffer;

/// Anything that can fill a framebuffer once per frame
pub trait Effect {
    /// Render one complete frame into the pixel buffer
    fn render(&self, buffer: &mut PixelBuffer);

    /// Effect name for UI/debugging
    fn name(&self) -> &str;
}

/// Color utilities for effects
pub mod color {
    /// Grayscale color (same value for R, G, B)
    #[inline]
    pub fn gray(v: u8) -> (u8, u8, u8) {
        (v, v, v)
    }
}
