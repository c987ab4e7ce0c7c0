//! Framebuffer ownership and lifecycle.

use super::PixelBuffer;
use tracing::debug;

/// Owns the framebuffer for the current window size.
///
/// A size change always replaces the buffer with a freshly allocated one, so
/// nothing rendered at the old size can be presented at the new one.
pub struct RenderSurface {
    buffer: PixelBuffer,
}

impl RenderSurface {
    pub fn create(width: u32, height: u32) -> Self {
        debug!(width, height, "creating render surface");
        Self {
            buffer: PixelBuffer::with_size(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Reallocate for new dimensions. Returns false if the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width() && height == self.height() {
            return false;
        }
        debug!(
            from_width = self.width(),
            from_height = self.height(),
            width,
            height,
            "reallocating framebuffer"
        );
        // Old buffer is dropped before the new one is handed out
        self.buffer = PixelBuffer::with_size(width, height);
        true
    }

    /// Resize and hand back the buffer for the next frame
    pub fn on_resize(&mut self, width: u32, height: u32) -> &mut PixelBuffer {
        self.resize(width, height);
        &mut self.buffer
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Release the framebuffer
    pub fn destroy(self) {
        debug!(
            width = self.width(),
            height = self.height(),
            "destroying render surface"
        );
    }
}
