mod pixel_buffer;
mod surface;

pub use pixel_buffer::PixelBuffer;
pub use surface::RenderSurface;

use crate::error::{Error, Result};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::debug;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_TITLE: &str = "Mandelbrot";

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

/// Streaming texture the framebuffer is uploaded into. Must match the
/// framebuffer size; recreate it on every resize.
pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    Resized { width: u32, height: u32 },
}

impl Display {
    /// Create a resizable window with custom resolution and VSync settings
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(Error::Sdl)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder
            .build()
            .map_err(|e| Error::Renderer(e.to_string()))?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(Error::Sdl)?;

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_title(&mut self, title: &str) {
        // The base title already passed window creation, so this only
        // fails on a NUL byte; keep the previous title in that case
        if let Err(e) = self.canvas.window_mut().set_title(title) {
            debug!(error = %e, "window title not updated");
        }
    }

    pub fn present(&mut self, target: &mut RenderTarget, buffer: &PixelBuffer) -> Result<()> {
        if !target.fits(buffer) {
            return Err(Error::Present(format!(
                "texture is {}x{} but frame is {}x{}",
                target.width,
                target.height,
                buffer.width(),
                buffer.height()
            )));
        }

        target
            .texture
            .update(None, buffer.as_bytes(), buffer.pitch())
            .map_err(|e| Error::Present(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&target.texture, None, None)
            .map_err(Error::Present)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::Window {
                    win_event: WindowEvent::Resized(w, h) | WindowEvent::SizeChanged(w, h),
                    ..
                } => {
                    let width = w.max(0) as u32;
                    let height = h.max(0) as u32;
                    // Minimised windows report 0x0; the last real size stays current
                    if width > 0 && height > 0 {
                        self.width = width;
                        self.height = height;
                    }
                    events.push(InputEvent::Resized { width, height });
                },
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| Error::Texture(e.to_string()))?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }

    /// True if `buffer` can be uploaded into this texture as-is
    pub fn fits(&self, buffer: &PixelBuffer) -> bool {
        buffer.has_size(self.width, self.height)
    }
}
