// Buffer/surface accessors are exercised by the unit tests only
#![allow(dead_code)]

mod config;
mod display;
mod effects;
mod error;
mod util;

use config::{Config, Invocation};
use display::{Display, InputEvent, PixelBuffer, RenderSurface, RenderTarget};
use effects::{Effect, Mandelbrot};
use sdl2::keyboard::Keycode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use util::FpsCounter;

/// Frames between timing reports
const REPORT_INTERVAL: u64 = 120;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mandelview=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Apply a window resize to the surface and return the framebuffer to render
/// into next. Minimised windows report 0x0; those keep the last frame size
/// and yield `None`.
fn handle_resize(surface: &mut RenderSurface, width: u32, height: u32) -> Option<&PixelBuffer> {
    if width == 0 || height == 0 {
        debug!(width, height, "ignoring empty resize");
        return None;
    }
    Some(surface.on_resize(width, height))
}

fn fps_title(title: &str, avg_fps: f32, surface: &RenderSurface) -> String {
    format!(
        "{} - {} fps ({}x{})",
        title,
        avg_fps as u32,
        surface.width(),
        surface.height()
    )
}

#[inline]
fn report_due(frame: u64) -> bool {
    frame % REPORT_INTERVAL == 0
}

fn run(config: &Config) -> error::Result<()> {
    let (mut display, texture_creator) =
        Display::with_options(&config.title, config.width, config.height, config.vsync)?;
    let mut surface = RenderSurface::create(config.width, config.height);
    let mut target = RenderTarget::with_size(&texture_creator, surface.width(), surface.height())?;

    let effect = Mandelbrot::new();
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = config.show_fps;
    let mut frame: u64 = 0;

    info!(
        effect = effect.name(),
        width = config.width,
        height = config.height,
        vsync = config.vsync,
        "starting render loop"
    );

    'main: loop {
        let (_dt, _current_fps, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::F) => {
                    show_fps = !show_fps;
                    if !show_fps {
                        display.set_title(&config.title);
                    }
                },
                InputEvent::Resized { width, height } => {
                    if let Some(buffer) = handle_resize(&mut surface, width, height) {
                        if !target.fits(buffer) {
                            target = RenderTarget::with_size(
                                &texture_creator,
                                buffer.width(),
                                buffer.height(),
                            )?;
                            debug!(width, height, "surface resized");
                        }
                    }
                },
                InputEvent::KeyDown(_) => {},
            }
        }

        effect.render(surface.buffer_mut());
        display.present(&mut target, surface.buffer())?;

        frame += 1;
        if report_due(frame) {
            let (min_fps, max_fps) = fps_counter.min_max_fps();
            let frame_ms = fps_counter.avg_frame_time_ms();
            if show_fps {
                info!(avg_fps, min_fps, max_fps, frame_ms, "fps");
            } else {
                debug!(frame, avg_fps, min_fps, max_fps, frame_ms, "frame timing");
            }
        }
        if show_fps {
            display.set_title(&fps_title(&config.title, avg_fps, &surface));
        }
    }

    info!(frames = frame, "shutting down");
    surface.destroy();
    Ok(())
}

fn main() {
    init_logging();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            config::print_usage();
            return;
        },
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        },
    };

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
