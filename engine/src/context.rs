// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use log::warn;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl};

use crate::error::EngineError;

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

/// Window parameters for [`RenderContext::new`]. Plain data, no config files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("CHAZ"),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Process-lifetime SDL state: one window, one renderer, one event pump.
///
/// Created once at startup and never retried. Dropping the context tears
/// everything down; field order keeps the canvas alive no longer than the
/// SDL2_image and SDL contexts it depends on.
pub struct RenderContext {
    pub canvas: Canvas<Window>,
    pub event_pump: EventPump,
    _image: Sdl2ImageContext,
    _sdl: Sdl,
}

impl RenderContext {
    pub fn new(config: &WindowConfig) -> Result<Self, EngineError> {
        let sdl = sdl2::init().map_err(EngineError::Sdl)?;
        let video = sdl.video().map_err(EngineError::Sdl)?;

        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "1") {
            warn!("linear texture filtering not enabled");
        }

        let window = video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()?;
        canvas.set_draw_color(Color::RGB(0xFF, 0xFF, 0xFF));

        let image = sdl2::image::init(InitFlag::PNG).map_err(EngineError::Sdl)?;
        let event_pump = sdl.event_pump().map_err(EngineError::Sdl)?;

        Ok(Self {
            canvas,
            event_pump,
            _image: image,
            _sdl: sdl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_window_config_matches_screen_constants() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "CHAZ");
        assert_eq!(config.width, SCREEN_WIDTH);
        assert_eq!(config.height, SCREEN_HEIGHT);
    }

    #[test]
    #[serial]
    fn bootstrap_never_panics() {
        // On a headless machine this exercises the failure path; with a
        // display attached it exercises the success path. Neither may panic.
        let _ = RenderContext::new(&WindowConfig::default());
    }

    /// Requires a video driver (a real display, or SDL_VIDEODRIVER=dummy).
    #[test]
    #[serial]
    #[ignore]
    fn bootstrap_creates_window_and_canvas() {
        let ctx = RenderContext::new(&WindowConfig::default()).expect("bootstrap failed");
        assert_eq!(ctx.canvas.window().size(), (SCREEN_WIDTH, SCREEN_HEIGHT));
    }
}
