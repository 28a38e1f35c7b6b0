// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::path::Path;

use chaz_engine::{
    FrameCycle, RenderContext, RingSet, WindowConfig, DEFAULT_ASSET_ROOT, TICKS_PER_FRAME,
};
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::pixels::Color;

fn main() {
    env_logger::init();

    let config = WindowConfig::default();
    let mut ctx = match RenderContext::new(&config) {
        Ok(ctx) => ctx,
        Err(err) => {
            error!("failed to initialize: {err}");
            return;
        }
    };

    let texture_creator = ctx.canvas.texture_creator();
    let rings = RingSet::load_media(&texture_creator, Path::new(DEFAULT_ASSET_ROOT));
    if !rings.fully_loaded() {
        error!("failed to load media");
        return;
    }

    let ring = rings.ring(1).expect("ring 1 missing from ring table");
    let mut cycle = FrameCycle::new(ring.frame_count(), TICKS_PER_FRAME);
    info!("animating ring 1 ({} frames)", ring.frame_count());

    'running: loop {
        for event in ctx.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
        }

        ctx.canvas.set_draw_color(Color::RGB(0xFF, 0xFF, 0xFF));
        ctx.canvas.clear();

        let sprite = ring.frame(cycle.current_frame());
        let x = (config.width as i32 - sprite.width() as i32) / 2;
        let y = (config.height as i32 - sprite.height() as i32) / 2;
        if let Err(err) = sprite.render(&mut ctx.canvas, x, y, None) {
            warn!("failed to render frame {}: {err}", cycle.current_frame());
        }

        // Vsync paces the loop.
        ctx.canvas.present();
        cycle.advance();
    }
}
