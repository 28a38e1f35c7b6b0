// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

mod animation;
mod context;
mod error;
mod rings;
mod sprite;

pub use animation::{FrameCycle, TICKS_PER_FRAME};
pub use context::{RenderContext, WindowConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use error::EngineError;
pub use rings::{
    Ring, RingSet, RingSpec, DEFAULT_ASSET_ROOT, RINGS, RING_1_FRAMES, RING_2_FRAMES,
    RING_3_FRAMES,
};
pub use sprite::Sprite;
