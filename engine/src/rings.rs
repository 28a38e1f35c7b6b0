// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use std::path::{Path, PathBuf};

use log::warn;
use sdl2::render::TextureCreator;

use crate::sprite::Sprite;

pub const RING_1_FRAMES: usize = 10;
pub const RING_2_FRAMES: usize = 30;
pub const RING_3_FRAMES: usize = 4;

pub const DEFAULT_ASSET_ROOT: &str = "CHAZ/Sprites";

/// A named set of sequential animation frame images on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSpec {
    pub number: u32,
    pub frame_count: usize,
}

pub const RINGS: [RingSpec; 3] = [
    RingSpec {
        number: 1,
        frame_count: RING_1_FRAMES,
    },
    RingSpec {
        number: 2,
        frame_count: RING_2_FRAMES,
    },
    RingSpec {
        number: 3,
        frame_count: RING_3_FRAMES,
    },
];

impl RingSpec {
    /// `<root>/ring_<n>_frames/ring_<n>_<frame>.png`
    pub fn frame_path(&self, root: &Path, frame: usize) -> PathBuf {
        root.join(format!("ring_{}_frames", self.number))
            .join(format!("ring_{}_{}.png", self.number, frame))
    }
}

/// A loaded frame sequence. Frames that failed to load stay empty.
pub struct Ring<'tc> {
    spec: RingSpec,
    frames: Vec<Sprite<'tc>>,
}

impl<'tc> Ring<'tc> {
    /// Loads every frame of `spec` from under `root`. A per-file failure is
    /// logged and leaves that slot empty; loading continues with the next
    /// frame.
    pub fn load<C>(spec: RingSpec, creator: &'tc TextureCreator<C>, root: &Path) -> Ring<'tc> {
        let mut frames = Vec::with_capacity(spec.frame_count);
        for frame in 0..spec.frame_count {
            let path = spec.frame_path(root, frame);
            let mut sprite = Sprite::new();
            if let Err(err) = sprite.load_from_file(creator, &path) {
                warn!("failed to load ring {} frame {}: {}", spec.number, frame, err);
            }
            frames.push(sprite);
        }
        Ring { spec, frames }
    }

    pub fn spec(&self) -> RingSpec {
        self.spec
    }

    pub fn frame(&self, index: usize) -> &Sprite<'tc> {
        &self.frames[index]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn fully_loaded(&self) -> bool {
        self.frames.iter().all(Sprite::is_loaded)
    }
}

/// All three rings, loaded sequentially.
pub struct RingSet<'tc> {
    pub rings: Vec<Ring<'tc>>,
}

impl<'tc> RingSet<'tc> {
    pub fn load_media<C>(creator: &'tc TextureCreator<C>, root: &Path) -> RingSet<'tc> {
        let rings = RINGS
            .iter()
            .map(|spec| Ring::load(*spec, creator, root))
            .collect();
        RingSet { rings }
    }

    pub fn ring(&self, number: u32) -> Option<&Ring<'tc>> {
        self.rings.iter().find(|ring| ring.spec.number == number)
    }

    /// The demo's `loadMedia` success flag: true only when every frame of
    /// every ring holds a texture.
    pub fn fully_loaded(&self) -> bool {
        self.rings.iter().all(Ring::fully_loaded)
    }
}
