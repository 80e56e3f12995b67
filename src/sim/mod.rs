// sim/ - Particle effects
//
// Each effect owns its particles and its RNG. No global state, so any number
// of effects (or tests) can run side by side.

mod burst;
mod orb;
mod spark;
mod store;

pub use burst::{Mote, ParticleBurst};
pub use orb::CursorOrb;
pub use spark::{CursorTrail, Spark};
pub use store::ParticleStore;

const DEFAULT_SEED: u32 = 0xDEADBEEF;

/// Input delivered by the host page
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    PointerMove { x: f32, y: f32 },
    /// Window scroll position in pixels
    Scroll { y: f32 },
    /// Owning section mounted
    Activate,
    /// Owning section unmounted
    Deactivate,
}

/// A decorative particle effect.
///
/// Input handlers run to completion between frames. The frame driver calls
/// `tick` then `render` once per display refresh; effects whose motion is
/// owned elsewhere leave `tick` as a no-op.
pub trait AmbientEffect {
    fn handle(&mut self, input: Input);

    fn tick(&mut self) {}
}

/// Drawing half of an effect, generic over where it draws
pub trait RenderTo<T: ?Sized>: AmbientEffect {
    fn render(&mut self, target: &mut T);
}

/// xorshift32 seed; zero would lock the generator at zero
#[inline]
pub(crate) fn seed(seed: Option<u32>) -> u32 {
    match seed {
        Some(0) | None => DEFAULT_SEED,
        Some(s) => s,
    }
}

// Random number generator (xorshift32), returns [0, 1)
#[inline(always)]
pub(crate) fn rand(rng: &mut u32) -> f32 {
    *rng ^= *rng << 13;
    *rng ^= *rng >> 17;
    *rng ^= *rng << 5;
    (*rng >> 8) as f32 * (1.0 / 16777216.0)
}

/// Uniform in [-spread/2, spread/2)
#[inline]
pub(crate) fn spread(rng: &mut u32, spread: f32) -> f32 {
    (rand(rng) - 0.5) * spread
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
