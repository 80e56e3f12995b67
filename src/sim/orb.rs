// orb.rs - Cursor-following orb
//
// A single glow that eases toward the pointer each frame. The target wobbles
// by a fresh random amount every tick and sinks with page scroll (parallax).

use super::{AmbientEffect, Input, RenderTo, lerp, seed, spread};
use crate::config::OrbConfig;
use crate::render::Follower;

pub struct CursorOrb {
    // Last pointer position (client coords)
    px: f32,
    py: f32,

    // Scroll contribution, already scaled by parallax
    scroll: f32,

    // Eased position
    x: f32,
    y: f32,

    config: OrbConfig,
    rng: u32,
}

impl CursorOrb {
    pub fn new(config: OrbConfig) -> Self {
        Self {
            px: 0.0,
            py: 0.0,
            scroll: 0.0,
            x: 0.0,
            y: 0.0,
            rng: seed(config.seed),
            config,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn target(&self) -> (f32, f32) {
        (self.px, self.py + self.scroll)
    }
}

impl AmbientEffect for CursorOrb {
    fn handle(&mut self, input: Input) {
        match input {
            Input::PointerMove { x, y } => {
                self.px = x;
                self.py = y;
            }
            Input::Scroll { y } => self.scroll = y * self.config.scroll_parallax,
            Input::Activate | Input::Deactivate => {}
        }
    }

    fn tick(&mut self) {
        let (tx, ty) = self.target();
        let jx = spread(&mut self.rng, self.config.jitter);
        let jy = spread(&mut self.rng, self.config.jitter);
        self.x = lerp(self.x, tx + jx, self.config.follow);
        self.y = lerp(self.y, ty + jy, self.config.follow);
    }
}

impl<F: Follower + ?Sized> RenderTo<F> for CursorOrb {
    fn render(&mut self, target: &mut F) {
        let off = self.config.offset;
        target.translate(self.x - off, self.y - off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingFollower;

    fn still_orb() -> CursorOrb {
        CursorOrb::new(OrbConfig { jitter: 0.0, seed: Some(5), ..OrbConfig::default() })
    }

    #[test]
    fn converges_on_pointer_without_jitter() {
        let mut orb = still_orb();
        orb.handle(Input::PointerMove { x: 400.0, y: 300.0 });
        for _ in 0..200 {
            orb.tick();
        }
        let (x, y) = orb.position();
        assert!((x - 400.0).abs() < 0.01, "x = {x}");
        assert!((y - 300.0).abs() < 0.01, "y = {y}");
    }

    #[test]
    fn first_tick_covers_follow_fraction() {
        let mut orb = still_orb();
        orb.handle(Input::PointerMove { x: 100.0, y: 50.0 });
        orb.tick();
        let (x, y) = orb.position();
        assert!((x - 10.0).abs() < 1e-4);
        assert!((y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn scroll_shifts_target_by_parallax() {
        let mut orb = still_orb();
        orb.handle(Input::PointerMove { x: 0.0, y: 100.0 });
        orb.handle(Input::Scroll { y: 1000.0 });
        let (_, ty) = orb.target();
        assert!((ty - 400.0).abs() < 1e-3);
    }

    #[test]
    fn jitter_bounded() {
        let mut orb = CursorOrb::new(OrbConfig { follow: 1.0, seed: Some(3), ..OrbConfig::default() });
        orb.handle(Input::PointerMove { x: 500.0, y: 500.0 });
        for _ in 0..100 {
            orb.tick();
            let (x, y) = orb.position();
            assert!((x - 500.0).abs() <= 75.0);
            assert!((y - 500.0).abs() <= 75.0);
        }
    }

    #[test]
    fn render_centres_orb() {
        let mut orb = still_orb();
        let mut el = RecordingFollower::default();
        orb.render(&mut el);
        assert_eq!(el.moves, vec![(-30.0, -30.0)]);
    }
}
