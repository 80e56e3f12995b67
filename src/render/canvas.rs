// canvas.rs - Immediate-mode spark drawing
//
// Full clear, then one filled circle per live spark. Opacity keeps falling
// past zero near the end of a spark's life, so alpha goes through
// Rgba::with_alpha before it reaches the surface.

use super::{Rgba, Surface};
use crate::sim::{ParticleStore, Spark};

pub fn draw_sparks<S: Surface + ?Sized>(surface: &mut S, sparks: &ParticleStore<Spark>, color: Rgba) {
    surface.clear();
    sparks.for_each(|s| {
        surface.fill_circle(s.x, s.y, s.radius, color.with_alpha(s.opacity));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{Op, RecordingSurface};

    fn spark(x: f32, opacity: f32) -> Spark {
        Spark { x, y: 10.0, dx: 0.0, dy: 0.0, radius: 3.0, opacity, life: 5 }
    }

    #[test]
    fn clears_before_drawing() {
        let mut store = ParticleStore::bounded(4);
        store.add(spark(1.0, 0.8));
        store.add(spark(2.0, 0.4));
        let mut surface = RecordingSurface::new(100, 100);

        draw_sparks(&mut surface, &store, Rgba::rgb([96, 165, 250]));

        assert_eq!(surface.ops[0], Op::Clear);
        let circles = surface.circles();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].0, 1.0);
        assert_eq!(circles[1].0, 2.0);
        assert_eq!(circles[1].3.alpha(), 0.4);
    }

    #[test]
    fn negative_opacity_drawn_transparent() {
        let mut store = ParticleStore::bounded(4);
        store.add(spark(1.0, -0.15));
        let mut surface = RecordingSurface::new(100, 100);

        draw_sparks(&mut surface, &store, Rgba::rgb([96, 165, 250]));

        assert_eq!(surface.circles()[0].3.alpha(), 0.0);
    }

    #[test]
    fn empty_store_only_clears() {
        let store: ParticleStore<Spark> = ParticleStore::bounded(4);
        let mut surface = RecordingSurface::new(10, 10);
        draw_sparks(&mut surface, &store, Rgba::rgb([0, 0, 0]));
        assert_eq!(surface.ops, vec![Op::Clear]);
    }
}
