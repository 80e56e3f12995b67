// spark.rs - Cursor trail sparks (canvas variant)
//
// Every pointer move tries to drop one spark at the cursor. Sparks drift in
// a straight line, fade and age by one each tick. The store cap is the only
// throttle on fast swipes.

use tracing::trace;

use super::{AmbientEffect, Input, ParticleStore, RenderTo, rand, seed};
use crate::config::TrailConfig;
use crate::render::{Rgba, Surface, draw_sparks};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    // Position
    pub x: f32,
    pub y: f32,

    // Velocity, fixed at spawn
    pub dx: f32,
    pub dy: f32,

    pub radius: f32,
    /// Unclamped; goes negative late in life
    pub opacity: f32,
    /// Ticks remaining
    pub life: i32,
}

impl Spark {
    #[inline]
    fn step(&mut self, fade: f32) {
        self.x += self.dx;
        self.y += self.dy;
        self.opacity -= fade;
        self.life -= 1;
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.life <= 0
    }
}

pub struct CursorTrail {
    sparks: ParticleStore<Spark>,
    config: TrailConfig,
    color: Rgba,
    rng: u32,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            sparks: ParticleStore::bounded(config.max_particles),
            color: Rgba::rgb(config.color),
            rng: seed(config.seed),
            config,
        }
    }

    /// Returns false when the trail is full and the spark was dropped
    pub fn spawn(&mut self, x: f32, y: f32) -> bool {
        if self.sparks.is_full() {
            trace!(x, y, "trail full, spark dropped");
            return false;
        }

        let c = &self.config;
        let rng = &mut self.rng;
        let radius = c.radius_min + rand(rng) * (c.radius_max - c.radius_min);
        let dx = (rand(rng) - 0.5) * 2.0 * c.max_speed;
        let dy = (rand(rng) - 0.5) * 2.0 * c.max_speed;

        self.sparks.add(Spark {
            x,
            y,
            dx,
            dy,
            radius,
            opacity: c.initial_opacity,
            life: c.life,
        })
    }

    /// Advance every spark one tick, then retire the expired ones
    pub fn step(&mut self) {
        let fade = self.config.fade;
        for s in self.sparks.iter_mut() {
            s.step(fade);
        }
        self.sparks.remove_expired(Spark::expired);
    }

    pub fn sparks(&self) -> &ParticleStore<Spark> {
        &self.sparks
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.sparks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparks.is_empty()
    }
}

impl AmbientEffect for CursorTrail {
    fn handle(&mut self, input: Input) {
        match input {
            Input::PointerMove { x, y } => {
                self.spawn(x, y);
            }
            Input::Deactivate => self.sparks.clear(),
            Input::Scroll { .. } | Input::Activate => {}
        }
    }

    fn tick(&mut self) {
        self.step();
    }
}

impl<S: Surface + ?Sized> RenderTo<S> for CursorTrail {
    fn render(&mut self, target: &mut S) {
        draw_sparks(target, &self.sparks, self.color);
    }
}
