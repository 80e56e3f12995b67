// burst.rs - One-shot particle burst (DOM variant)
//
// On activation a fixed batch of motes is scattered over the container.
// Rendering places them once and hands the container to the tween engine,
// which owns all later motion. There is nothing to tick.

use tracing::debug;

use super::{AmbientEffect, Input, ParticleStore, RenderTo, rand, seed, spread};
use crate::config::BurstConfig;
use crate::render::{ParticleHost, Tween, TweenKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mote {
    /// Percent of container width
    pub left_pct: f32,
    /// Percent of container height
    pub top_pct: f32,
}

pub struct ParticleBurst {
    motes: ParticleStore<Mote>,
    config: BurstConfig,
    active: bool,
    placed: bool,
    rng: u32,
}

impl ParticleBurst {
    pub fn new(config: BurstConfig) -> Self {
        Self {
            motes: ParticleStore::unbounded(),
            rng: seed(config.seed),
            config,
            active: false,
            placed: false,
        }
    }

    /// Spawn the batch. A second activation without deactivating is ignored.
    pub fn activate(&mut self) {
        if self.active { return; }

        for _ in 0..self.config.batch {
            let left_pct = rand(&mut self.rng) * 100.0;
            let top_pct = rand(&mut self.rng) * 100.0;
            self.motes.add(Mote { left_pct, top_pct });
        }

        self.active = true;
        self.placed = false;
        debug!(batch = self.config.batch, "burst activated");
    }

    pub fn deactivate(&mut self) {
        self.motes.clear();
        self.active = false;
        self.placed = false;
    }

    fn offsets(&mut self, spread_px: f32) -> Vec<(f32, f32)> {
        (0..self.motes.len())
            .map(|_| (spread(&mut self.rng, spread_px), spread(&mut self.rng, spread_px)))
            .collect()
    }

    pub fn motes(&self) -> &ParticleStore<Mote> {
        &self.motes
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }
}

impl AmbientEffect for ParticleBurst {
    fn handle(&mut self, input: Input) {
        match input {
            Input::Activate => self.activate(),
            Input::Deactivate => self.deactivate(),
            Input::PointerMove { .. } | Input::Scroll { .. } => {}
        }
    }
}

impl<H: ParticleHost + ?Sized> RenderTo<H> for ParticleBurst {
    /// Places fresh motes and issues their tweens; later calls are no-ops
    /// until the next activation. Deactivated bursts clear the host.
    fn render(&mut self, host: &mut H) {
        if !self.active {
            host.clear();
            return;
        }
        if self.placed { return; }

        let class = self.config.class_name.as_str();
        self.motes.for_each(|m| host.append(class, m.left_pct, m.top_pct));

        let entrance = self.offsets(self.config.entrance.spread);
        let drift = self.offsets(self.config.drift.spread);

        host.animate(&Tween {
            kind: TweenKind::From,
            profile: &self.config.entrance,
            offsets: entrance,
        });
        host.animate(&Tween {
            kind: TweenKind::To,
            profile: &self.config.drift,
            offsets: drift,
        });

        self.placed = true;
    }
}
