//! Decorative particle effects for the landing page.
//!
//! Three effects share one [`sim::AmbientEffect`] interface:
//! - [`sim::CursorTrail`]: capacity-gated sparks dropped by pointer moves,
//!   aged every frame and drawn on a canvas
//! - [`sim::ParticleBurst`]: a one-shot batch of positioned elements whose
//!   motion belongs to the page's tween engine
//! - [`sim::CursorOrb`]: a glow easing toward the pointer
//!
//! [`frame::FrameDriver`] runs tick-then-render per display refresh behind a
//! stoppable [`frame::FrameHandle`]. On wasm32 the `web` module binds all of
//! it to the DOM and exports the `mount_*` entry points.

pub mod config;
pub mod error;
pub mod frame;
pub mod render;
pub mod sim;

#[cfg(target_arch = "wasm32")]
mod web;

pub use config::{BurstConfig, OrbConfig, TrailConfig, TweenConfig};
pub use error::FxError;
pub use frame::{FrameDriver, FrameHandle};
pub use sim::{AmbientEffect, CursorOrb, CursorTrail, Input, ParticleBurst, RenderTo};
