// render/ - Output targets for the effects
//
// Effects never touch the browser directly. They draw through these traits:
//   Surface      - immediate-mode 2D raster (canvas, or an image natively)
//   ParticleHost - container of positioned elements plus a tween engine
//   Follower     - a single element moved by transform

mod canvas;
#[cfg(not(target_arch = "wasm32"))]
mod raster;
mod tween;

pub use canvas::draw_sparks;
#[cfg(not(target_arch = "wasm32"))]
pub use raster::RasterSurface;
pub use tween::{Tween, TweenKind, TweenVars};

/// Fill colour with a straight (non-premultiplied) alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    a: f32,
}

impl Rgba {
    pub fn rgb([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Alpha is clamped; NaN becomes fully transparent
    pub fn with_alpha(self, a: f32) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { a, ..self }
    }

    pub fn alpha(&self) -> f32 { self.a }

    /// CSS colour string, e.g. `rgba(96, 165, 250, 0.8)`
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn resize(&mut self, w: u32, h: u32);
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

/// Container that owns real positioned elements. Motion after placement is
/// the tween engine's job: `animate` is fire-and-forget.
pub trait ParticleHost {
    fn append(&mut self, class: &str, left_pct: f32, top_pct: f32);
    fn animate(&mut self, tween: &Tween<'_>);
    /// Remove every particle element this host appended
    fn clear(&mut self);
}

pub trait Follower {
    fn translate(&mut self, x: f32, y: f32);
}
