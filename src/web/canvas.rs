// canvas.rs - 2D canvas surface

use std::f64::consts::TAU;

use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::js_err;
use crate::error::FxError;
use crate::render::{Rgba, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_id(document: &Document, id: &str) -> Result<Self, FxError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| FxError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FxError::WrongElement { id: id.to_string(), expected: "canvas" })?;

        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(FxError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FxError::NoContext)?;

        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, w: u32, h: u32) {
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            trace!(?e, radius, "arc rejected");
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}
