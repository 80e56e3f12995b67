// dom.rs - Element-backed targets
//
// DomHost owns the burst's <div>s and forwards tweens to the page's global
// `gsap`. OrbElement moves a single element by CSS transform.

use js_sys::{Function, JSON, Reflect};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use super::js_err;
use crate::error::FxError;
use crate::render::{Follower, ParticleHost, Tween};

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, FxError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FxError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| FxError::WrongElement { id: id.to_string(), expected: "html element" })
}

pub struct DomHost {
    document: Document,
    container: HtmlElement,
    gsap: Option<JsValue>,
    spawned: Vec<Element>,
}

impl DomHost {
    pub fn from_id(window: &Window, document: &Document, id: &str) -> Result<Self, FxError> {
        let container = html_element(document, id)?;

        let gsap = Reflect::get(window, &JsValue::from_str("gsap"))
            .ok()
            .filter(|g| !g.is_undefined() && !g.is_null());
        if gsap.is_none() {
            warn!(id, "gsap not loaded, particles will stay static");
        }

        Ok(Self {
            document: document.clone(),
            container,
            gsap,
            spawned: Vec::new(),
        })
    }

    fn spawn(&self, class: &str, left_pct: f32, top_pct: f32) -> Result<Element, FxError> {
        let el = self.document.create_element("div").map_err(js_err)?;
        el.set_class_name(class);

        let html = el
            .dyn_ref::<HtmlElement>()
            .ok_or(FxError::Js("created div is not an HtmlElement".into()))?;
        let style = html.style();
        style.set_property("left", &format!("{left_pct}%")).map_err(js_err)?;
        style.set_property("top", &format!("{top_pct}%")).map_err(js_err)?;

        self.container.append_child(&el).map_err(js_err)?;
        Ok(el)
    }

    fn issue(&self, gsap: &JsValue, tween: &Tween<'_>) -> Result<(), FxError> {
        let vars = JSON::parse(&tween.vars().to_json()?).map_err(js_err)?;

        // gsap calls function-valued props as fn(index, target, targets)
        let (xs, ys): (Vec<f64>, Vec<f64>) = tween
            .offsets
            .iter()
            .map(|&(x, y)| (x as f64, y as f64))
            .unzip();
        set(&vars, "x", &per_index(xs))?;
        set(&vars, "y", &per_index(ys))?;

        let trigger = Reflect::get(&vars, &JsValue::from_str("scrollTrigger")).map_err(js_err)?;
        if trigger.is_object() {
            set(&trigger, "trigger", &self.container)?;
        }

        let method = Reflect::get(gsap, &JsValue::from_str(tween.kind.method()))
            .map_err(js_err)?
            .dyn_into::<Function>()
            .map_err(|_| FxError::Js(format!("gsap.{} is not a function", tween.kind.method())))?;
        method.call2(gsap, &self.container.children(), &vars).map_err(js_err)?;
        Ok(())
    }
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), FxError> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(js_err)?;
    Ok(())
}

/// JS function returning `values[i]`; ownership passes to the JS GC
fn per_index(values: Vec<f64>) -> JsValue {
    Closure::wrap(Box::new(move |i: u32| values.get(i as usize).copied().unwrap_or(0.0))
        as Box<dyn Fn(u32) -> f64>)
    .into_js_value()
}

impl ParticleHost for DomHost {
    fn append(&mut self, class: &str, left_pct: f32, top_pct: f32) {
        match self.spawn(class, left_pct, top_pct) {
            Ok(el) => self.spawned.push(el),
            Err(e) => warn!(%e, "particle element not created"),
        }
    }

    fn animate(&mut self, tween: &Tween<'_>) {
        let Some(gsap) = &self.gsap else { return };
        if let Err(e) = self.issue(gsap, tween) {
            warn!(%e, kind = tween.kind.method(), "tween not issued");
        }
    }

    fn clear(&mut self) {
        for el in self.spawned.drain(..) {
            el.remove();
        }
    }
}

pub struct OrbElement {
    el: HtmlElement,
}

impl OrbElement {
    pub fn from_id(document: &Document, id: &str) -> Result<Self, FxError> {
        Ok(Self { el: html_element(document, id)? })
    }
}

impl Follower for OrbElement {
    fn translate(&mut self, x: f32, y: f32) {
        let transform = format!("translate({x}px, {y}px)");
        if let Err(e) = self.el.style().set_property("transform", &transform) {
            warn!(?e, "orb transform rejected");
        }
    }
}
