// web/ - Browser bindings
//
// Mount functions wire an effect to real page objects: event listeners feed
// the driver, requestAnimationFrame runs it. None of them throw into JS.
// Failures are logged and the page simply goes without the effect.

mod canvas;
mod dom;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, info, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, MouseEvent, Window};

use crate::config::{BurstConfig, OrbConfig, TrailConfig};
use crate::error::FxError;
use crate::frame::{FrameDriver, FrameHandle};
use crate::render::Surface;
use crate::sim::{AmbientEffect, CursorOrb, CursorTrail, Input, ParticleBurst, RenderTo};

use canvas::CanvasSurface;
use dom::{DomHost, OrbElement};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

pub(crate) fn js_err(e: JsValue) -> FxError {
    FxError::Js(format!("{e:?}"))
}

fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or(FxError::NoWindow)
}

fn document(window: &Window) -> Result<Document, FxError> {
    window.document().ok_or(FxError::NoDocument)
}

fn viewport(window: &Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

fn random_seed() -> u32 {
    (js_sys::Math::random() * u32::MAX as f64) as u32
}

fn report<T>(what: &str, r: Result<T, FxError>) -> Option<T> {
    r.map_err(|e| warn!(%e, what, "effect not mounted")).ok()
}

fn pointer(e: &Event) -> Option<Input> {
    let m = e.dyn_ref::<MouseEvent>()?;
    Some(Input::PointerMove { x: m.client_x() as f32, y: m.client_y() as f32 })
}

/// Event listener that unregisters itself when dropped
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(
        target: &EventTarget,
        event: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, FxError> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            trace!(?e, event = self.event, "listener not removed");
        }
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame loop around a shared driver.
///
/// The callback reschedules itself through a weak slot; cancelling drops the
/// closure after revoking the pending request so the browser never calls a
/// freed callback.
struct FrameLoop {
    window: Window,
    slot: FrameSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    fn start<E, T>(window: &Window, driver: Rc<RefCell<FrameDriver<E, T>>>) -> Result<Self, FxError>
    where
        E: RenderTo<T> + 'static,
        T: 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let weak: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&slot);
        let win = window.clone();
        let pending_cb = pending.clone();
        let cb = Closure::wrap(Box::new(move || {
            pending_cb.set(None);
            if !driver.borrow_mut().frame() {
                debug!("frame loop stopped");
                return;
            }

            let Some(slot) = weak.upgrade() else { return };
            let slot = slot.borrow();
            let Some(cb) = slot.as_ref() else { return };
            match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => pending_cb.set(Some(id)),
                Err(e) => warn!(?e, "requestAnimationFrame failed"),
            }
        }) as Box<dyn FnMut()>);

        let id = window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(js_err)?;
        pending.set(Some(id));
        *slot.borrow_mut() = Some(cb);

        Ok(Self { window: window.clone(), slot, pending })
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                trace!(?e, id, "cancelAnimationFrame failed");
            }
        }
        self.slot.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Handle to a frame-driven effect (cursor trail, cursor orb)
#[wasm_bindgen]
pub struct EffectHandle {
    frame: FrameHandle,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl EffectHandle {
    /// Stop the frame loop and detach every listener
    pub fn stop(&mut self) {
        self.frame.stop();
        self.frame_loop.cancel();
        self.listeners.clear();
        info!("effect stopped");
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_running()
    }
}

/// Mount the cursor trail on a full-viewport canvas
#[wasm_bindgen]
pub fn mount_cursor_trail(canvas_id: &str, config: Option<String>) -> Option<EffectHandle> {
    report("cursor trail", try_mount_trail(canvas_id, config.as_deref()))
}

fn try_mount_trail(canvas_id: &str, config: Option<&str>) -> Result<EffectHandle, FxError> {
    let window = window()?;
    let document = document(&window)?;

    let mut config = config.map(TrailConfig::from_json).transpose()?.unwrap_or_default();
    config.seed.get_or_insert_with(random_seed);

    let mut surface = CanvasSurface::from_id(&document, canvas_id)?;
    let (w, h) = viewport(&window);
    surface.resize(w, h);

    let driver = Rc::new(RefCell::new(FrameDriver::new(CursorTrail::new(config), surface)));
    let mut listeners = Vec::new();

    let d = driver.clone();
    listeners.push(Listener::add(&window, "mousemove", move |e| {
        if let Some(input) = pointer(&e) {
            d.borrow_mut().input(input);
        }
    })?);

    // Only the pixel buffer follows the viewport; live sparks keep their state
    let d = driver.clone();
    let win = window.clone();
    listeners.push(Listener::add(&window, "resize", move |_| {
        let (w, h) = viewport(&win);
        debug!(w, h, "trail canvas resized");
        d.borrow_mut().target_mut().resize(w, h);
    })?);

    let frame = driver.borrow().handle();
    let frame_loop = FrameLoop::start(&window, driver)?;
    info!(canvas_id, w, h, "cursor trail mounted");

    Ok(EffectHandle { frame, frame_loop, listeners })
}

/// Mount the cursor-following orb on an existing element
#[wasm_bindgen]
pub fn mount_cursor_orb(element_id: &str, config: Option<String>) -> Option<EffectHandle> {
    report("cursor orb", try_mount_orb(element_id, config.as_deref()))
}

fn try_mount_orb(element_id: &str, config: Option<&str>) -> Result<EffectHandle, FxError> {
    let window = window()?;
    let document = document(&window)?;

    let mut config = config.map(OrbConfig::from_json).transpose()?.unwrap_or_default();
    config.seed.get_or_insert_with(random_seed);

    let orb = OrbElement::from_id(&document, element_id)?;
    let driver = Rc::new(RefCell::new(FrameDriver::new(CursorOrb::new(config), orb)));
    let mut listeners = Vec::new();

    let d = driver.clone();
    listeners.push(Listener::add(&window, "mousemove", move |e| {
        if let Some(input) = pointer(&e) {
            d.borrow_mut().input(input);
        }
    })?);

    let d = driver.clone();
    let win = window.clone();
    listeners.push(Listener::add(&window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or(0.0) as f32;
        d.borrow_mut().input(Input::Scroll { y });
    })?);

    let frame = driver.borrow().handle();
    let frame_loop = FrameLoop::start(&window, driver)?;
    info!(element_id, "cursor orb mounted");

    Ok(EffectHandle { frame, frame_loop, listeners })
}

/// Handle to a one-shot particle burst
#[wasm_bindgen]
pub struct BurstHandle {
    burst: ParticleBurst,
    host: DomHost,
}

#[wasm_bindgen]
impl BurstHandle {
    /// Remove the burst's elements; the section is gone
    pub fn unmount(&mut self) {
        self.burst.handle(Input::Deactivate);
        self.burst.render(&mut self.host);
        debug!("burst unmounted");
    }

    pub fn len(&self) -> usize {
        self.burst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.burst.is_empty()
    }
}

/// Scatter a burst over a section's particle container.
///
/// `preset` names a preset (`contact`, `footer`) or holds a JSON config.
#[wasm_bindgen]
pub fn mount_particle_burst(container_id: &str, preset: &str) -> Option<BurstHandle> {
    report("particle burst", try_mount_burst(container_id, preset))
}

fn try_mount_burst(container_id: &str, preset: &str) -> Result<BurstHandle, FxError> {
    let window = window()?;
    let document = document(&window)?;

    let mut config = BurstConfig::parse(preset)?;
    config.seed.get_or_insert_with(random_seed);

    let mut host = DomHost::from_id(&window, &document, container_id)?;
    let mut burst = ParticleBurst::new(config);
    burst.handle(Input::Activate);
    burst.render(&mut host);
    info!(container_id, count = burst.len(), "particle burst mounted");

    Ok(BurstHandle { burst, host })
}
