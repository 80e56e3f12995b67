// frame.rs - Per-frame driver
//
// Owns an effect and its render target and runs tick-then-render once per
// display refresh. The loop keeps going while its FrameHandle says so; the
// wasm side reschedules through requestAnimationFrame, tests call frame()
// directly.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::{Input, RenderTo};

/// Shared stop switch for a running frame loop
#[derive(Clone, Debug)]
pub struct FrameHandle {
    running: Rc<Cell<bool>>,
}

impl FrameHandle {
    fn new() -> Self {
        Self { running: Rc::new(Cell::new(true)) }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub struct FrameDriver<E, T> {
    effect: E,
    target: T,
    handle: FrameHandle,
    frames: u64,
}

impl<E: RenderTo<T>, T> FrameDriver<E, T> {
    pub fn new(effect: E, target: T) -> Self {
        Self {
            effect,
            target,
            handle: FrameHandle::new(),
            frames: 0,
        }
    }

    pub fn handle(&self) -> FrameHandle {
        self.handle.clone()
    }

    /// Forward input to the effect. Ignored once stopped.
    pub fn input(&mut self, input: Input) {
        if self.handle.is_running() {
            self.effect.handle(input);
        }
    }

    /// One tick + render. Returns false once the handle is stopped.
    pub fn frame(&mut self) -> bool {
        if !self.handle.is_running() { return false; }

        self.effect.tick();
        self.effect.render(&mut self.target);
        self.frames += 1;
        true
    }

    /// Run up to `n` frames, returning how many actually ran
    pub fn pump(&mut self, n: u64) -> u64 {
        let start = self.frames;
        for _ in 0..n {
            if !self.frame() { break; }
        }
        self.frames - start
    }

    pub fn frames(&self) -> u64 { self.frames }
    pub fn effect(&self) -> &E { &self.effect }
    pub fn effect_mut(&mut self) -> &mut E { &mut self.effect }
    pub fn target(&self) -> &T { &self.target }
    pub fn target_mut(&mut self) -> &mut T { &mut self.target }
}
