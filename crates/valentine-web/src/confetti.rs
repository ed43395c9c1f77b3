//! Celebration burst wiring over the external `confetti` canvas capability.
//!
//! The capability is a global JS function object exposing
//! `create(canvas, { resize, useWorker })`, which returns an emitter
//! function. Binding happens lazily and exactly once; a page without the
//! canvas, or a load where the library never arrived, leaves every burst a
//! silent no-op.

use crate::dom;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::{finale_shot, stream_shot, EmissionShot, FINALE_DELAY_MS, STREAM_DURATION_MS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to the lazily bound particle emitter. Cloning shares the binding.
#[derive(Clone, Default)]
pub struct Celebration {
    emitter: Rc<RefCell<Option<js_sys::Function>>>,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the particle engine to `#confettiCanvas` on first use.
    fn ensure(&self) -> Option<js_sys::Function> {
        if let Some(f) = self.emitter.borrow().as_ref() {
            return Some(f.clone());
        }
        let document = dom::window_document()?;
        let canvas = document
            .get_element_by_id("confettiCanvas")?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let confetti = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("confetti"))
            .ok()
            .filter(|v| !v.is_undefined())?;
        let create = js_sys::Reflect::get(&confetti, &JsValue::from_str("create"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        let opts = js_sys::Object::new();
        _ = js_sys::Reflect::set(&opts, &JsValue::from_str("resize"), &JsValue::TRUE);
        _ = js_sys::Reflect::set(&opts, &JsValue::from_str("useWorker"), &JsValue::TRUE);
        let emitter = create
            .call2(&confetti, &canvas, &opts)
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        *self.emitter.borrow_mut() = Some(emitter.clone());
        Some(emitter)
    }

    /// Run both burst phases: the 1500 ms per-frame stream and the single
    /// finale 260 ms in. The phases overlap and neither waits on the other.
    pub fn burst(&self) {
        let Some(emitter) = self.ensure() else {
            log::warn!("[burst] no particle capability; skipping");
            return;
        };
        run_stream(emitter.clone());
        schedule_finale(emitter);
    }
}

fn emit(emitter: &js_sys::Function, shot: &EmissionShot) {
    let opts = js_sys::Object::new();
    _ = js_sys::Reflect::set(
        &opts,
        &JsValue::from_str("particleCount"),
        &JsValue::from_f64(shot.particle_count as f64),
    );
    _ = js_sys::Reflect::set(
        &opts,
        &JsValue::from_str("spread"),
        &JsValue::from_f64(shot.spread as f64),
    );
    _ = js_sys::Reflect::set(
        &opts,
        &JsValue::from_str("startVelocity"),
        &JsValue::from_f64(shot.start_velocity as f64),
    );
    _ = js_sys::Reflect::set(
        &opts,
        &JsValue::from_str("ticks"),
        &JsValue::from_f64(shot.ticks as f64),
    );
    let origin = js_sys::Object::new();
    _ = js_sys::Reflect::set(
        &origin,
        &JsValue::from_str("x"),
        &JsValue::from_f64(shot.origin.0 as f64),
    );
    _ = js_sys::Reflect::set(
        &origin,
        &JsValue::from_str("y"),
        &JsValue::from_f64(shot.origin.1 as f64),
    );
    _ = js_sys::Reflect::set(&opts, &JsValue::from_str("origin"), &origin);
    _ = emitter.call1(&JsValue::UNDEFINED, &opts);
}

/// Continuous stream phase: one batch per animation frame until the
/// wall-clock deadline passes. The loop stops by not rescheduling itself.
fn run_stream(emitter: js_sys::Function) {
    let start = Instant::now();
    let mut rng = StdRng::from_entropy();
    // first batch fires synchronously, the rest ride animation frames
    emit(&emitter, &stream_shot(&mut rng));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        emit(&emitter, &stream_shot(&mut rng));
        if start.elapsed().as_millis() < u128::from(STREAM_DURATION_MS) {
            if let Some(w) = web::window() {
                _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One-shot timer for the dense finale emission.
fn schedule_finale(emitter: js_sys::Function) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        emit(&emitter, &finale_shot());
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        FINALE_DELAY_MS,
    );
    closure.forget();
}
