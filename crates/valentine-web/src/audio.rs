//! Background track: one lazily created looping audio element shared by
//! every page, plus the player widget and the first-gesture autostart.

use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use valentine_core::{AUDIO_SRC, AUDIO_VOLUME};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Handle to the page's single background track. Cloning shares the same
/// underlying element.
#[derive(Clone, Default)]
pub struct MusicPlayer {
    el: Rc<RefCell<Option<web::HtmlAudioElement>>>,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and attach the audio element on first use; every later call
    /// returns the same element.
    pub fn ensure(&self) -> Option<web::HtmlAudioElement> {
        if let Some(a) = self.el.borrow().as_ref() {
            return Some(a.clone());
        }
        let document = dom::window_document()?;
        let body = document.body()?;
        let a = document
            .create_element("audio")
            .ok()?
            .dyn_into::<web::HtmlAudioElement>()
            .ok()?;
        a.set_src(AUDIO_SRC);
        a.set_loop(true);
        a.set_preload("auto");
        a.set_volume(AUDIO_VOLUME);
        _ = body.append_child(&a);
        *self.el.borrow_mut() = Some(a.clone());
        Some(a)
    }

    /// Best-effort playback. A rejected play promise means the autoplay
    /// policy wants a user gesture first; the rejection is discarded and
    /// the next gesture-driven call succeeds.
    pub fn play(&self) {
        if let Some(a) = self.ensure() {
            if let Ok(promise) = a.play() {
                spawn_local(async move {
                    _ = JsFuture::from(promise).await;
                });
            }
        }
    }

    pub fn pause(&self) {
        if let Some(a) = self.ensure() {
            _ = a.pause();
        }
    }

    /// Flip play/pause; returns whether playback is running afterwards.
    pub fn toggle(&self) -> bool {
        let Some(a) = self.ensure() else {
            return false;
        };
        if a.paused() {
            self.play();
        } else {
            _ = a.pause();
        }
        !a.paused()
    }

    pub fn is_playing(&self) -> bool {
        self.ensure().map(|a| !a.paused()).unwrap_or(false)
    }
}

fn refresh_widget(music: &MusicPlayer, btn: &web::HtmlElement, label: &web::HtmlElement) {
    let on = music.is_playing();
    btn.set_text_content(Some(if on { "Pause" } else { "Play" }));
    label.set_text_content(Some(if on {
        "Playing: Until I Found You"
    } else {
        "Tap Play for music"
    }));
}

/// Wire the always-present player widget and the first-gesture autostart.
/// Runs on every page regardless of page kind; a page without the widget
/// markup gets neither.
pub fn wire_player(document: &web::Document, music: &MusicPlayer) {
    if document.get_element_by_id("player").is_none() {
        return;
    }
    let Some(btn) = dom::html_by_id(document, "musicBtn") else {
        return;
    };
    let Some(label) = dom::html_by_id(document, "musicLabel") else {
        return;
    };
    _ = music.ensure();

    {
        let music = music.clone();
        let btn_c = btn.clone();
        let label_c = label.clone();
        let closure = Closure::wrap(Box::new(move || {
            let on = music.toggle();
            log::info!("[music] toggled, playing={}", on);
            refresh_widget(&music, &btn_c, &label_c);
        }) as Box<dyn FnMut()>);
        _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    wire_gesture_kick(music, &btn, &label);
    refresh_widget(music, &btn, &label);
}

/// Try to start playback once the user interacts anywhere on the page.
/// Both listeners register with `once`; the flag keeps the second event
/// from issuing a duplicate play attempt.
fn wire_gesture_kick(music: &MusicPlayer, btn: &web::HtmlElement, label: &web::HtmlElement) {
    static KICKED: AtomicBool = AtomicBool::new(false);
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pointerdown", "keydown"] {
        let music = music.clone();
        let btn = btn.clone();
        let label = label.clone();
        let closure = Closure::wrap(Box::new(move || {
            if KICKED.swap(true, Ordering::SeqCst) {
                return;
            }
            log::info!("[music] first gesture, starting playback");
            music.play();
            refresh_widget(&music, &btn, &label);
        }) as Box<dyn FnMut()>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}
