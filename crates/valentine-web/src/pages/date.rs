//! Date page: each decline shrinks and dims the button until the fourth
//! locks it out of reach; accepting works from any attempt count.

use crate::audio::MusicPlayer;
use crate::confetti::Celebration;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::DeclineState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply_shrink(no: &web::HtmlElement, st: &DeclineState) {
    dom::set_style(
        no,
        "transform",
        &format!("translateY(-50%) scale({})", st.scale()),
    );
    dom::set_style(no, "filter", &format!("brightness({})", st.brightness()));
}

/// Terminal state: non-interactive and parked off the click path.
fn lock_decline(no: &web::HtmlElement) {
    if let Some(btn) = no.dyn_ref::<web::HtmlButtonElement>() {
        btn.set_disabled(true);
    }
    dom::set_style(no, "opacity", "0.35");
    dom::set_style(no, "cursor", "not-allowed");
    dom::set_style(no, "left", "80%");
    dom::set_style(no, "top", "70%");
    dom::set_style(no, "position", "absolute");
    dom::set_style(no, "transform", "scale(0.25)");
}

pub fn setup(document: &web::Document, music: MusicPlayer, celebration: Celebration) {
    let Some(yes_btn) = dom::html_by_id(document, "yesBtn") else {
        return;
    };
    let Some(no_btn) = dom::html_by_id(document, "noBtn") else {
        return;
    };
    let msg = dom::html_by_id(document, "noMsg");
    let result = dom::html_by_id(document, "result");

    let state = Rc::new(RefCell::new(DeclineState::new()));
    apply_shrink(&no_btn, &state.borrow());

    // decline: count the attempt, shrink, dim, taunt; the fourth locks it
    {
        let no = no_btn.clone();
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let mut st = state.borrow_mut();
            st.register_decline();
            if let Some(m) = &msg {
                m.set_text_content(Some(st.message()));
            }
            apply_shrink(&no, &st);
            if st.locked() {
                lock_decline(&no);
                log::info!("[date] decline locked after {} attempts", st.attempts());
            }
        }) as Box<dyn FnMut(_)>);
        _ = no_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // accept: reachable from every attempt count
    {
        let closure = Closure::wrap(Box::new(move || {
            if let Some(r) = &result {
                dom::show_block(r);
            }
            celebration.burst();
            music.play();
            log::info!("[date] accepted");
        }) as Box<dyn FnMut()>);
        _ = yes_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
