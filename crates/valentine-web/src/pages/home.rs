//! Home page: the decline button flees the pointer inside its zone while
//! the accept button grows with every escape.

use crate::audio::MusicPlayer;
use crate::confetti::Celebration;
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::{grow_yes, repel_from, within_trigger, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The decline button's rect in zone-local coordinates.
fn local_rect(el: &web::HtmlElement, zone: &web::DomRect) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: (r.left() - zone.left()) as f32,
        top: (r.top() - zone.top()) as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

fn apply_yes_growth(yes: &web::HtmlElement, scale: &Rc<RefCell<f32>>) {
    let mut s = scale.borrow_mut();
    *s = grow_yes(*s);
    dom::set_style(yes, "transform", &format!("translateY(-50%) scale({})", *s));
}

pub fn setup(document: &web::Document, music: MusicPlayer, celebration: Celebration) {
    let Some(zone) = dom::html_by_id(document, "zone") else {
        return;
    };
    let Some(yes_btn) = dom::html_by_id(document, "yesBtn") else {
        return;
    };
    let Some(no_btn) = dom::html_by_id(document, "noBtn") else {
        return;
    };
    let result = dom::html_by_id(document, "result");
    let hint = dom::html_by_id(document, "hint");

    let yes_scale = Rc::new(RefCell::new(1.0_f32));

    // pointer near the decline button repels it and feeds the accept button
    {
        let zone_l = zone.clone();
        let no = no_btn.clone();
        let yes = yes_btn.clone();
        let yes_scale = yes_scale.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let z = zone_l.get_bounding_client_rect();
            let button = local_rect(&no, &z);
            let pointer = Vec2::new(
                ev.client_x() as f32 - z.left() as f32,
                ev.client_y() as f32 - z.top() as f32,
            );
            if !within_trigger(pointer, button) {
                return;
            }
            let new_pos = repel_from(pointer, button, z.width() as f32, z.height() as f32);
            // switch to explicit absolute coordinates, dropping the
            // centering transform the markup starts with
            dom::set_style(&no, "left", &format!("{}px", new_pos.x));
            dom::set_style(&no, "top", &format!("{}px", new_pos.y));
            dom::set_style(&no, "transform", "none");
            apply_yes_growth(&yes, &yes_scale);
        }) as Box<dyn FnMut(_)>);
        _ = zone.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // a direct decline click only feeds the accept button
    {
        let yes = yes_btn.clone();
        let yes_scale = yes_scale.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            apply_yes_growth(&yes, &yes_scale);
        }) as Box<dyn FnMut(_)>);
        _ = no_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // accepting ends the chase: swap views, one burst, one play attempt
    {
        let zone_c = zone.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::hide(&zone_c);
            if let Some(h) = &hint {
                dom::hide(h);
            }
            if let Some(r) = &result {
                dom::show_block(r);
            }
            celebration.burst();
            music.play();
            log::info!("[home] accepted");
        }) as Box<dyn FnMut()>);
        _ = yes_btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
