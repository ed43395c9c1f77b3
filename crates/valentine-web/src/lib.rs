#![cfg(target_arch = "wasm32")]
use valentine_core::PageKind;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod confetti;
mod dom;
mod pages;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let music = audio::MusicPlayer::new();
    let celebration = confetti::Celebration::new();

    // the audio widget wires up on every page, whatever the identifier says
    audio::wire_player(&document, &music);

    let attr = document.body().and_then(|b| b.dataset().get("page"));
    let kind = PageKind::from_attr(attr.as_deref());
    log::info!("[boot] page = {:?}", kind);
    match kind {
        Some(PageKind::Home) => pages::home::setup(&document, music, celebration),
        Some(PageKind::Date) => pages::date::setup(&document, music, celebration),
        Some(PageKind::Quotes) => pages::quotes::setup(&document),
        Some(PageKind::Final) => pages::finale::setup(&document, music, celebration),
        None => log::warn!("[boot] unknown page identifier; only the player is active"),
    }
    Ok(())
}
