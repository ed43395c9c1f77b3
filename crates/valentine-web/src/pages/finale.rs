//! Final page: one button, one celebration.

use crate::audio::MusicPlayer;
use crate::confetti::Celebration;
use crate::dom;
use web_sys as web;

pub fn setup(document: &web::Document, music: MusicPlayer, celebration: Celebration) {
    dom::add_click_listener(document, "confettiBtn", move || {
        celebration.burst();
        music.play();
    });
}
