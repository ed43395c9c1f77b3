//! Quotes page: one-shot render of the fixed quote cards.

use valentine_core::render_quotes_html;
use web_sys as web;

pub fn setup(document: &web::Document) {
    let Some(wrap) = document.get_element_by_id("quotes") else {
        return;
    };
    wrap.set_inner_html(&render_quotes_html());
}
