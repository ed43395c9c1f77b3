// Host-side tests for the quotes page renderer.

use valentine_core::*;

#[test]
fn there_are_exactly_six_quotes() {
    assert_eq!(QUOTES.len(), 6);
    for q in QUOTES.iter() {
        assert!(!q.text.is_empty());
        assert!(q.attribution.starts_with("—"));
    }
}

#[test]
fn rendered_markup_contains_one_card_per_quote() {
    let html = render_quotes_html();
    assert_eq!(html.matches("class=\"quoteCard\"").count(), QUOTES.len());
    for q in QUOTES.iter() {
        assert!(html.contains(q.text), "missing quote text: {}", q.text);
        assert!(
            html.contains(q.attribution),
            "missing attribution: {}",
            q.attribution
        );
    }
}

#[test]
fn rendered_markup_preserves_array_order() {
    let html = render_quotes_html();
    let mut last = 0;
    for q in QUOTES.iter() {
        let idx = html[last..]
            .find(q.text)
            .unwrap_or_else(|| panic!("quote out of order: {}", q.text));
        last += idx;
    }
}

#[test]
fn quote_text_is_wrapped_in_curly_quotes() {
    let html = render_quotes_html();
    for q in QUOTES.iter() {
        assert!(html.contains(&format!("“{}”", q.text)));
    }
}
