//! Fixed quote data and the one-shot card renderer for the quotes page.

/// One quote card: the line itself plus its attribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub attribution: &'static str,
}

/// Rendered top to bottom in this order.
pub const QUOTES: [Quote; 6] = [
    Quote {
        text: "I didn’t know what home felt like until I found it in you.",
        attribution: "— always",
    },
    Quote {
        text: "You’re my favorite kind of magic — the quiet kind that makes everything better.",
        attribution: "— forever",
    },
    Quote {
        text: "If I had one wish, it would be more moments with you.",
        attribution: "— us",
    },
    Quote {
        text: "In every crowd, my eyes still look for you first.",
        attribution: "— me",
    },
    Quote {
        text: "You make ordinary days feel like something worth remembering.",
        attribution: "— always",
    },
    Quote {
        text: "I choose you. Today, tomorrow, and every day after.",
        attribution: "— my heart",
    },
];

/// Build the quote card markup in array order, ready for one `innerHTML`
/// assignment on the page's container.
pub fn render_quotes_html() -> String {
    let mut html = String::new();
    for q in QUOTES.iter() {
        html.push_str(&format!(
            "<div class=\"quoteCard\"><div class=\"q\">“{}”</div><div class=\"a\">{}</div></div>",
            q.text, q.attribution
        ));
    }
    html
}
