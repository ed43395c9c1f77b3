//! Page-kind dispatch, parsed once at startup from `<body data-page>`.

/// Which page controller to activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Date,
    Quotes,
    Final,
}

impl PageKind {
    /// Exact-match parse. An unrecognized identifier selects no page
    /// controller at all; only the always-present audio widget runs.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(PageKind::Home),
            "date" => Some(PageKind::Date),
            "quotes" => Some(PageKind::Quotes),
            "final" => Some(PageKind::Final),
            _ => None,
        }
    }

    /// A missing attribute falls back to the home page; a present but
    /// unrecognized one does not.
    pub fn from_attr(attr: Option<&str>) -> Option<Self> {
        Self::parse(attr.unwrap_or("home"))
    }
}
