// Host-side tests for page-kind dispatch.

use valentine_core::PageKind;

#[test]
fn all_four_identifiers_parse_exactly() {
    assert_eq!(PageKind::parse("home"), Some(PageKind::Home));
    assert_eq!(PageKind::parse("date"), Some(PageKind::Date));
    assert_eq!(PageKind::parse("quotes"), Some(PageKind::Quotes));
    assert_eq!(PageKind::parse("final"), Some(PageKind::Final));
}

#[test]
fn parse_is_case_sensitive_and_exact() {
    assert_eq!(PageKind::parse("Home"), None);
    assert_eq!(PageKind::parse("HOME"), None);
    assert_eq!(PageKind::parse("home "), None);
    assert_eq!(PageKind::parse(""), None);
    assert_eq!(PageKind::parse("finale"), None);
}

#[test]
fn missing_attribute_defaults_to_home() {
    assert_eq!(PageKind::from_attr(None), Some(PageKind::Home));
}

#[test]
fn unrecognized_attribute_selects_no_page() {
    assert_eq!(PageKind::from_attr(Some("landing")), None);
    assert_eq!(PageKind::from_attr(Some("date")), Some(PageKind::Date));
}
