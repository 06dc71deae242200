use super::*;

#[test]
fn missing_element_means_defaults() {
    let config = parse_inline(None).expect("defaults");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn blank_body_means_defaults() {
    let config = parse_inline(Some("  \n ")).expect("defaults");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn body_overrides_fields() {
    let config = parse_inline(Some(r#" { "resizeDebounceMs": 100 } "#)).expect("override");
    assert_eq!(config.resize_debounce_ms, 100);
    assert_eq!(config.notification_visible_ms, 3000);
}

#[test]
fn malformed_body_is_an_error() {
    let err = parse_inline(Some("{ oops")).expect_err("malformed");
    assert!(matches!(err, PageError::Config(_)));
}
