use super::*;

#[test]
fn default_matches_constants() {
    let config = PageConfig::default();
    assert_eq!(config.scroll_threshold_px, 50.0);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.tablet_breakpoint_px, 1024.0);
    assert_eq!(config.notification_visible_ms, 3000);
    assert_eq!(config.notification_exit_ms, 300);
    assert_eq!(config.visibility_root_margin, "0px 0px -50px 0px");
    assert!(config.seed.is_none());
}

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r##"{ "scrollThresholdPx": 80, "seed": 7, "selectors": { "navbar": "#top" } }"##)
        .expect("partial config should parse");
    assert_eq!(config.scroll_threshold_px, 80.0);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.selectors.navbar, "#top");
    assert_eq!(config.selectors.nav_links, ".nav-link");
    assert_eq!(config.ripple_ms, 600);
}

#[test]
fn unknown_fields_are_ignored() {
    let config = PageConfig::from_json(r#"{ "theme": "dark" }"#).expect("unknown field should be ignored");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = PageConfig::from_json("{ not json").expect_err("malformed config should fail");
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let err = PageConfig::from_json(r#"{ "rippleMs": "slow" }"#).expect_err("string for number should fail");
    assert!(matches!(err, PageError::Config(_)));
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn scroll_threshold_is_exclusive() {
    let config = PageConfig::default();
    assert!(!config.is_scrolled(0.0));
    assert!(!config.is_scrolled(50.0));
    assert!(config.is_scrolled(51.0));
    assert!(config.is_scrolled(50.5));
}

#[test]
fn card_breakpoint_is_inclusive() {
    let config = PageConfig::default();
    assert!(config.hides_cards(768.0));
    assert!(config.hides_cards(1024.0));
    assert!(!config.hides_cards(1025.0));
}
