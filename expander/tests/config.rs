use expander::{Easing, ExpandableConfig, Orientation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Wrapper {
    row: ExpandableConfig,
}

fn parse(toml: &str) -> Result<ExpandableConfig, toml::de::Error> {
    toml::from_str::<Wrapper>(toml).map(|wrapper| wrapper.row)
}

#[test]
fn test_empty_table_uses_defaults() {
    let config = parse("[row]\n").unwrap();
    assert_eq!(config, ExpandableConfig::default());
    assert_eq!(config.duration_ms, 300);
    assert!(!config.expanded);
    assert_eq!(config.orientation, Orientation::Vertical);
    assert_eq!(config.parallax, 1.0);
    assert_eq!(config.easing, Easing::FastOutSlowIn);
}

#[test]
fn test_orientation_by_name_or_value() {
    let named = parse("[row]\norientation = \"horizontal\"\n").unwrap();
    assert_eq!(named.orientation, Orientation::Horizontal);

    let numeric = parse("[row]\norientation = 0\n").unwrap();
    assert_eq!(numeric.orientation, Orientation::Horizontal);

    let vertical = parse("[row]\norientation = 1\n").unwrap();
    assert_eq!(vertical.orientation, Orientation::Vertical);
}

#[test]
fn test_orientation_out_of_range_is_rejected() {
    assert!(parse("[row]\norientation = 2\n").is_err());
    assert!(parse("[row]\norientation = \"diagonal\"\n").is_err());
}

#[test]
fn test_easing_variants() {
    let linear = parse("[row]\neasing = \"linear\"\n").unwrap();
    assert_eq!(linear.easing, Easing::Linear);

    let standard = parse("[row]\neasing = \"fast-out-slow-in\"\n").unwrap();
    assert_eq!(standard.easing, Easing::FastOutSlowIn);

    let overshoot = parse("[row]\neasing = { overshoot = { tension = 1.5 } }\n").unwrap();
    assert_eq!(overshoot.easing, Easing::Overshoot { tension: 1.5 });

    let default_tension = parse("[row]\neasing = { overshoot = {} }\n").unwrap();
    assert_eq!(default_tension.easing, Easing::overshoot());
}

#[test]
fn test_full_row_table() {
    let config = parse(
        "[row]\nduration_ms = 120\nexpanded = true\nparallax = 0.25\norientation = \"vertical\"\n",
    )
    .unwrap();
    assert_eq!(config.duration().as_millis(), 120);
    assert!(config.expanded);
    assert_eq!(config.parallax, 0.25);
}

#[test]
fn test_builder_clamps_parallax() {
    assert_eq!(ExpandableConfig::new().with_parallax(-0.5).parallax, 0.0);
    assert_eq!(ExpandableConfig::new().with_parallax(2.0).parallax, 1.0);
    assert_eq!(ExpandableConfig::new().with_parallax(0.3).parallax, 0.3);
}
