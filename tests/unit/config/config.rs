use super::*;
use crate::config::color::{ColorPalette, ColorResolver, IdentityColors};
use crate::config::opts::RegistryOpts;

#[test]
fn empty_document_uses_defaults() {
    let cfg = StyleConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg.registry, RegistryOpts::default());
    assert_eq!(cfg.registry.max_cache_size, 10_000);
    assert_eq!(cfg.registry.default_length_unit, "px");
    assert!(cfg.media.breakpoints.contains_key("md"));
    assert!(cfg.palette.colors.is_empty());
}

#[test]
fn zero_cache_size_is_rejected() {
    let err = StyleConfig::from_json_str(r#"{"registry": {"max_cache_size": 0}}"#).unwrap_err();
    assert!(err.to_string().contains("max_cache_size"));
}

#[test]
fn odd_unit_is_rejected() {
    let opts = RegistryOpts {
        default_length_unit: "p x".to_string(),
        ..RegistryOpts::default()
    };
    assert!(opts.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StyleConfig::from_json_str("{not json").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn missing_file_reports_path() {
    let err = StyleConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn palette_falls_back_to_token() {
    let palette = ColorPalette::from_pairs([("brandPrimary", "#3366ff")]);
    assert_eq!(palette.resolve("brandPrimary"), "#3366ff");
    assert_eq!(palette.resolve("red"), "red");
    assert_eq!(IdentityColors.resolve("x"), "x");
}
