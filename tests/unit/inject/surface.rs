use super::*;

#[test]
fn well_formed_rules_pass() {
    validate_rule_text(".clr-red { color: red; }").unwrap();
    validate_rule_text("@media (min-width: 10px) { .a { color: red; } }").unwrap();
    validate_rule_text("@keyframes kf-1 { from { opacity: 0; } to { opacity: 1; } }").unwrap();
}

#[test]
fn malformed_rules_are_rejected() {
    for bad in [
        "",
        "color: red;",
        "{ color: red; }",
        ".a { color: red;",
        ".a { color: red; }}",
        ".a } color: red; {",
    ] {
        let err = validate_rule_text(bad).unwrap_err();
        assert!(matches!(err, StyleError::Injection(_)), "{bad}");
    }
}

#[test]
fn clones_share_storage() {
    let sheet = SheetSurface::new();
    let mut handle: Box<dyn StyleSurface> = Box::new(sheet.clone());
    handle.insert_rule(RuleGroup::Base, ".a { b: c; }").unwrap();
    handle
        .insert_rule(RuleGroup::Media, "@media x { .m { b: c; } }")
        .unwrap();
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.rules(RuleGroup::Base), vec![".a { b: c; }".to_string()]);
}

#[test]
fn css_text_orders_groups() {
    let mut sheet = SheetSurface::new();
    sheet
        .insert_rule(RuleGroup::Modifier, ".dark .x { b: c; }")
        .unwrap();
    sheet
        .insert_rule(RuleGroup::Media, "@media x { .m { b: c; } }")
        .unwrap();
    sheet.insert_rule(RuleGroup::Base, ".a { b: c; }").unwrap();
    assert_eq!(
        sheet.to_css(),
        ".a { b: c; }\n@media x { .m { b: c; } }\n.dark .x { b: c; }\n"
    );
}

#[test]
fn clear_group_only_touches_that_group() {
    let mut sheet = SheetSurface::new();
    sheet.insert_rule(RuleGroup::Base, ".a { b: c; }").unwrap();
    sheet
        .insert_rule(RuleGroup::Media, "@media x { .m { b: c; } }")
        .unwrap();
    sheet.clear_group(RuleGroup::Base);
    assert!(sheet.rules(RuleGroup::Base).is_empty());
    assert_eq!(sheet.rules(RuleGroup::Media).len(), 1);
}

#[test]
fn rejected_rule_is_not_stored() {
    let mut sheet = SheetSurface::new();
    assert!(sheet.insert_rule(RuleGroup::Base, "garbage").is_err());
    assert!(sheet.is_empty());
}

#[test]
fn target_id_display() {
    assert_eq!(TargetId::from(7).to_string(), "target#7");
}
