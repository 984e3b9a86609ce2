use super::*;
use crate::foundation::error::{StyleError, StyleResult};
use crate::inject::surface::SheetSurface;

/// Sheet that refuses any rule containing `blocked`.
struct PickySurface {
    sheet: SheetSurface,
}

impl StyleSurface for PickySurface {
    fn insert_rule(&mut self, group: RuleGroup, rule: &str) -> StyleResult<()> {
        if rule.contains("blocked") {
            return Err(StyleError::injection("blocked by host"));
        }
        self.sheet.insert_rule(group, rule)
    }

    fn clear_group(&mut self, group: RuleGroup) {
        self.sheet.clear_group(group);
    }
}

fn base(text: &str) -> GeneratedRule {
    GeneratedRule::new(text, ContextKind::Base)
}

#[test]
fn fan_out_keeps_identical_order_across_targets() {
    let a = SheetSurface::new();
    let b = SheetSurface::new();
    let mut inj = RuleInjector::new();
    assert!(inj.register_target(TargetId(1), Box::new(a.clone())));
    assert!(inj.register_target(TargetId(2), Box::new(b.clone())));

    inj.inject(base(".a { x: 1; }"));
    inj.inject(GeneratedRule::new(
        "@media q { .m { x: 1; } }",
        ContextKind::Media,
    ));
    inj.inject(GeneratedRule::new(".a:hover { x: 2; }", ContextKind::Pseudo));

    assert_eq!(a.to_css(), b.to_css());
    assert_eq!(
        a.rules(RuleGroup::Base),
        vec![".a { x: 1; }".to_string(), ".a:hover { x: 2; }".to_string()]
    );
    assert_eq!(a.rules(RuleGroup::Media).len(), 1);
}

#[test]
fn late_registration_replays_history_in_order() {
    let mut inj = RuleInjector::new();
    for i in 0..5 {
        inj.inject(base(&format!(".r{i} {{ x: {i}; }}")));
    }
    let late = SheetSurface::new();
    inj.register_target(TargetId(9), Box::new(late.clone()));

    let expected: Vec<String> = (0..5).map(|i| format!(".r{i} {{ x: {i}; }}")).collect();
    assert_eq!(late.rules(RuleGroup::Base), expected);
    assert_eq!(
        inj.groups(TargetId(9)).unwrap().get(RuleGroup::Base),
        expected.as_slice()
    );
}

#[test]
fn duplicate_rules_are_injected_once() {
    let sheet = SheetSurface::new();
    let mut inj = RuleInjector::new();
    inj.register_target(TargetId(1), Box::new(sheet.clone()));
    assert!(inj.inject(base(".a { x: 1; }")));
    assert!(!inj.inject(base(".a { x: 1; }")));
    assert_eq!(sheet.len(), 1);
    assert_eq!(inj.history().len(), 1);
}

#[test]
fn rejection_in_one_target_does_not_block_others() {
    let good = SheetSurface::new();
    let picky = SheetSurface::new();
    let mut inj = RuleInjector::new();
    inj.register_target(
        TargetId(1),
        Box::new(PickySurface {
            sheet: picky.clone(),
        }),
    );
    inj.register_target(TargetId(2), Box::new(good.clone()));

    inj.inject(base(".blocked { x: 1; }"));
    inj.inject(base(".fine { x: 1; }"));

    assert_eq!(picky.rules(RuleGroup::Base), vec![".fine { x: 1; }".to_string()]);
    assert_eq!(good.rules(RuleGroup::Base).len(), 2);
    assert_eq!(inj.groups(TargetId(1)).unwrap().len(), 1);
}

#[test]
fn malformed_rule_is_skipped_per_target() {
    let sheet = SheetSurface::new();
    let mut inj = RuleInjector::new();
    inj.register_target(TargetId(1), Box::new(sheet.clone()));
    inj.inject_rule("not a rule", ContextKind::Base);
    inj.inject_rule(".ok { x: 1; }", ContextKind::Base);
    assert_eq!(sheet.len(), 1);
}

#[test]
fn unregister_only_drops_that_target() {
    let a = SheetSurface::new();
    let b = SheetSurface::new();
    let mut inj = RuleInjector::new();
    inj.register_target(TargetId(1), Box::new(a.clone()));
    inj.register_target(TargetId(2), Box::new(b.clone()));
    assert!(inj.unregister_target(TargetId(1)).is_some());
    assert!(inj.unregister_target(TargetId(1)).is_none());

    inj.inject(base(".a { x: 1; }"));
    assert!(a.is_empty());
    assert_eq!(b.len(), 1);
    assert!(!inj.is_registered(TargetId(1)));
    assert_eq!(inj.target_ids().collect::<Vec<_>>(), vec![TargetId(2)]);
}

#[test]
fn double_registration_is_a_no_op() {
    let sheet = SheetSurface::new();
    let mut inj = RuleInjector::new();
    inj.inject(base(".a { x: 1; }"));
    assert!(inj.register_target(TargetId(1), Box::new(sheet.clone())));
    assert!(!inj.register_target(TargetId(1), Box::new(SheetSurface::new())));
    assert_eq!(sheet.len(), 1);
}

#[test]
fn regenerate_restores_wiped_target() {
    let sheet = SheetSurface::new();
    let mut inj = RuleInjector::new();
    inj.register_target(TargetId(1), Box::new(sheet.clone()));
    inj.inject(base(".a { x: 1; }"));
    inj.inject(GeneratedRule::new(
        ".dark .b { x: 1; }",
        ContextKind::Modifier,
    ));

    // Host wipes its sheet behind the injector's back.
    let mut handle = sheet.clone();
    for group in RuleGroup::ALL {
        handle.clear_group(group);
    }
    assert!(sheet.is_empty());

    assert!(inj.regenerate(TargetId(1)));
    assert_eq!(sheet.len(), 2);
    assert_eq!(inj.groups(TargetId(1)).unwrap().len(), 2);
    assert!(!inj.regenerate(TargetId(42)));
}

#[test]
fn regenerate_all_does_not_duplicate() {
    let a = SheetSurface::new();
    let b = SheetSurface::new();
    let mut inj = RuleInjector::new();
    inj.register_target(TargetId(1), Box::new(a.clone()));
    inj.register_target(TargetId(2), Box::new(b.clone()));
    inj.inject(base(".a { x: 1; }"));
    inj.regenerate_all();
    inj.regenerate_all();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
}
