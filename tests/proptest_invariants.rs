
use proptest::prelude::*;
use strategies::{arb_literal, arb_path, arb_rule, arb_value};
use typed_rules::{
    and_all, includes, not, or_all, resolve, stringify_rule, stringify_rules, Path, Rule, Value,
};

// ---------------------------------------------------------------------------
// Path composition
//
// Extending a path through field, index and call segments yields exactly the
// concatenated segment text, and that text parses back to the same path.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn path_text_matches_segments((path, text) in arb_path()) {
        prop_assert_eq!(path.as_str(), text.as_str());
        prop_assert_eq!(resolve(&path), text);
    }

    #[test]
    fn path_text_parses_back((path, text) in arb_path()) {
        let parsed = Path::parse(&text);
        prop_assert_eq!(parsed.ok(), Some(path));
    }
}

// ---------------------------------------------------------------------------
// Literal resolution
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn literal_text_is_stable((value, text) in arb_literal()) {
        let first = value.resolve();
        prop_assert_eq!(&first, &text);
        prop_assert_eq!(value.resolve(), first);
    }

    #[test]
    fn float_text_reads_back(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = resolve(v);
        prop_assert_eq!(text.parse::<f64>().ok(), Some(v), "{} did not read back", text);
        prop_assert!(!text.ends_with(".0"));
    }

    #[test]
    fn non_finite_floats_render_null(v in prop::sample::select(
        &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY][..],
    )) {
        prop_assert_eq!(resolve(v), "null");
    }

    #[test]
    fn absent_renders_like_null(n in any::<i64>()) {
        prop_assert_eq!(resolve(None::<i64>), resolve(Value::Null));
        prop_assert_eq!(resolve(Some(n)), n.to_string());
    }

    #[test]
    fn list_substitutes_every_element(items in prop::collection::vec(arb_value(), 0..6)) {
        let expected = format!(
            "[{}]",
            items.iter().map(|(_, text)| text.as_str()).collect::<Vec<_>>().join(", ")
        );
        let list = Value::List(items.into_iter().map(|(value, _)| value).collect());
        prop_assert_eq!(list.resolve(), expected);
    }

    #[test]
    fn map_substitutes_nested_paths(
        (path, text) in arb_path(),
        (literal, literal_text) in arb_literal(),
    ) {
        let value = Value::map([
            ("a", Value::List(vec![Value::Path(path)])),
            ("b", literal),
        ]);
        prop_assert_eq!(value.resolve(), format!("{{ a: [{text}], b: {literal_text} }}"));
    }
}

// ---------------------------------------------------------------------------
// Tree construction and rendering
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn bare_rules_equal_single_slots(
        a in arb_rule(2),
        b in arb_rule(2),
        rest in prop::collection::vec(arb_rule(2), 0..3),
    ) {
        let wrap = |rules: &[Rule]| rules.iter().cloned().map(|r| vec![r]).collect::<Vec<_>>();

        let bare = or_all(a.clone(), b.clone(), rest.clone());
        let slots = or_all(vec![a.clone()], vec![b.clone()], wrap(&rest));
        prop_assert_eq!(&bare, &slots);

        let bare = and_all(a.clone(), b.clone(), rest.clone());
        let slots = and_all(vec![a], vec![b], wrap(&rest));
        prop_assert_eq!(bare, slots);
    }

    #[test]
    fn joins_always_hold_two_slots(
        a in arb_rule(1),
        b in arb_rule(1),
        rest in prop::collection::vec(arb_rule(1), 0..3),
    ) {
        let expected = 2 + rest.len();
        match or_all(a.clone(), b.clone(), rest.clone()) {
            Rule::Or(slots) => prop_assert_eq!(slots.len(), expected),
            other => prop_assert!(false, "expected an || node, got {:?}", other),
        }
        match and_all(a, b, rest) {
            Rule::And(slots) => prop_assert_eq!(slots.len(), expected),
            other => prop_assert!(false, "expected an && node, got {:?}", other),
        }
    }

    #[test]
    fn rendering_is_deterministic(rule in arb_rule(3)) {
        let snapshot = rule.clone();
        let first = stringify_rule(&rule);
        prop_assert_eq!(stringify_rule(&rule), first.clone());
        prop_assert_eq!(rule.to_string(), first);
        prop_assert_eq!(rule, snapshot);
    }

    #[test]
    fn rule_lists_wrap_only_when_joined(rules in prop::collection::vec(arb_rule(2), 1..5)) {
        let joined = rules.iter().map(stringify_rule).collect::<Vec<_>>().join(" && ");
        let rendered = stringify_rules(&rules);
        if rules.len() == 1 {
            prop_assert_eq!(rendered, joined);
        } else {
            prop_assert_eq!(rendered, format!("({joined})"));
        }
    }

    #[test]
    fn includes_renders_item_first(
        (container, container_text) in arb_path(),
        (item, item_text) in arb_literal(),
    ) {
        let rule = includes(container, item);
        prop_assert_eq!(stringify_rule(&rule), format!("{item_text} in {container_text}"));
    }

    #[test]
    fn not_wraps_any_rule(rule in arb_rule(2)) {
        let inner = stringify_rule(&rule);
        prop_assert_eq!(stringify_rule(&not(rule)), format!("!({inner})"));
    }
}
