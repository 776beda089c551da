use typed_rules::parse::{parse_path, parse_rule_types};
use typed_rules::{not_equal, stringify_rule, Path, PathExpr, RuleType, Rules, Value};

#[test]
fn parse_path_and_build_rule() {
    let uid = parse_path("request.auth.uid").unwrap();
    assert_eq!(uid, Path::new("request").field("auth").field("uid"));
    assert_eq!(
        stringify_rule(&not_equal(uid, Value::Null)),
        "request.auth.uid != null"
    );
}

#[test]
fn parse_path_with_index_and_calls() {
    let path = Path::parse("request.resource.data.memberIds[0].size()").unwrap();
    assert_eq!(
        path,
        Path::new("request")
            .field("resource")
            .field("data")
            .field("memberIds")
            .index(0)
            .field("size")
            .call([])
    );
}

#[test]
fn parse_path_accepts_dollar_identifiers() {
    assert_eq!(parse_path("$database").unwrap().as_str(), "$database");
}

#[test]
fn parse_path_rejects_malformed_input() {
    for input in ["", "a..b", "a.", "1abc", "a[x]", "a[1", "a b", "a.b != null"] {
        let err = parse_path(input).unwrap_err();
        assert!(
            err.message().starts_with(&format!("invalid input '{input}'")),
            "unexpected message for {input:?}: {err}"
        );
    }
}

#[test]
fn parse_rule_types_in_order() {
    assert_eq!(
        parse_rule_types("create, update,delete").unwrap(),
        vec![RuleType::Create, RuleType::Update, RuleType::Delete]
    );
    assert_eq!(parse_rule_types("  read ").unwrap(), vec![RuleType::Read]);
}

#[test]
fn parse_rule_types_rejects_unknown_and_empty() {
    assert!(parse_rule_types("").is_err());
    assert!(parse_rule_types("read,").is_err());
    assert!(parse_rule_types("read, erase").is_err());
}

#[test]
fn allow_from_text_key() {
    let rules = Rules::allow("get,list", vec![true.into()]).unwrap();
    assert_eq!(rules.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["get, list"]);
}
