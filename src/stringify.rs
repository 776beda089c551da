use crate::{CollectionRules, Operand, Rule};

/// Service name used by [`stringify_database_rules`].
pub const DEFAULT_SERVICE: &str = "cloud.firestore";

/// Render one rule node.
#[must_use]
pub fn stringify_rule(rule: &Rule) -> String {
    match rule {
        Rule::Bool(v) => v.to_string(),
        Rule::Null => "null".to_owned(),
        Rule::Binary { op, left, right } => {
            format!("{} {op} {}", stringify_operand(left), stringify_operand(right))
        }
        Rule::Is { value, type_tag } => format!("{value} is {type_tag}"),
        Rule::In { container, item } => format!("{} in {container}", stringify_operand(item)),
        Rule::Not(operand) => format!("!({})", stringify_operand(operand)),
        Rule::Or(slots) => format!("({})", join_slots(slots, " || ")),
        Rule::And(slots) => format!("({})", join_slots(slots, " && ")),
        Rule::Literal(value) => {
            log::trace!("rendering literal in rule position: {value:?}");
            value.resolve()
        }
    }
}

/// Render a list of rules that must all hold.
///
/// A single rule is rendered bare; two or more are joined with `&&` and
/// wrapped in one pair of parentheses.
#[must_use]
pub fn stringify_rules(rules: &[Rule]) -> String {
    let joined = rules
        .iter()
        .map(stringify_rule)
        .collect::<Vec<_>>()
        .join(" && ");
    if rules.len() > 1 {
        format!("({joined})")
    } else {
        joined
    }
}

fn stringify_operand(operand: &Operand) -> String {
    match operand {
        Operand::Text(text) => text.clone(),
        Operand::Rule(rule) => stringify_rule(rule),
    }
}

fn join_slots(slots: &[Vec<Rule>], separator: &str) -> String {
    slots
        .iter()
        .map(|slot| stringify_rules(slot))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Render a `match /<collection>/{resourceId} { ... }` block.
#[must_use]
pub fn stringify_collection_rules(collection: &CollectionRules) -> String {
    let allows: Vec<String> = collection
        .rules()
        .iter()
        .map(|(key, rules)| indent(&format!("allow {key}: if {}", stringify_rules(rules)), 1))
        .collect();
    format!(
        "match /{}/{{resourceId}} {{\n{}\n}}",
        collection.path(),
        allows.join("\n\n")
    )
}

/// Render a full rules document for the default service.
#[must_use]
pub fn stringify_database_rules(collections: &[CollectionRules]) -> String {
    render_document(DEFAULT_SERVICE, collections)
}

pub(crate) fn render_document(service: &str, collections: &[CollectionRules]) -> String {
    log::debug!(
        "rendering {} collection block(s) for service '{service}'",
        collections.len()
    );
    let blocks: Vec<String> = collections
        .iter()
        .map(|c| indent_all(&stringify_collection_rules(c), 2))
        .collect();
    format!(
        "rules_version = '2';\nservice {service} {{\n  match /databases/{{database}}/documents {{\n{}\n  }}\n}}",
        blocks.join("\n\n")
    )
}

fn indent_all(text: &str, levels: usize) -> String {
    text.split('\n')
        .map(|line| indent(line, levels))
        .collect::<Vec<_>>()
        .join("\n")
}

// Blank lines stay blank.
fn indent(line: &str, levels: usize) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("{}{line}", "  ".repeat(levels))
    }
}
