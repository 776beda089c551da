use super::rule::{BinaryOp, Operand, Rule, RuleList, TypeTag};
use super::value::Value;

fn binary(op: BinaryOp, a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    Rule::Binary {
        op,
        left: a.into(),
        right: b.into(),
    }
}

/// `a == b`
#[must_use]
pub fn equal(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Eq, a, b)
}

/// `a != b`
#[must_use]
pub fn not_equal(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Neq, a, b)
}

/// `a < b`
#[must_use]
pub fn less(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Lt, a, b)
}

/// `a <= b`
#[must_use]
pub fn less_or_equal(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Lte, a, b)
}

/// `a > b`
#[must_use]
pub fn more(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Gt, a, b)
}

/// `a >= b`
#[must_use]
pub fn more_or_equal(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Gte, a, b)
}

/// `a - b`, usable as an operand of a comparison.
#[must_use]
pub fn sub(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Sub, a, b)
}

/// `a + b`, usable as an operand of a comparison.
#[must_use]
pub fn sum(a: impl Into<Operand>, b: impl Into<Operand>) -> Rule {
    binary(BinaryOp::Add, a, b)
}

/// Membership of `item` in a list, or of a key in a map.
///
/// Renders as `<item> in <container>`.
#[must_use]
pub fn includes(container: impl Into<Value>, item: impl Into<Operand>) -> Rule {
    Rule::In {
        container: container.into().resolve(),
        item: item.into(),
    }
}

/// `value is <type>`
#[must_use]
pub fn is(value: impl Into<Value>, type_tag: TypeTag) -> Rule {
    Rule::Is {
        value: value.into().resolve(),
        type_tag,
    }
}

/// `!(value)`. Nested rules are kept as trees, anything else is resolved.
#[must_use]
pub fn not(value: impl Into<Operand>) -> Rule {
    Rule::Not(value.into())
}

/// Two slots joined with `||`. See [`or_all`] and [`or!`](crate::or!) for more.
#[must_use]
pub fn or(a: impl Into<RuleList>, b: impl Into<RuleList>) -> Rule {
    Rule::Or(vec![a.into().into_vec(), b.into().into_vec()])
}

/// Two slots joined with `&&`. See [`and_all`] and [`and!`](crate::and!) for more.
#[must_use]
pub fn and(a: impl Into<RuleList>, b: impl Into<RuleList>) -> Rule {
    Rule::And(vec![a.into().into_vec(), b.into().into_vec()])
}

/// Two or more slots joined with `||`: `a`, `b`, then `rest` in order.
#[must_use]
pub fn or_all(
    a: impl Into<RuleList>,
    b: impl Into<RuleList>,
    rest: impl IntoIterator<Item = impl Into<RuleList>>,
) -> Rule {
    Rule::Or(slots(a, b, rest))
}

/// Two or more slots joined with `&&`: `a`, `b`, then `rest` in order.
#[must_use]
pub fn and_all(
    a: impl Into<RuleList>,
    b: impl Into<RuleList>,
    rest: impl IntoIterator<Item = impl Into<RuleList>>,
) -> Rule {
    Rule::And(slots(a, b, rest))
}

fn slots(
    a: impl Into<RuleList>,
    b: impl Into<RuleList>,
    rest: impl IntoIterator<Item = impl Into<RuleList>>,
) -> Vec<Vec<Rule>> {
    let head: [RuleList; 2] = [a.into(), b.into()];
    head.into_iter()
        .chain(rest.into_iter().map(Into::into))
        .map(RuleList::into_vec)
        .collect()
}
