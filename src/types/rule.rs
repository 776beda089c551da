use std::fmt;

use super::path::Path;
use super::value::Value;

/// Binary operators rendered infix: `<left> <op> <right>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Add,
    Sub,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Lte => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Gte => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
        };
        f.write_str(symbol)
    }
}

/// Type names accepted on the right-hand side of `is`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TypeTag {
    Bool,
    Bytes,
    Duration,
    Float,
    Int,
    LatLng,
    List,
    Map,
    Number,
    Path,
    Set,
    String,
    Timestamp,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Bool => "bool",
            TypeTag::Bytes => "bytes",
            TypeTag::Duration => "duration",
            TypeTag::Float => "float",
            TypeTag::Int => "int",
            TypeTag::LatLng => "latlng",
            TypeTag::List => "list",
            TypeTag::Map => "map",
            TypeTag::Number => "number",
            TypeTag::Path => "path",
            TypeTag::Set => "set",
            TypeTag::String => "string",
            TypeTag::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

/// One operand slot of a rule node.
///
/// Operands are resolved to text when the node is built. Nested rules (and
/// the raw leaves `true`, `false`, `null`) are kept as trees so the
/// stringifier can recurse into them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    Text(String),
    Rule(Box<Rule>),
}

impl Operand {
    /// Rule-aware resolution of a value.
    #[must_use]
    pub fn resolve(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => Operand::Rule(Box::new(Rule::Null)),
            Value::Bool(v) => Operand::Rule(Box::new(Rule::Bool(v))),
            other => Operand::Text(other.resolve()),
        }
    }

    #[must_use]
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Operand::Rule(rule) => Some(rule),
            Operand::Text(_) => None,
        }
    }
}

/// An immutable rule expression node.
///
/// Built through the combinators in this crate ([`equal`](crate::equal),
/// [`includes`](crate::includes), [`or`](crate::or), ...) and rendered with
/// [`stringify_rule`](crate::stringify_rule) or `Display`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    Bool(bool),
    Null,
    Binary {
        op: BinaryOp,
        left: Operand,
        right: Operand,
    },
    /// Membership. Stored container-first, rendered `<item> in <container>`.
    In {
        container: String,
        item: Operand,
    },
    Is {
        value: String,
        type_tag: TypeTag,
    },
    Not(Operand),
    /// Each slot is an implicitly ANDed list; slots are ORed.
    Or(Vec<Vec<Rule>>),
    /// Each slot is an implicitly ANDed list; slots are ANDed.
    And(Vec<Vec<Rule>>),
    /// A captured path or literal standing in for a rule, e.g. the boolean
    /// result of `list.hasAll([...])`.
    Literal(Value),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify::stringify_rule(self))
    }
}

impl From<bool> for Rule {
    fn from(v: bool) -> Self {
        Rule::Bool(v)
    }
}

impl From<Value> for Rule {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Rule::Null,
            Value::Bool(b) => Rule::Bool(b),
            other => Rule::Literal(other),
        }
    }
}

impl From<Path> for Rule {
    fn from(v: Path) -> Self {
        Rule::Literal(Value::Path(v))
    }
}

impl From<&Path> for Rule {
    fn from(v: &Path) -> Self {
        Rule::Literal(Value::Path(v.clone()))
    }
}

impl From<Rule> for Operand {
    fn from(v: Rule) -> Self {
        Operand::Rule(Box::new(v))
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::resolve(v)
    }
}

macro_rules! operand_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::resolve(v)
                }
            }
        )*
    };
}

operand_from!(bool, i64, i32, u32, f64, &str, String, Path, &Path);

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::resolve(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(v: Vec<T>) -> Self {
        Operand::resolve(v)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Operand {
    fn from(v: [T; N]) -> Self {
        Operand::resolve(v)
    }
}

/// A list of rules that holds as a whole when every rule in it holds.
///
/// [`or`](crate::or) and [`and`](crate::and) accept a bare rule wherever a
/// list is expected; the conversion wraps it into a one-element list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleList(Vec<Rule>);

impl RuleList {
    #[must_use]
    pub fn into_vec(self) -> Vec<Rule> {
        self.0
    }
}

impl From<Rule> for RuleList {
    fn from(v: Rule) -> Self {
        RuleList(vec![v])
    }
}

impl From<Vec<Rule>> for RuleList {
    fn from(v: Vec<Rule>) -> Self {
        RuleList(v)
    }
}

impl<const N: usize> From<[Rule; N]> for RuleList {
    fn from(v: [Rule; N]) -> Self {
        RuleList(v.into())
    }
}

impl From<Path> for RuleList {
    fn from(v: Path) -> Self {
        RuleList(vec![Rule::from(v)])
    }
}

impl From<bool> for RuleList {
    fn from(v: bool) -> Self {
        RuleList(vec![Rule::Bool(v)])
    }
}
