//! Typed builder for path-expression security rules.
//!
//! Field paths are captured symbolically with [`Path`] and the typed handles
//! built on it, combined into [`Rule`] trees with combinators such as
//! [`equal`] and [`includes`], and rendered into the Firestore rules language
//! with [`stringify_rule`] and [`DatabaseRules`].
//!
//! ```
//! use typed_rules::{equal, is, not_equal, stringify_rules, FromPath, List, Map, PathExpr, RuleContext, Text, TypeTag, Value};
//!
//! let ctx = RuleContext::<Map>::new();
//! let members: List<Text> = FromPath::from_path(ctx.request.resource().data().field("memberIds"));
//! let rules = vec![
//!     not_equal(ctx.request.auth().uid(), Value::Null),
//!     is(&members, TypeTag::List),
//!     equal(members.size(), 1_i64),
//! ];
//! assert_eq!(
//!     stringify_rules(&rules),
//!     "(request.auth.uid != null && request.resource.data.memberIds is list && request.resource.data.memberIds.size() == 1)"
//! );
//! ```

mod macros;

mod error;
pub mod parse;
mod stringify;
mod types;

pub use error::TypedRulesError;
pub use stringify::{
    stringify_collection_rules, stringify_database_rules, stringify_rule, stringify_rules,
    DEFAULT_SERVICE,
};
pub use types::*;
