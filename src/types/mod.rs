mod collection;
mod context;
mod database;
mod expr;
mod path;
mod rule;
mod schema;
mod value;

pub use collection::{get, rule, secure, Collection, CollectionRules, DocumentId, RuleType, Rules};
pub use context::{resource, Auth, Request, Resource, RuleContext};
pub use database::{DatabaseRules, DatabaseRulesBuilder};
pub use expr::{
    and, and_all, equal, includes, is, less, less_or_equal, more, more_or_equal, not, not_equal,
    or, or_all, sub, sum,
};
pub use path::{proxy, FromPath, Path, PathExpr};
pub use rule::{BinaryOp, Operand, Rule, RuleList, TypeTag};
pub use schema::{
    bool_of, bytes, duration, latlng, Boolean, Bytes, Duration, LatLng, List, Map, MapDiff,
    MapExpr, Number, Set, Text, Timestamp,
};
pub use value::{resolve, Value};
