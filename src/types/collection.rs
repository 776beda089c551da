use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::parse::ParseError;

use super::context::{resource, Resource, RuleContext};
use super::path::Path;
use super::rule::Rule;

/// A collection of documents of model `M`, identified by its path.
pub struct Collection<M> {
    path: String,
    _model: PhantomData<fn() -> M>,
}

impl<M> Collection<M> {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            _model: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<M> Clone for Collection<M> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<M> fmt::Debug for Collection<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Collection").field(&self.path).finish()
    }
}

/// The id component of a document lookup.
///
/// Every path handle (`Text`, `Number`, `schema!` structs, ...) converts into
/// [`DocumentId::Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentId {
    /// Written into the document path verbatim.
    Literal(String),
    /// Interpolated as `$(<path>)`.
    Path(Path),
}

impl From<&str> for DocumentId {
    fn from(v: &str) -> Self {
        DocumentId::Literal(v.to_owned())
    }
}

impl From<String> for DocumentId {
    fn from(v: String) -> Self {
        DocumentId::Literal(v)
    }
}

impl From<Path> for DocumentId {
    fn from(v: Path) -> Self {
        DocumentId::Path(v)
    }
}

impl From<&Path> for DocumentId {
    fn from(v: &Path) -> Self {
        DocumentId::Path(v.clone())
    }
}

/// Look up a document of `collection` by id.
///
/// The result is a new root:
/// `get(/databases/$(database)/documents/<collection>/<id>)`.
///
/// ```
/// use typed_rules::{get, resolve, Collection, Map, Path};
///
/// let users = Collection::<Map>::new("users");
/// let owner = get(&users, Path::new("resource.data.ownerId"));
/// assert_eq!(
///     resolve(owner),
///     "get(/databases/$(database)/documents/users/$(resource.data.ownerId))"
/// );
/// ```
#[must_use]
pub fn get<M>(collection: &Collection<M>, id: impl Into<DocumentId>) -> Resource<M> {
    let id = match id.into() {
        DocumentId::Literal(id) => id,
        DocumentId::Path(path) => format!("$({path})"),
    };
    resource(&format!(
        "get(/databases/$(database)/documents/{}/{id})",
        collection.path()
    ))
}

/// Operations an `allow` statement can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleType {
    Read,
    Get,
    List,
    Write,
    Create,
    Update,
    Delete,
}

impl RuleType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleType::Read => "read",
            RuleType::Get => "get",
            RuleType::List => "list",
            RuleType::Write => "write",
            RuleType::Create => "create",
            RuleType::Update => "update",
            RuleType::Delete => "delete",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(RuleType::Read),
            "get" => Ok(RuleType::Get),
            "list" => Ok(RuleType::List),
            "write" => Ok(RuleType::Write),
            "create" => Ok(RuleType::Create),
            "update" => Ok(RuleType::Update),
            "delete" => Ok(RuleType::Delete),
            other => Err(ParseError::new(format!("unknown rule type '{other}'"))),
        }
    }
}

fn operation_key(types: &[RuleType]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Operation keys (`"read"`, `"read, write"`, ...) mapped to the rules
/// required for those operations, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    entries: Vec<(String, Vec<Rule>)>,
}

impl Rules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for the operation key written as text, e.g. `"read, write"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the key names an unknown operation.
    pub fn allow(key: &str, rules: Vec<Rule>) -> Result<Self, ParseError> {
        let types = crate::parse::parse_rule_types(key)?;
        let mut out = Self::new();
        out.insert(operation_key(&types), rules);
        Ok(out)
    }

    /// Set the rules for `key`. Last writer wins: an existing key keeps its
    /// position and has its rules replaced.
    pub fn insert(&mut self, key: impl Into<String>, rules: Vec<Rule>) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            log::debug!("overwriting rules for '{key}'");
            entry.1 = rules;
        } else {
            self.entries.push((key, rules));
        }
    }

    /// Merge `other` into this map with [`insert`](Self::insert) semantics.
    #[must_use]
    pub fn merge(mut self, other: Rules) -> Self {
        for (key, rules) in other.entries {
            self.insert(key, rules);
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Rule]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, rules)| rules.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.entries
            .iter()
            .map(|(key, rules)| (key.as_str(), rules.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rules for `types`, produced by `resolver` from the rule roots.
///
/// `types` must name at least one operation.
///
/// ```
/// use typed_rules::{not_equal, rule, Map, RuleType, Value};
///
/// let rules = rule::<Map>([RuleType::Read, RuleType::Write], |ctx| {
///     vec![not_equal(ctx.request.auth().uid(), Value::Null)]
/// });
/// assert!(rules.get("read, write").is_some());
/// ```
#[must_use]
pub fn rule<M>(
    types: impl AsRef<[RuleType]>,
    resolver: impl FnOnce(&RuleContext<M>) -> Vec<Rule>,
) -> Rules {
    let types = types.as_ref();
    debug_assert!(!types.is_empty(), "rule() needs at least one rule type");
    let ctx = RuleContext::new();
    let mut rules = Rules::new();
    rules.insert(operation_key(types), resolver(&ctx));
    rules
}

/// The merged rules of one collection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionRules {
    path: String,
    rules: Rules,
}

impl CollectionRules {
    #[must_use]
    pub fn new(path: impl Into<String>, rules: Rules) -> Self {
        Self {
            path: path.into(),
            rules,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl fmt::Display for CollectionRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::stringify::stringify_collection_rules(self))
    }
}

/// Merge `rules` (later maps win on key collisions) and bind them to `collection`.
#[must_use]
pub fn secure<M>(
    collection: &Collection<M>,
    rules: impl IntoIterator<Item = Rules>,
) -> CollectionRules {
    let merged = rules.into_iter().fold(Rules::new(), Rules::merge);
    CollectionRules::new(collection.path(), merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{equal, includes, not_equal, resolve, Map, MapExpr, PathExpr, Value};

    #[test]
    fn get_with_literal_id() {
        let users = Collection::<Map>::new("users");
        let owner = get(&users, "123");
        assert_eq!(
            resolve(&owner),
            "get(/databases/$(database)/documents/users/123)"
        );
        assert_eq!(
            resolve(owner.data().field("firstName")),
            "get(/databases/$(database)/documents/users/123).data.firstName"
        );
    }

    #[test]
    fn get_with_path_id() {
        let users = Collection::<Map>::new("users");
        let account = resource::<Map>("request.resource");
        let owner = get(&users, account.data().field("ownerId"));
        assert_eq!(
            resolve(owner.data().field("firstName")),
            "get(/databases/$(database)/documents/users/$(request.resource.data.ownerId)).data.firstName"
        );
    }

    #[test]
    fn get_with_any_path_handle() {
        let counters = Collection::<Map>::new("counters");
        let data = resource::<Map>("request.resource").data();
        let by_number = get(&counters, data.get::<crate::Number>("slot", 0_i64));
        assert_eq!(
            resolve(by_number),
            "get(/databases/$(database)/documents/counters/$(request.resource.data.get(\"slot\", 0)))"
        );
        let by_map = get(&counters, &data);
        assert_eq!(
            resolve(by_map),
            "get(/databases/$(database)/documents/counters/$(request.resource.data))"
        );
    }

    #[test]
    fn rule_type_round_trips_through_text() {
        for t in [
            RuleType::Read,
            RuleType::Get,
            RuleType::List,
            RuleType::Write,
            RuleType::Create,
            RuleType::Update,
            RuleType::Delete,
        ] {
            assert_eq!(t.to_string().parse::<RuleType>().unwrap(), t);
        }
        assert!("erase".parse::<RuleType>().is_err());
    }

    #[test]
    fn rule_joins_operation_names() {
        let rules = rule::<Map>([RuleType::Create, RuleType::Update], |_| {
            vec![Rule::Bool(true)]
        });
        assert_eq!(rules.get("create, update"), Some(&[Rule::Bool(true)][..]));
    }

    #[test]
    fn rule_resolver_receives_roots() {
        let rules = rule::<Map>([RuleType::Read], |ctx| {
            vec![
                not_equal(ctx.request.auth().uid(), Value::Null),
                equal(&ctx.resource_id, ctx.request.auth().uid()),
                includes(ctx.resource.data().keys(), "title"),
            ]
        });
        let read = rules.get("read").unwrap();
        assert_eq!(read.len(), 3);
        assert_eq!(
            read[2],
            Rule::In {
                container: "resource.data.keys()".into(),
                item: crate::Operand::Text("\"title\"".into()),
            }
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least one rule type")]
    fn rule_without_types_is_rejected() {
        let _ = rule::<Map>(Vec::<RuleType>::new(), |_| vec![Rule::Bool(true)]);
    }

    #[test]
    fn merge_is_last_writer_wins() {
        let todos = Collection::<Map>::new("todos");
        let secured = secure(
            &todos,
            [
                rule::<Map>([RuleType::Read], |_| vec![Rule::Bool(false)]),
                rule::<Map>([RuleType::Write], |_| vec![Rule::Bool(false)]),
                rule::<Map>([RuleType::Read], |_| vec![Rule::Bool(true)]),
            ],
        );
        let keys: Vec<&str> = secured.rules().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["read", "write"]);
        assert_eq!(secured.rules().get("read"), Some(&[Rule::Bool(true)][..]));
        assert_eq!(secured.path(), "todos");
    }

    #[test]
    fn allow_normalizes_key_text() {
        let rules = Rules::allow("read ,write", vec![Rule::Bool(true)]).unwrap();
        assert!(rules.get("read, write").is_some());
        assert!(Rules::allow("read, erase", vec![]).is_err());
    }

    #[test]
    fn empty_rules() {
        let rules = Rules::new();
        assert!(rules.is_empty());
        assert_eq!(rules.len(), 0);
        assert_eq!(rules.get("read"), None);
    }
}
