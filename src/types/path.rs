use std::fmt;

use super::value::Value;

/// A symbolic path such as `request.resource.data.memberIds[0]`.
///
/// A `Path` never touches real data. It only remembers the text one would
/// write in a rule to reach a value. Every extension returns a new `Path`;
/// the receiver is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    path: String,
}

impl Path {
    /// Create a root path from a seed such as `"request"` or `"resource"`.
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self { path: seed.into() }
    }

    /// Parse a textual path like `request.auth.uid` or `list[0].size()`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`](crate::parse::ParseError) if the text is not a
    /// root identifier followed by `.field`, `[index]` or `()` segments.
    pub fn parse(input: &str) -> Result<Self, crate::parse::ParseError> {
        crate::parse::parse_path(input)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }
}

/// Anything that is backed by a captured [`Path`].
///
/// Rust has no live property interception, so field access, indexing and
/// invocation are explicit calls on this trait. Typed handles (see
/// [`schema!`](crate::schema)) build on these three operations.
pub trait PathExpr {
    fn path(&self) -> &Path;

    /// The accumulated path text, unquoted.
    fn raw_path(&self) -> &str {
        self.path().as_str()
    }

    /// `<current>.name`, or `<current>[name]` when `name` is all digits.
    fn field(&self, name: &str) -> Path {
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            Path::new(format!("{}[{name}]", self.raw_path()))
        } else {
            Path::new(format!("{}.{name}", self.raw_path()))
        }
    }

    /// `<current>[index]`.
    fn index(&self, index: usize) -> Path {
        Path::new(format!("{}[{index}]", self.raw_path()))
    }

    /// `<current>(a1, ..., an)` with every argument resolved to rule text.
    fn call<I>(&self, args: I) -> Path
    where
        I: IntoIterator<Item = Value>,
    {
        let args: Vec<String> = args.into_iter().map(|arg| arg.resolve()).collect();
        Path::new(format!("{}({})", self.raw_path(), args.join(", ")))
    }
}

impl PathExpr for Path {
    fn path(&self) -> &Path {
        self
    }
}

/// Construction of a typed handle from a captured path.
pub trait FromPath {
    fn from_path(path: Path) -> Self;
}

impl FromPath for Path {
    fn from_path(path: Path) -> Self {
        path
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Start capturing at `seed`, viewed as the handle type `T`.
///
/// ```
/// use typed_rules::{proxy, resolve, Path, PathExpr};
///
/// let account: Path = proxy("account");
/// assert_eq!(resolve(account.field("memberIds").index(0)), "account.memberIds[0]");
/// ```
#[must_use]
pub fn proxy<T: FromPath>(seed: &str) -> T {
    T::from_path(Path::new(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_appends_dot_segment() {
        let user = Path::new("blahblah");
        assert_eq!(user.field("firstName").as_str(), "blahblah.firstName");
    }

    #[test]
    fn numeric_field_uses_brackets() {
        let account = Path::new("account");
        assert_eq!(
            account.field("memberIds").field("0").as_str(),
            "account.memberIds[0]"
        );
        assert_eq!(account.field("memberIds").index(12).as_str(), "account.memberIds[12]");
    }

    #[test]
    fn call_without_arguments() {
        let foo = Path::new("foo");
        assert_eq!(foo.field("bar").call([]).as_str(), "foo.bar()");
    }

    #[test]
    fn call_resolves_arguments() {
        let qwe = Path::new("qwe");
        let foo = Path::new("foo");
        let list = Value::List(vec![
            Value::Bool(true),
            Value::Int(1),
            Value::from("two"),
            Value::Path(qwe.field("asd").call([])),
        ]);
        let result = foo
            .field("bar")
            .call([list, Value::Path(qwe.field("zxc"))]);
        assert_eq!(
            result.as_str(),
            r#"foo.bar([true, 1, "two", qwe.asd()], qwe.zxc)"#
        );
    }

    #[test]
    fn extension_leaves_original_untouched() {
        let root = Path::new("request");
        let _auth = root.field("auth");
        assert_eq!(root.as_str(), "request");
    }

    #[test]
    fn proxy_builds_root() {
        let p: Path = proxy("resourceId");
        assert_eq!(p.raw_path(), "resourceId");
        assert_eq!(p.to_string(), "resourceId");
    }
}
