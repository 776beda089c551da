/// Join two or more slots with `||`.
///
/// Each argument is a bare [`Rule`](crate::Rule), a `Vec<Rule>` or an array of
/// rules; bare rules are wrapped into one-element slots.
///
/// ```
/// use typed_rules::{equal, or, stringify_rule};
///
/// let rule = or!(equal(1_i64, 1_i64), vec![equal(2_i64, 2_i64)], equal(3_i64, 3_i64));
/// assert_eq!(stringify_rule(&rule), "(1 == 1 || 2 == 2 || 3 == 3)");
/// ```
#[macro_export]
macro_rules! or {
    ($a:expr, $b:expr $(, $rest:expr)* $(,)?) => {
        $crate::or_all(
            $crate::RuleList::from($a),
            $crate::RuleList::from($b),
            ::std::vec::Vec::<$crate::RuleList>::from([$($crate::RuleList::from($rest)),*]),
        )
    };
}

/// Join two or more slots with `&&`. Accepts the same arguments as [`or!`].
#[macro_export]
macro_rules! and {
    ($a:expr, $b:expr $(, $rest:expr)* $(,)?) => {
        $crate::and_all(
            $crate::RuleList::from($a),
            $crate::RuleList::from($b),
            ::std::vec::Vec::<$crate::RuleList>::from([$($crate::RuleList::from($rest)),*]),
        )
    };
}

/// Declare typed schema structs whose accessors extend the captured path.
///
/// Each field is `accessor: Type` or `accessor: Type = "ruleName"` when the
/// name in the rules differs from the Rust accessor. Field types must
/// implement [`FromPath`](crate::FromPath): the handles in this crate or
/// other `schema!` structs.
///
/// ```
/// use typed_rules::{schema, resolve, resource, List, Text};
///
/// schema! {
///     pub struct Account {
///         owner_id: Text = "ownerId",
///         member_ids: List<Text> = "memberIds",
///     }
/// }
///
/// let account = resource::<Account>("request.resource");
/// assert_eq!(resolve(account.data().member_ids().at(0)), "request.resource.data.memberIds[0]");
/// ```
#[macro_export]
macro_rules! schema {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty $(= $key:literal)?
            ),* $(,)?
        }
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            $vis struct $name {
                path: $crate::Path,
            }

            $crate::__path_handle_impls!($name);

            impl $crate::MapExpr for $name {}

            impl $name {
                $(
                    $(#[$field_meta])*
                    #[must_use]
                    pub fn $field(&self) -> $ty {
                        <$ty as $crate::FromPath>::from_path($crate::PathExpr::field(
                            self,
                            $crate::__schema_key!($field $(, $key)?),
                        ))
                    }
                )*
            }
        )+
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __schema_key {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __path_handle_impls {
    ($name:ident) => {
        impl $crate::FromPath for $name {
            fn from_path(path: $crate::Path) -> Self {
                Self { path }
            }
        }

        impl $crate::PathExpr for $name {
            fn path(&self) -> &$crate::Path {
                &self.path
            }
        }

        impl ::std::convert::From<$name> for $crate::Value {
            fn from(v: $name) -> Self {
                $crate::Value::Path(v.path)
            }
        }

        impl ::std::convert::From<&$name> for $crate::Value {
            fn from(v: &$name) -> Self {
                $crate::Value::Path(v.path.clone())
            }
        }

        impl ::std::convert::From<$name> for $crate::Operand {
            fn from(v: $name) -> Self {
                $crate::Operand::Text(v.path.into_string())
            }
        }

        impl ::std::convert::From<&$name> for $crate::Operand {
            fn from(v: &$name) -> Self {
                $crate::Operand::Text(v.path.as_str().to_owned())
            }
        }

        impl ::std::convert::From<$name> for $crate::DocumentId {
            fn from(v: $name) -> Self {
                $crate::DocumentId::Path(v.path)
            }
        }

        impl ::std::convert::From<&$name> for $crate::DocumentId {
            fn from(v: &$name) -> Self {
                $crate::DocumentId::Path(v.path.clone())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.path, f)
            }
        }
    };
}
