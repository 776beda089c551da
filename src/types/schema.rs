//! Typed handles over captured paths.
//!
//! Every handle wraps a [`Path`] and exposes the methods the rules language
//! defines for that type. Calling a method never evaluates anything; it
//! returns a new handle whose path ends in the call.

use std::fmt;
use std::marker::PhantomData;

use super::path::{FromPath, Path, PathExpr};
use super::rule::{Operand, Rule, RuleList};
use super::value::Value;

fn invoke<T: FromPath>(
    target: &(impl PathExpr + ?Sized),
    method: &str,
    args: impl IntoIterator<Item = Value>,
) -> T {
    T::from_path(target.field(method).call(args))
}

macro_rules! handle {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $name {
                path: Path,
            }

            crate::__path_handle_impls!($name);
        )*
    };
}

handle!(
    /// A string.
    Text,
    /// An integer or float.
    Number,
    /// A boolean, usually the result of a method such as `hasAll`.
    Boolean,
    /// A timestamp in UTC with nanosecond accuracy.
    Timestamp,
    /// A duration with nanosecond accuracy.
    Duration,
    /// A byte sequence.
    Bytes,
    /// A geopoint.
    LatLng,
    /// The result of comparing two maps with [`MapExpr::diff`].
    MapDiff,
    /// An untyped map.
    Map,
);

impl From<Boolean> for Rule {
    fn from(v: Boolean) -> Self {
        Rule::Literal(Value::Path(v.path))
    }
}

impl From<Boolean> for RuleList {
    fn from(v: Boolean) -> Self {
        RuleList::from(Rule::from(v))
    }
}

impl Text {
    #[must_use]
    pub fn size(&self) -> Number {
        invoke(self, "size", [])
    }

    #[must_use]
    pub fn lower(&self) -> Text {
        invoke(self, "lower", [])
    }

    #[must_use]
    pub fn upper(&self) -> Text {
        invoke(self, "upper", [])
    }

    #[must_use]
    pub fn trim(&self) -> Text {
        invoke(self, "trim", [])
    }

    /// Full match against a regular expression.
    #[must_use]
    pub fn matches(&self, regex: impl Into<Value>) -> Boolean {
        invoke(self, "matches", [regex.into()])
    }

    #[must_use]
    pub fn split(&self, separator: impl Into<Value>) -> List<Text> {
        invoke(self, "split", [separator.into()])
    }
}

impl Timestamp {
    /// Timestamp with year, month and day only.
    #[must_use]
    pub fn date(&self) -> Timestamp {
        invoke(self, "date", [])
    }

    #[must_use]
    pub fn day(&self) -> Number {
        invoke(self, "day", [])
    }

    /// Day of the week, 1 to 7.
    #[must_use]
    pub fn day_of_week(&self) -> Number {
        invoke(self, "dayOfWeek", [])
    }

    /// Day of the year, 1 to 366.
    #[must_use]
    pub fn day_of_year(&self) -> Number {
        invoke(self, "dayOfYear", [])
    }

    #[must_use]
    pub fn hours(&self) -> Number {
        invoke(self, "hours", [])
    }

    #[must_use]
    pub fn minutes(&self) -> Number {
        invoke(self, "minutes", [])
    }

    #[must_use]
    pub fn month(&self) -> Number {
        invoke(self, "month", [])
    }

    #[must_use]
    pub fn nanos(&self) -> Number {
        invoke(self, "nanos", [])
    }

    #[must_use]
    pub fn seconds(&self) -> Number {
        invoke(self, "seconds", [])
    }

    /// Time portion of the timestamp.
    #[must_use]
    pub fn time(&self) -> Duration {
        invoke(self, "time", [])
    }

    /// Milliseconds since the epoch.
    #[must_use]
    pub fn to_millis(&self) -> Number {
        invoke(self, "toMillis", [])
    }

    #[must_use]
    pub fn year(&self) -> Number {
        invoke(self, "year", [])
    }
}

impl Duration {
    /// Signed nanoseconds portion, -999,999,999 to +999,999,999.
    #[must_use]
    pub fn nanos(&self) -> Number {
        invoke(self, "nanos", [])
    }

    /// Signed seconds portion.
    #[must_use]
    pub fn seconds(&self) -> Number {
        invoke(self, "seconds", [])
    }
}

impl Bytes {
    #[must_use]
    pub fn size(&self) -> Number {
        invoke(self, "size", [])
    }

    #[must_use]
    pub fn to_base64(&self) -> Text {
        invoke(self, "toBase64", [])
    }

    #[must_use]
    pub fn to_hex_string(&self) -> Text {
        invoke(self, "toHexString", [])
    }
}

impl LatLng {
    /// Distance to `other` in meters.
    #[must_use]
    pub fn distance(&self, other: impl Into<Value>) -> Number {
        invoke(self, "distance", [other.into()])
    }

    #[must_use]
    pub fn latitude(&self) -> Number {
        invoke(self, "latitude", [])
    }

    #[must_use]
    pub fn longitude(&self) -> Number {
        invoke(self, "longitude", [])
    }
}

impl MapDiff {
    /// Keys present in the diffed map but not in the compared one.
    #[must_use]
    pub fn added_keys(&self) -> Set<Text> {
        invoke(self, "addedKeys", [])
    }

    /// Union of added, removed and changed keys.
    #[must_use]
    pub fn affected_keys(&self) -> Set<Text> {
        invoke(self, "affectedKeys", [])
    }

    /// Keys present in both maps whose values differ.
    #[must_use]
    pub fn changed_keys(&self) -> Set<Text> {
        invoke(self, "changedKeys", [])
    }

    /// Keys present in the compared map but not in the diffed one.
    #[must_use]
    pub fn removed_keys(&self) -> Set<Text> {
        invoke(self, "removedKeys", [])
    }
}

/// Methods available on every map, typed or not.
///
/// Implemented for [`Map`] and for every struct declared with
/// [`schema!`](crate::schema).
pub trait MapExpr: PathExpr {
    /// Value at `key`, or `default` when the key is absent.
    fn get<V: FromPath>(&self, key: impl Into<Value>, default: impl Into<Value>) -> V {
        invoke(self, "get", [key.into(), default.into()])
    }

    fn keys(&self) -> List<Text> {
        invoke(self, "keys", [])
    }

    fn size(&self) -> Number {
        invoke(self, "size", [])
    }

    fn values(&self) -> List<Path> {
        invoke(self, "values", [])
    }

    fn diff(&self, other: impl Into<Value>) -> MapDiff {
        invoke(self, "diff", [other.into()])
    }
}

impl MapExpr for Map {}

macro_rules! collection_handle {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name<T> {
                path: Path,
                _item: PhantomData<fn() -> T>,
            }

            impl<T> Clone for $name<T> {
                fn clone(&self) -> Self {
                    Self::from_path(self.path.clone())
                }
            }

            impl<T> fmt::Debug for $name<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name)).field(&self.path).finish()
                }
            }

            impl<T> PartialEq for $name<T> {
                fn eq(&self, other: &Self) -> bool {
                    self.path == other.path
                }
            }

            impl<T> FromPath for $name<T> {
                fn from_path(path: Path) -> Self {
                    Self {
                        path,
                        _item: PhantomData,
                    }
                }
            }

            impl<T> PathExpr for $name<T> {
                fn path(&self) -> &Path {
                    &self.path
                }
            }

            impl<T> From<$name<T>> for Value {
                fn from(v: $name<T>) -> Self {
                    Value::Path(v.path)
                }
            }

            impl<T> From<&$name<T>> for Value {
                fn from(v: &$name<T>) -> Self {
                    Value::Path(v.path.clone())
                }
            }

            impl<T> From<$name<T>> for Operand {
                fn from(v: $name<T>) -> Self {
                    Operand::Text(v.path.into_string())
                }
            }

            impl<T> From<&$name<T>> for Operand {
                fn from(v: &$name<T>) -> Self {
                    Operand::Text(v.path.as_str().to_owned())
                }
            }

            impl<T> $name<T> {
                /// Whether this contains every item of `items`.
                #[must_use]
                pub fn has_all(&self, items: impl Into<Value>) -> Boolean {
                    invoke(self, "hasAll", [items.into()])
                }

                /// Whether this contains at least one item of `items`.
                #[must_use]
                pub fn has_any(&self, items: impl Into<Value>) -> Boolean {
                    invoke(self, "hasAny", [items.into()])
                }

                /// Whether every item of this appears in `items`.
                #[must_use]
                pub fn has_only(&self, items: impl Into<Value>) -> Boolean {
                    invoke(self, "hasOnly", [items.into()])
                }

                #[must_use]
                pub fn size(&self) -> Number {
                    invoke(self, "size", [])
                }
            }
        )*
    };
}

collection_handle!(
    /// An ordered list. Membership is tested with [`includes`](crate::includes).
    List,
    /// An unordered collection without duplicates.
    Set,
);

impl<T: FromPath> List<T> {
    /// The item at `index`, rendered `list[index]`.
    #[must_use]
    pub fn at(&self, index: usize) -> T {
        T::from_path(self.index(index))
    }
}

impl<T> List<T> {
    #[must_use]
    pub fn join(&self, separator: impl Into<Value>) -> Text {
        invoke(self, "join", [separator.into()])
    }

    #[must_use]
    pub fn to_set(&self) -> Set<T> {
        invoke(self, "toSet", [])
    }
}

impl<T> Set<T> {
    /// Items of this set that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: impl Into<Value>) -> Set<T> {
        invoke(self, "difference", [other.into()])
    }

    #[must_use]
    pub fn intersection(&self, other: impl Into<Value>) -> Set<T> {
        invoke(self, "intersection", [other.into()])
    }

    #[must_use]
    pub fn union(&self, other: impl Into<Value>) -> Set<T> {
        invoke(self, "union", [other.into()])
    }
}

/// `bool("<text>")`: converts a string to a boolean.
#[must_use]
pub fn bool_of(text: impl Into<Value>) -> Boolean {
    Boolean::from_path(Path::new("bool").call([text.into()]))
}

/// A bytes literal, `b'<text>'`.
#[must_use]
pub fn bytes(text: &str) -> Bytes {
    Bytes::from_path(Path::new(format!("b'{text}'")))
}

/// Functions of the `duration` namespace.
pub mod duration {
    use std::fmt;

    use super::{Duration, FromPath, Path, PathExpr, Value};

    /// Units accepted by [`value`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DurationUnit {
        Weeks,
        Days,
        Hours,
        Minutes,
        Seconds,
        Milliseconds,
        Nanoseconds,
    }

    impl fmt::Display for DurationUnit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let unit = match self {
                DurationUnit::Weeks => "w",
                DurationUnit::Days => "d",
                DurationUnit::Hours => "h",
                DurationUnit::Minutes => "m",
                DurationUnit::Seconds => "s",
                DurationUnit::Milliseconds => "ms",
                DurationUnit::Nanoseconds => "ns",
            };
            f.write_str(unit)
        }
    }

    fn namespace(function: &str, args: impl IntoIterator<Item = Value>) -> Duration {
        Duration::from_path(Path::new("duration").field(function).call(args))
    }

    /// Absolute value of a duration.
    #[must_use]
    pub fn abs(duration: impl Into<Value>) -> Duration {
        namespace("abs", [duration.into()])
    }

    #[must_use]
    pub fn time(
        hours: impl Into<Value>,
        mins: impl Into<Value>,
        secs: impl Into<Value>,
        nanos: impl Into<Value>,
    ) -> Duration {
        namespace(
            "time",
            [hours.into(), mins.into(), secs.into(), nanos.into()],
        )
    }

    /// A duration from a unitless magnitude and a unit.
    #[must_use]
    pub fn value(magnitude: impl Into<Value>, unit: DurationUnit) -> Duration {
        namespace("value", [magnitude.into(), Value::String(unit.to_string())])
    }
}

/// Functions of the `latlng` namespace.
pub mod latlng {
    use super::{FromPath, LatLng, Path, PathExpr, Value};

    /// A point from floating point coordinates.
    #[must_use]
    pub fn value(lat: impl Into<Value>, lng: impl Into<Value>) -> LatLng {
        LatLng::from_path(Path::new("latlng").field("value").call([lat.into(), lng.into()]))
    }
}
