use std::fmt;
use std::marker::PhantomData;

use super::path::{FromPath, Path, PathExpr};
use super::rule::Operand;
use super::schema::{Map, Text, Timestamp};
use super::value::Value;

macro_rules! model_handle {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name<M> {
                path: Path,
                _model: PhantomData<fn() -> M>,
            }

            impl<M> Clone for $name<M> {
                fn clone(&self) -> Self {
                    Self::from_path(self.path.clone())
                }
            }

            impl<M> fmt::Debug for $name<M> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name)).field(&self.path).finish()
                }
            }

            impl<M> FromPath for $name<M> {
                fn from_path(path: Path) -> Self {
                    Self {
                        path,
                        _model: PhantomData,
                    }
                }
            }

            impl<M> PathExpr for $name<M> {
                fn path(&self) -> &Path {
                    &self.path
                }
            }

            impl<M> From<$name<M>> for Value {
                fn from(v: $name<M>) -> Self {
                    Value::Path(v.path)
                }
            }

            impl<M> From<&$name<M>> for Value {
                fn from(v: &$name<M>) -> Self {
                    Value::Path(v.path.clone())
                }
            }

            impl<M> From<$name<M>> for Operand {
                fn from(v: $name<M>) -> Self {
                    Operand::Text(v.path.into_string())
                }
            }

            impl<M> From<&$name<M>> for Operand {
                fn from(v: &$name<M>) -> Self {
                    Operand::Text(v.path.as_str().to_owned())
                }
            }
        )*
    };
}

model_handle!(
    /// A document of model `M`, e.g. `resource` or the result of [`get`](crate::get).
    Resource,
    /// The incoming request against a document of model `M`.
    Request,
);

impl<M: FromPath> Resource<M> {
    /// The document fields, `<resource>.data`.
    #[must_use]
    pub fn data(&self) -> M {
        M::from_path(self.field("data"))
    }
}

impl<M> Resource<M> {
    /// The document id, `<resource>.id`.
    #[must_use]
    pub fn id(&self) -> Text {
        Text::from_path(self.field("id"))
    }
}

impl<M> Request<M> {
    #[must_use]
    pub fn auth(&self) -> Auth {
        Auth::from_path(self.field("auth"))
    }

    /// The document as it would be after the write.
    #[must_use]
    pub fn resource(&self) -> Resource<M> {
        Resource::from_path(self.field("resource"))
    }

    #[must_use]
    pub fn time(&self) -> Timestamp {
        Timestamp::from_path(self.field("time"))
    }
}

/// Authentication details of a request, `request.auth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    path: Path,
}

crate::__path_handle_impls!(Auth);

impl Auth {
    /// The signed-in user id, `null` for unauthenticated requests.
    #[must_use]
    pub fn uid(&self) -> Text {
        Text::from_path(self.field("uid"))
    }

    /// The decoded token claims.
    #[must_use]
    pub fn token(&self) -> Map {
        Map::from_path(self.field("token"))
    }
}

/// Root handle for a document of model `M` seeded at `initial_path`.
#[must_use]
pub fn resource<M>(initial_path: &str) -> Resource<M> {
    Resource::from_path(Path::new(initial_path))
}

/// The roots available to a rule resolver.
pub struct RuleContext<M> {
    /// `request`
    pub request: Request<M>,
    /// `resource`, the stored document.
    pub resource: Resource<M>,
    /// `resourceId`, bound by the `match` block.
    pub resource_id: Text,
}

impl<M> RuleContext<M> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            request: Request::from_path(Path::new("request")),
            resource: resource("resource"),
            resource_id: Text::from_path(Path::new("resourceId")),
        }
    }
}

impl<M> Default for RuleContext<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for RuleContext<M> {
    fn clone(&self) -> Self {
        Self {
            request: self.request.clone(),
            resource: self.resource.clone(),
            resource_id: self.resource_id.clone(),
        }
    }
}

impl<M> fmt::Debug for RuleContext<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("request", &self.request)
            .field("resource", &self.resource)
            .field("resource_id", &self.resource_id)
            .finish()
    }
}
