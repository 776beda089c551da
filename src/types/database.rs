use std::fmt;

use super::collection::CollectionRules;

/// Builder for a [`DatabaseRules`] document.
///
/// # Example
///
/// ```
/// use typed_rules::{not_equal, rule, secure, Collection, DatabaseRulesBuilder, Map, RuleType, Value};
///
/// let posts = Collection::<Map>::new("posts");
/// let document = DatabaseRulesBuilder::new()
///     .collection(secure(&posts, [rule::<Map>([RuleType::Read], |ctx| {
///         vec![not_equal(ctx.request.auth().uid(), Value::Null)]
///     })]))
///     .build();
///
/// assert!(document.to_string().contains("allow read: if request.auth.uid != null"));
/// ```
#[derive(Debug, Default)]
pub struct DatabaseRulesBuilder {
    service: Option<String>,
    collections: Vec<CollectionRules>,
}

impl DatabaseRulesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the `service` block. Defaults to
    /// [`DEFAULT_SERVICE`](crate::DEFAULT_SERVICE).
    #[must_use]
    pub fn service(mut self, name: &str) -> Self {
        self.service = Some(name.to_owned());
        self
    }

    /// Append a collection block. Blocks render in the order they were added.
    #[must_use]
    pub fn collection(mut self, rules: CollectionRules) -> Self {
        self.collections.push(rules);
        self
    }

    #[must_use]
    pub fn collections(mut self, rules: impl IntoIterator<Item = CollectionRules>) -> Self {
        self.collections.extend(rules);
        self
    }

    #[must_use]
    pub fn build(self) -> DatabaseRules {
        DatabaseRules {
            service: self
                .service
                .unwrap_or_else(|| crate::stringify::DEFAULT_SERVICE.to_owned()),
            collections: self.collections,
        }
    }
}

/// A complete, immutable rules document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatabaseRules {
    service: String,
    collections: Vec<CollectionRules>,
}

impl DatabaseRules {
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    #[must_use]
    pub fn collections(&self) -> &[CollectionRules] {
        &self.collections
    }

    /// Render the document text.
    #[must_use]
    pub fn render(&self) -> String {
        crate::stringify::render_document(&self.service, &self.collections)
    }

    /// Render the document and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TypedRulesError::Io`](crate::TypedRulesError::Io) if the file
    /// cannot be written.
    pub fn write_to_file(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), crate::TypedRulesError> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

impl fmt::Display for DatabaseRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
