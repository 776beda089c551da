mod error;
mod grammar;

pub use error::ParseError;

use crate::{Path, RuleType};

/// Parse path text such as `request.resource.data.memberIds[0]` into a [`Path`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a root identifier followed by
/// `.field`, `[index]` or `()` segments.
pub fn parse_path(input: &str) -> Result<Path, ParseError> {
    use winnow::Parser;
    grammar::path
        .parse(input)
        .map_err(|e| ParseError::at(input, e))
}

/// Parse a comma-separated operation key such as `read, write`.
///
/// # Errors
///
/// Returns [`ParseError`] on empty input or an unknown operation name.
pub fn parse_rule_types(input: &str) -> Result<Vec<RuleType>, ParseError> {
    use winnow::Parser;
    grammar::rule_types
        .parse(input)
        .map_err(|e| ParseError::at(input, e))
}
