/// Default maximum number of nested arrays and objects accepted by the parser.
///
/// The limit protects the recursive descent into containers from exhausting
/// the stack on adversarial input. It is not a property of the JSON grammar and
/// can be raised or lowered through [`ParserOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use bytejson::{JsonParser, ParserOptions};
///
/// let parser = JsonParser::new(ParserOptions { max_depth: 2 });
/// assert!(parser.parse(b"[[1]]").is_ok());
/// assert!(parser.parse(b"[[[1]]]").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of arrays and objects that may be open at once.
    ///
    /// Opening one more container than this fails with
    /// [`JsonError::TooManyNestedArraysOrObjects`] at the index of the
    /// offending bracket.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`] (512)
    ///
    /// [`JsonError::TooManyNestedArraysOrObjects`]: crate::JsonError::TooManyNestedArraysOrObjects
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
