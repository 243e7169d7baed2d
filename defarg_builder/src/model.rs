/// The data type of a parameter's value.
///
/// Determines which store a parameter resolves into, and which accessor retrieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    /// Text, taken verbatim from the Cli.
    String,
    /// A base-10 `i32`.
    Int,
}

impl std::fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentType::String => write!(f, "STRING"),
            ArgumentType::Int => write!(f, "INT"),
        }
    }
}

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Value of an [`ArgumentType::String`] parameter.
    String(String),
    /// Value of an [`ArgumentType::Int`] parameter.
    Int(i32),
}

impl Value {
    /// The `ArgumentType` tag of this value.
    pub fn argument_type(&self) -> ArgumentType {
        match self {
            Value::String(_) => ArgumentType::String,
            Value::Int(_) => ArgumentType::Int,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
        }
    }
}

pub(crate) const DEFAULT_PREFIX: &str = "--";
pub(crate) const DEFAULT_SECONDARY_PREFIX: &str = "-";
pub(crate) const DEFAULT_SEPARATOR: &str = "=";

/// The tokens which shape long and short form arguments on the Cli.
///
/// * `prefix` introduces the long form: `--name=value`.
/// * `secondary_prefix` introduces the short form: `-n value ...`.
/// * `separator` splits the long form name from its value.
///
/// ### Example
/// ```
/// # use defarg_builder as defarg;
/// use defarg::Syntax;
///
/// let syntax = Syntax::default();
/// assert_eq!(syntax.prefix(), "--");
/// assert_eq!(syntax.secondary_prefix(), "-");
/// assert_eq!(syntax.separator(), "=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    prefix: String,
    secondary_prefix: String,
    separator: String,
}

impl Syntax {
    /// Create a syntax from explicit tokens.
    pub fn new(
        prefix: impl Into<String>,
        secondary_prefix: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            secondary_prefix: secondary_prefix.into(),
            separator: separator.into(),
        }
    }

    /// The long form prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The short form prefix.
    pub fn secondary_prefix(&self) -> &str {
        &self.secondary_prefix
    }

    /// The long form name/value separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub(crate) fn set_prefix(&mut self, prefix: String) {
        self.prefix = prefix;
    }

    pub(crate) fn set_secondary_prefix(&mut self, secondary_prefix: String) {
        self.secondary_prefix = secondary_prefix;
    }

    pub(crate) fn set_separator(&mut self, separator: String) {
        self.separator = separator;
    }

    /// Whether `token` starts with either prefix.
    pub(crate) fn is_prefixed(&self, token: &str) -> bool {
        token.starts_with(&self.prefix) || token.starts_with(&self.secondary_prefix)
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_SECONDARY_PREFIX, DEFAULT_SEPARATOR)
    }
}
