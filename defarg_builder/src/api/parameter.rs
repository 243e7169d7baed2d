use crate::model::{ArgumentType, Value};

/// A parameter recognized on the Cli.
///
/// `name` and `short_name` identify the parameter in its long (`--name=value`) and short (`-n value`) forms.
/// `id` is the key by which the resolved value is retrieved from a [`Parser`](./struct.Parser.html).
/// The default value is used whenever the parameter is not found on the Cli, or its value cannot convert to the parameter's type.
///
/// The [`ArgumentType`] of a parameter is taken from its default, so the two always agree.
///
/// ### Example
/// ```
/// # use defarg_builder as defarg;
/// use defarg::{ArgumentType, Parameter, Value};
///
/// let file = Parameter::string("file", "file", "f", "test.txt");
/// assert_eq!(file.argument_type(), ArgumentType::String);
/// assert_eq!(file.default_value(), &Value::String("test.txt".to_string()));
///
/// let count = Parameter::int("count", "count", "c", 10);
/// assert_eq!(count.argument_type(), ArgumentType::Int);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    id: String,
    name: String,
    short_name: String,
    default_value: Value,
}

impl Parameter {
    /// Create a [`ArgumentType::String`] parameter.
    pub fn string(
        id: impl Into<String>,
        name: impl Into<String>,
        short_name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self::new(id, name, short_name, Value::String(default_value.into()))
    }

    /// Create a [`ArgumentType::Int`] parameter.
    pub fn int(
        id: impl Into<String>,
        name: impl Into<String>,
        short_name: impl Into<String>,
        default_value: i32,
    ) -> Self {
        Self::new(id, name, short_name, Value::Int(default_value))
    }

    fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        short_name: impl Into<String>,
        default_value: Value,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: short_name.into(),
            default_value,
        }
    }

    /// The unique key of this parameter.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The long form name, without prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short form name, without prefix.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The type of this parameter's value.
    pub fn argument_type(&self) -> ArgumentType {
        self.default_value.argument_type()
    }

    /// The value used when the Cli does not provide one.
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{t}[{id}, {name}, {short}, {default}]",
            t = self.argument_type(),
            id = self.id,
            name = self.name,
            short = self.short_name,
            default = self.default_value,
        )
    }
}
