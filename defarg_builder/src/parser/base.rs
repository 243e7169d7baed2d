use std::collections::hash_map::Entry;
use std::collections::HashMap;
use thiserror::Error;

use crate::api::Parameter;
use crate::matcher::*;
use crate::model::{ArgumentType, Syntax, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An invalid [`CommandLineParser`](./struct.CommandLineParser.html) configuration.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A value was requested for an id that the `Parser` cannot answer.
///
/// This always indicates a programming error on the caller's side (ex: a mistyped id), never a problem with the Cli input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No declared parameter carries the id.
    #[error("No matching parameter found for id '{id}'.")]
    NoMatchingParameter {
        /// The requested id.
        id: String,
    },
    /// The parameter with the id is declared with a different type than requested.
    #[error("Parameter '{id}' is declared as {declared}, but was requested as {requested}.")]
    MismatchedType {
        /// The requested id.
        id: String,
        /// The type the parameter was declared with.
        declared: ArgumentType,
        /// The type of the accessor used.
        requested: ArgumentType,
    },
}

/// Failure to parse a single argument.
///
/// Reserved: the matching rules never produce this error, since any token which cannot be matched is simply skipped.
/// A parameter whose value cannot be found (or converted) always resolves to its default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The argument names a parameter, but without either prefix.
    #[error("Argument '{argument}' contains parameter '{parameter}' but does not have any matching prefix.")]
    MissingPrefix {
        /// The offending Cli token.
        argument: String,
        /// The parameter name found in the token.
        parameter: String,
    },
}

/// The resolved values of a set of parameters.
///
/// The parser only reads the parameters; they remain owned by the caller.
///
/// All parameters are resolved eagerly, at construction.
/// Each parameter resolves to the value found on the Cli, or to its default when:
/// * no token matches the parameter, or
/// * the matched value cannot convert to the parameter's type.
///
/// When multiple parameters share an id, the first one (in declaration order) wins.
///
/// ### Example
/// ```
/// # use defarg_builder as defarg;
/// use defarg::{Parameter, Parser};
///
/// let parameters = vec![
///     Parameter::string("file", "file", "f", "default.txt"),
///     Parameter::int("count", "count", "c", 1),
///     Parameter::int("depth", "depth", "d", 10),
/// ];
/// let parser = Parser::new(["--file=test.txt", "-c", "3"], &parameters);
///
/// assert_eq!(parser.string_value("file").unwrap(), "test.txt");
/// assert_eq!(parser.int_value("count").unwrap(), 3);
/// assert_eq!(parser.int_value("depth").unwrap(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'p> {
    arguments: Vec<String>,
    syntax: Syntax,
    parameters: &'p [Parameter],
    string_values: HashMap<String, String>,
    int_values: HashMap<String, i32>,
}

impl<'p> Parser<'p> {
    /// Resolve `parameters` against `arguments`, using the default [`Syntax`] (`--name=value`, `-n value`).
    pub fn new<I, S>(arguments: I, parameters: &'p [Parameter]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_syntax(arguments, Syntax::default(), parameters)
    }

    /// Resolve `parameters` against `arguments`, using the provided `syntax`.
    ///
    /// ### Example
    /// ```
    /// # use defarg_builder as defarg;
    /// use defarg::{Parameter, Parser, Syntax};
    ///
    /// let parameters = [Parameter::string("file", "file", "f", "default.txt")];
    /// let parser = Parser::with_syntax(["++file:test.txt"], Syntax::new("++", "+", ":"), &parameters);
    ///
    /// assert_eq!(parser.string_value("file").unwrap(), "test.txt");
    /// ```
    pub fn with_syntax<I, S>(arguments: I, syntax: Syntax, parameters: &'p [Parameter]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let arguments: Vec<String> = arguments
            .into_iter()
            .map(|argument| argument.as_ref().to_string())
            .collect();
        let mut string_values: HashMap<String, String> = HashMap::default();
        let mut int_values: HashMap<String, i32> = HashMap::default();
        let token_matcher = TokenMatcher::new(&syntax, &arguments);

        for parameter in parameters {
            match parameter.default_value() {
                Value::String(default) => {
                    let value = resolve_string(&token_matcher, parameter, default);
                    insert_if_absent(&mut string_values, parameter.id(), value);
                }
                Value::Int(default) => {
                    let value = resolve_int(&token_matcher, parameter, *default);
                    insert_if_absent(&mut int_values, parameter.id(), value);
                }
            }
        }

        Self {
            arguments,
            syntax,
            parameters,
            string_values,
            int_values,
        }
    }

    /// Get the value of the [`ArgumentType::String`] parameter with `id`.
    pub fn string_value(&self, id: &str) -> Result<&str, LookupError> {
        if let Some(value) = self.string_values.get(id) {
            return Ok(value.as_str());
        }

        match self.parameter(id)?.default_value() {
            Value::String(default) => Ok(default.as_str()),
            Value::Int(_) => Err(LookupError::MismatchedType {
                id: id.to_string(),
                declared: ArgumentType::Int,
                requested: ArgumentType::String,
            }),
        }
    }

    /// Get the value of the [`ArgumentType::Int`] parameter with `id`.
    pub fn int_value(&self, id: &str) -> Result<i32, LookupError> {
        if let Some(value) = self.int_values.get(id) {
            return Ok(*value);
        }

        match self.parameter(id)?.default_value() {
            Value::Int(default) => Ok(*default),
            Value::String(_) => Err(LookupError::MismatchedType {
                id: id.to_string(),
                declared: ArgumentType::String,
                requested: ArgumentType::Int,
            }),
        }
    }

    /// The Cli tokens this parser resolved against.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The syntax used to recognize long and short forms.
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// The declared parameters, in declaration order.
    pub fn parameters(&self) -> &'p [Parameter] {
        self.parameters
    }

    fn parameter(&self, id: &str) -> Result<&'p Parameter, LookupError> {
        self.parameters
            .iter()
            .find(|parameter| parameter.id() == id)
            .ok_or_else(|| LookupError::NoMatchingParameter { id: id.to_string() })
    }
}

fn resolve_string(token_matcher: &TokenMatcher, parameter: &Parameter, default: &str) -> String {
    match token_matcher.find(parameter) {
        Some(found) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Resolved '{id}' from {found:?}.", id = parameter.id());
            }

            found.into_value()
        }
        None => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No match for '{id}', using default.", id = parameter.id());
            }

            default.to_string()
        }
    }
}

fn resolve_int(token_matcher: &TokenMatcher, parameter: &Parameter, default: i32) -> i32 {
    let found = match token_matcher.find(parameter) {
        Some(found) => found,
        None => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No match for '{id}', using default.", id = parameter.id());
            }

            return default;
        }
    };

    match convert_int(found.value()) {
        Some(value) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Resolved '{id}' from {found:?}.", id = parameter.id());
            }

            value
        }
        None => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Cannot convert '{v}' to i32 for '{id}', using default.",
                    v = found.value(),
                    id = parameter.id()
                );
            }

            default
        }
    }
}

// Spaces are dropped, so a short form `-n 30 000` reads as `30000`.
fn convert_int(value: &str) -> Option<i32> {
    value.replace(' ', "").parse::<i32>().ok()
}

fn insert_if_absent<V>(values: &mut HashMap<String, V>, id: &str, value: V) {
    match values.entry(id.to_string()) {
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
        Entry::Occupied(_) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Ignoring duplicate parameter id '{id}'.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn string_parameter() -> Parameter {
        Parameter::string("testdefault", "test", "t", "default")
    }

    fn int_parameter() -> Parameter {
        Parameter::int("test10", "test", "t", 10)
    }

    #[rstest]
    #[case(vec!["a", "--test2=c", "--test=b=bac"], "b=bac")]
    #[case(vec!["--test3=hallo", "-t", "a", "b"], "a b")]
    #[case(vec!["--test=a", "-t", "b"], "b")]
    #[case(vec!["-t"], "")]
    #[case(vec!["--test2=c"], "default")]
    #[case(vec![], "default")]
    fn parser_string(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        let parameters = vec![string_parameter()];
        let parser = Parser::new(tokens, &parameters);

        assert_eq!(parser.string_value("testdefault").unwrap(), expected);
    }

    #[rstest]
    #[case(vec!["10", "--test2=100", "--test=20"], 20)]
    #[case(vec!["--test4=40", "-t", "30", "000"], 30000)]
    #[case(vec!["--test=-7"], -7)]
    #[case(vec!["--test=+7"], 7)]
    #[case(vec!["--test= 1 2 "], 12)]
    #[case(vec!["--test=hallo"], 10)]
    #[case(vec!["--test=2147483648"], 10)]
    #[case(vec!["--test=1.5"], 10)]
    #[case(vec!["-t"], 10)]
    #[case(vec![], 10)]
    fn parser_int(#[case] tokens: Vec<&str>, #[case] expected: i32) {
        let parameters = vec![int_parameter()];
        let parser = Parser::new(tokens, &parameters);

        assert_eq!(parser.int_value("test10").unwrap(), expected);
    }

    #[test]
    fn parser_defaults() {
        for _ in 0..100 {
            let default: i32 = thread_rng().gen();
            let text = format!("text-{}", thread_rng().gen::<u32>());
            let parameters = vec![
                Parameter::string("s", "string", "s", text.clone()),
                Parameter::int("i", "int", "i", default),
            ];
            let parser = Parser::new(["unrelated", "--other=1", "-o", "2"], &parameters);

            assert_eq!(parser.string_value("s").unwrap(), text);
            assert_eq!(parser.int_value("i").unwrap(), default);
        }
    }

    #[test]
    fn parser_idempotent() {
        let parameters = vec![string_parameter(), int_parameter()];
        let parser = Parser::new(["--test=b", "--test=42"], &parameters);

        assert_eq!(parser.string_value("testdefault").unwrap(), "42");
        assert_eq!(parser.string_value("testdefault").unwrap(), "42");
        assert_eq!(parser.int_value("test10").unwrap(), 42);
        assert_eq!(parser.int_value("test10").unwrap(), 42);
    }

    #[test]
    fn parser_duplicate_id() {
        let parameters = vec![
            Parameter::string("id", "first", "f", "x"),
            Parameter::string("id", "second", "s", "y"),
        ];
        let parser = Parser::new(["--first=a", "--second=b"], &parameters);

        assert_eq!(parser.string_value("id").unwrap(), "a");
    }

    #[test]
    fn parser_duplicate_id_across_types() {
        let parameters = vec![
            Parameter::string("id", "test", "t", "x"),
            Parameter::int("id", "test", "t", 1),
        ];
        let parser = Parser::new(["--test=5"], &parameters);

        assert_eq!(parser.string_value("id").unwrap(), "5");
        assert_eq!(parser.int_value("id").unwrap(), 5);
    }

    #[test]
    fn parser_unknown_id() {
        let parameters = vec![string_parameter(), int_parameter()];
        let parser = Parser::new(["--test=b"], &parameters);

        assert_matches!(
            parser.string_value("unknown"),
            Err(LookupError::NoMatchingParameter { id }) if id == "unknown"
        );
        assert_matches!(
            parser.int_value("unknown"),
            Err(LookupError::NoMatchingParameter { id }) if id == "unknown"
        );
    }

    #[test]
    fn parser_mismatched_type() {
        let parameters = vec![string_parameter(), int_parameter()];
        let parser = Parser::new(["--test=b"], &parameters);

        assert_eq!(
            parser.int_value("testdefault").unwrap_err(),
            LookupError::MismatchedType {
                id: "testdefault".to_string(),
                declared: ArgumentType::String,
                requested: ArgumentType::Int,
            }
        );
        assert_eq!(
            parser.string_value("test10").unwrap_err(),
            LookupError::MismatchedType {
                id: "test10".to_string(),
                declared: ArgumentType::Int,
                requested: ArgumentType::String,
            }
        );
    }

    #[test]
    fn parser_with_syntax() {
        let syntax = Syntax::new("/", "+", ":");
        let parameters = vec![
            Parameter::string("s", "test", "x", "default"),
            Parameter::int("i", "other", "t", 1),
        ];
        let parser = Parser::with_syntax(["/test:a:b", "+t", "30", "000"], syntax.clone(), &parameters);

        assert_eq!(parser.string_value("s").unwrap(), "a:b");
        assert_eq!(parser.int_value("i").unwrap(), 30000);
        assert_eq!(parser.syntax(), &syntax);
    }

    #[test]
    fn parser_inputs() {
        let parameters = vec![string_parameter(), int_parameter()];
        let parser = Parser::new(["a", "-b"], &parameters);

        assert_eq!(parser.arguments(), &["a".to_string(), "-b".to_string()]);
        assert_eq!(parser.syntax(), &Syntax::default());
        assert_eq!(parser.parameters(), parameters.as_slice());
        assert!(std::ptr::eq(parser.parameters(), parameters.as_slice()));
    }

    #[test]
    fn parser_no_tokens() {
        let parameters = vec![string_parameter(), int_parameter()];
        let tokens: &[&str] = &[];
        let parser = Parser::new(tokens, &parameters);

        assert!(parser.arguments().is_empty());
        assert_eq!(parser.string_value("testdefault").unwrap(), "default");
        assert_eq!(parser.int_value("test10").unwrap(), 10);
    }

    #[rstest]
    #[case("10", Some(10))]
    #[case("30 000", Some(30000))]
    #[case(" -1 ", Some(-1))]
    #[case("", None)]
    #[case("a", None)]
    #[case("1\t2", None)]
    fn convert(#[case] value: &str, #[case] expected: Option<i32>) {
        assert_eq!(convert_int(value), expected);
    }

    #[test]
    fn parse_error_display() {
        let error = ParseError::MissingPrefix {
            argument: "test=a".to_string(),
            parameter: "test".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Argument 'test=a' contains parameter 'test' but does not have any matching prefix."
        );
    }
}
