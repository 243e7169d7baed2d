use crate::api::Parameter;
use crate::model::Syntax;
use crate::parser::{ConfigError, GeneralParser};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use defarg_builder as defarg;
/// use defarg::CommandLineParser;
///
/// let parser = CommandLineParser::new()
///     // Configure with CommandLineParser::add.
///     .build();
/// parser.parse_tokens(&[]);
/// ```
#[derive(Debug, Default)]
pub struct CommandLineParser {
    syntax: Syntax,
    parameters: Vec<Parameter>,
}

impl CommandLineParser {
    /// Create a command line parser, with the default `--name=value` and `-n value` syntax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of the long form (default `--`).
    /// If repeated, only the final prefix will apply.
    ///
    /// ### Example
    /// ```
    /// # use defarg_builder as defarg;
    /// use defarg::{CommandLineParser, Parameter};
    ///
    /// let parser = CommandLineParser::new()
    ///     .prefix("++")
    ///     .add(Parameter::string("file", "file", "f", "a.txt"))
    ///     .build();
    /// let values = parser.parse_tokens(&["++file=b.txt"]);
    ///
    /// assert_eq!(values.string_value("file").unwrap(), "b.txt");
    /// ```
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.syntax.set_prefix(prefix.into());
        self
    }

    /// Set the prefix of the short form (default `-`).
    /// If repeated, only the final prefix will apply.
    pub fn secondary_prefix(mut self, secondary_prefix: impl Into<String>) -> Self {
        self.syntax.set_secondary_prefix(secondary_prefix.into());
        self
    }

    /// Set the separator between name and value in the long form (default `=`).
    /// If repeated, only the final separator will apply.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.syntax.set_separator(separator.into());
        self
    }

    /// Add a parameter to the command line parser.
    ///
    /// Parameters are resolved in the order they are added.
    /// When parameters share an id, the first added determines the value for that id.
    ///
    /// ### Example
    /// ```
    /// # use defarg_builder as defarg;
    /// use defarg::{CommandLineParser, Parameter};
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(Parameter::string("file", "file", "f", "a.txt"))
    ///     .add(Parameter::int("count", "count", "c", 1))
    ///     .build();
    /// let values = parser.parse_tokens(&["--file=b.txt", "-c", "2"]);
    ///
    /// assert_eq!(values.string_value("file").unwrap(), "b.txt");
    /// assert_eq!(values.int_value("count").unwrap(), 2);
    /// ```
    pub fn add(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: an empty prefix).
    pub fn build_parser(self) -> Result<GeneralParser, ConfigError> {
        let CommandLineParser { syntax, parameters } = self;

        for (token, value) in [
            ("prefix", syntax.prefix()),
            ("secondary prefix", syntax.secondary_prefix()),
            ("separator", syntax.separator()),
        ] {
            if value.is_empty() {
                return Err(ConfigError(format!("The {token} cannot be empty.")));
            }
        }

        if let Some(parameter) = parameters.iter().find(|p| p.name().is_empty()) {
            return Err(ConfigError(format!(
                "Parameter '{}' must have a non-empty name.",
                parameter.id()
            )));
        }

        Ok(GeneralParser::new(syntax, parameters))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: an empty prefix).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
