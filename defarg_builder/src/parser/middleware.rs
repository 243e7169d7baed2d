use std::env;

use crate::api::Parameter;
use crate::model::Syntax;
use crate::parser::base::Parser;

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
#[derive(Debug, Clone)]
pub struct GeneralParser {
    syntax: Syntax,
    parameters: Vec<Parameter>,
}

impl GeneralParser {
    pub(crate) fn new(syntax: Syntax, parameters: Vec<Parameter>) -> Self {
        Self { syntax, parameters }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Every parameter is resolved immediately, either to its value on the Cli or to its default.
    /// Parsing never fails; unmatched tokens are ignored.
    ///
    /// ### Example
    /// ```
    /// # use defarg_builder as defarg;
    /// use defarg::{CommandLineParser, Parameter};
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(Parameter::int("port", "port", "p", 8080))
    ///     .build();
    ///
    /// let values = parser.parse_tokens(&[]);
    /// assert_eq!(values.int_value("port").unwrap(), 8080);
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> Parser<'_> {
        Parser::with_syntax(tokens, self.syntax.clone(), &self.parameters)
    }

    /// Run the command line parser against the Cli [`env::args`], skipping the program name.
    pub fn parse(&self) -> Parser<'_> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }
}
