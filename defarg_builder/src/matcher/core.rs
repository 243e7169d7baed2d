use crate::api::Parameter;
use crate::model::Syntax;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A value found on the Cli for some parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Match {
    /// `--name=value`.
    Long(String),
    /// `-n value ...`.
    Short(String),
}

impl Match {
    pub(crate) fn value(&self) -> &str {
        match self {
            Match::Long(value) | Match::Short(value) => value,
        }
    }

    pub(crate) fn into_value(self) -> String {
        match self {
            Match::Long(value) | Match::Short(value) => value,
        }
    }
}

/// Scans the Cli tokens for the long and short forms of a parameter.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'a> {
    syntax: &'a Syntax,
    tokens: &'a [String],
}

impl<'a> TokenMatcher<'a> {
    pub(crate) fn new(syntax: &'a Syntax, tokens: &'a [String]) -> Self {
        Self { syntax, tokens }
    }

    /// Find the value of `parameter`, if any token names it.
    ///
    /// Every token is visited; the last matching token determines the value.
    pub(crate) fn find(&self, parameter: &Parameter) -> Option<Match> {
        let mut found = None;

        for (offset, token) in self.tokens.iter().enumerate() {
            if let Some(value) = self.match_long(token, parameter) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Long form '{token}' at {offset} matches '{parameter}'.");
                }

                found = Some(Match::Long(value.to_string()));
            } else if self.match_short(token, parameter) {
                let value = self.trailing_values(offset + 1);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Short form '{token}' at {offset} matches '{parameter}', with values '{value}'.");
                }

                found = Some(Match::Short(value));
            }
        }

        found
    }

    fn match_long<'t>(&self, token: &'t str, parameter: &Parameter) -> Option<&'t str> {
        let remainder = token.strip_prefix(self.syntax.prefix())?;
        // Only the first separator after the prefix splits; the value keeps any others.
        let (name, value) = remainder.split_once(self.syntax.separator())?;

        if name == parameter.name() {
            Some(value)
        } else {
            None
        }
    }

    fn match_short(&self, token: &str, parameter: &Parameter) -> bool {
        token.starts_with(self.syntax.secondary_prefix()) && token.ends_with(parameter.short_name())
    }

    fn trailing_values(&self, start: usize) -> String {
        self.tokens[start..]
            .iter()
            .take_while(|token| !self.syntax.is_prefixed(token))
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(" ")
    }
}
