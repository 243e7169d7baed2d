//! Builder module for `defarg`.
//! See [documentation root](https://docs.rs/defarg/latest/defarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{ConfigError, GeneralParser, LookupError, ParseError, Parser};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
