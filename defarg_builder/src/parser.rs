mod base;
mod middleware;

pub use base::{ConfigError, LookupError, ParseError, Parser};
pub use middleware::GeneralParser;
