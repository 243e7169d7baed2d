//! `defarg` is a small, default-driven command line parser for Rust.
//!
//! Each parameter is declared with a long name, a short name, a type, an id and a default value.
//! The parser resolves every parameter exactly once, up front, and never fails on user input:
//! any parameter that is absent from the Cli (or whose value cannot convert to its type) takes its default.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! ```console
//! $ greeter
//! Hello, world!
//!
//! $ greeter --name=Alice -t 2
//! Hello, Alice!
//! Hello, Alice!
//!
//! $ greeter -n Alice Bob --times=abc
//! Hello, Alice Bob!
//! ```
//!
//! # Parameters
//! Create parameters with [`Parameter::string`] or [`Parameter::int`].
//! The [`ArgumentType`] of a parameter always agrees with its default value.
//!
//! * `id`: the key by which the value is retrieved, via [`Parser::string_value`] or [`Parser::int_value`].
//! * `name`: the long form name (ex: `file` for `--file=test.txt`).
//! * `short_name`: the short form name (ex: `f` for `-f test.txt`).
//! * `default_value`: the value used when the Cli does not provide one.
//!
//! Ids are expected to be unique.
//! When they are not, the first parameter declared with an id decides its value; later ones are ignored.
//!
//! # Cli Semantics
//! `defarg` scans the Cli tokens from left to right for each parameter.
//!
//! * *Long form*: a token `--NAME=VALUE` matches the parameter named `NAME`.
//! Only the first `=` separates; `--key=a=b` has the value `a=b`.
//! A token without the separator (ex: `--key`) is not a long form.
//! * *Short form*: a token starting with `-` and *ending* with the short name matches.
//! The value is every following token up to (not including) the next token which starts with `-` or `--`, joined by single spaces.
//! For example, `-k a b --other=c` gives `k` the value `a b`.
//! A short form followed directly by another prefixed token (or nothing) has the empty value.
//! * The last matching token wins; `--key=a -k b` gives the value `b`.
//! * Tokens which match no parameter are ignored.
//! * `Int` parameters remove all spaces from the value before converting to `i32`.
//! For example, `-k 30 000` gives the value `30000`.
//!
//! The prefixes and separator are configurable via [`CommandLineParser::prefix`], [`CommandLineParser::secondary_prefix`] and [`CommandLineParser::separator`].
//!
//! # Errors
//! Parsing itself never fails.
//! Requesting a value may fail with a [`LookupError`], which always indicates a programming error:
//! * the id belongs to no declared parameter, or
//! * the accessor does not match the parameter's type.
//!
//! [`ParseError`] is reserved; the current matching rules never produce it.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events describing how each parameter was resolved.
pub use defarg_builder::*;
