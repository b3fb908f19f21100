//! Command resolution: raw input to a typed [`Command`].
//!
//! Resolution happens in two steps. [`resolve_input`] turns a line typed at
//! a location into a `(verb, argument)` pair, expanding menu numbers into
//! their labels. [`parse_command`] then classifies that pair as a fixed
//! phrase, a priced phrase matched by prefix, or a single verb.

mod command;
mod input;
mod suggest;

pub use command::{Command, Phrase, Verb, parse_command};
pub use input::{Resolution, resolve_input};
pub use suggest::suggest_action;
