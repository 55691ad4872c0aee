//! # keel-tags
//!
//! Parser for the compact field annotation grammar used by keel models.
//!
//! ```text
//! annotation    := [override-name] ("," flag)*
//! flag          := bare-flag | kv-flag
//! bare-flag     := required | computed | sensitive | optional | state
//!                | noread | nowrite | emptyIsNull
//! kv-flag       := default:<literal> | elementtype:<ident> | enum:<sep>v(<sep>v)* | fold:<ident>
//! ```
//!
//! [`parse`] is pure and total: every token must parse or the whole annotation
//! is rejected with a [`TagError`].

mod error;
mod flag;
mod flags;
mod parser;

pub use error::TagError;
pub use flag::{Flag, FlagKind};
pub use flags::ParsedFlags;
pub use parser::parse;
