//! Lexical layer of the ZPL toolkit: the command catalog, the tokenizer and the
//! scalar parameter types shared by the interpreter and the renderer.

pub mod catalog;
mod commands;
mod error;
mod parse;

pub use commands::*;
pub use error::*;
pub use parse::{parse_float, parse_int, split_params, tokenize};
