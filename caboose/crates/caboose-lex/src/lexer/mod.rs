//! Tokenizer module.
//!
//! The tokenizer is split into small components, each an `impl Mode` block:
//! - `core` - The `Mode` struct, the per-call driver and context bookkeeping
//! - `identifier` - Keyword, atom and name classification
//! - `number` - Numeric literals
//! - `string` - The string sub-tokenizer
//! - `operator` - Punctuation and operator runs
//! - `comment` - Line comments and the block comment sub-tokenizer

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Mode;
pub use self::operator::Punct;
