//! Contest-style batch text protocol.
//!
//! Input is a whitespace-delimited integer stream: a case count `t` followed
//! by `t` `(rows, cols)` pairs. Output is one heading token per line.

mod parser;
mod render;

pub use parser::{parse_batch, tokenize, ParseOptions, QueryBatch};
pub use render::{render_json, render_text};
