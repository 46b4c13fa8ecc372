//! Batch output rendering.

use crate::domain::{Answer, Direction};
use crate::error::Result;

/// One token per line, `\n`-joined, no trailing newline.
pub fn render_text<I>(directions: I) -> String
where
    I: IntoIterator<Item = Direction>,
{
    let mut out = String::new();
    for (i, dir) in directions.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push(dir.token());
    }
    out
}

/// Pretty JSON array of `{rows, cols, direction}` objects.
pub fn render_json(answers: &[Answer]) -> Result<String> {
    Ok(serde_json::to_string_pretty(answers)?)
}
