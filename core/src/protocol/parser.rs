//! Batch input parsing.

use tracing::{debug, warn};

use crate::domain::{GridDimensions, Integer};
use crate::error::{Error, Result};

/// Knobs for [`parse_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject tokens left over after the last declared case.
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// An ordered batch of grids parsed from protocol input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBatch {
    grids: Vec<GridDimensions>,
    trailing_tokens: usize,
}

impl QueryBatch {
    /// Grids in input order.
    pub fn grids(&self) -> &[GridDimensions] {
        &self.grids
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Tokens that followed the last case and were ignored.
    pub fn trailing_tokens(&self) -> usize {
        self.trailing_tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridDimensions> {
        self.grids.iter()
    }
}

impl<'a> IntoIterator for &'a QueryBatch {
    type Item = &'a GridDimensions;
    type IntoIter = std::slice::Iter<'a, GridDimensions>;

    fn into_iter(self) -> Self::IntoIter {
        self.grids.iter()
    }
}

/// Split input on any whitespace and parse every token as an integer.
///
/// Integers have no size limit. Blank lines and repeated separators produce
/// no tokens. The first token that fails to parse aborts with
/// [`Error::NonIntegerToken`].
pub fn tokenize(input: &str) -> Result<Vec<Integer>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            Integer::parse(token).ok_or_else(|| Error::NonIntegerToken {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Parse a full batch.
///
/// Empty input and `t == 0` both give an empty batch. Fewer than `2t`
/// integers after the count fails with [`Error::MalformedCount`]; nothing
/// partial is returned.
pub fn parse_batch(input: &str, options: ParseOptions) -> Result<QueryBatch> {
    let tokens = tokenize(input)?;
    let Some((declared, rest)) = tokens.split_first() else {
        debug!("Empty batch input");
        return Ok(QueryBatch::default());
    };

    if declared.is_negative() {
        return Err(Error::NegativeCount(declared.clone()));
    }

    let count = match declared.to_usize() {
        Some(count) if count <= rest.len() / 2 => count,
        _ => {
            return Err(Error::MalformedCount {
                declared: declared.clone(),
                available: rest.len(),
            })
        }
    };

    let grids = rest
        .chunks_exact(2)
        .take(count)
        .map(|pair| GridDimensions::new(pair[0].clone(), pair[1].clone()))
        .collect::<Result<Vec<_>>>()?;

    let trailing_tokens = rest.len() - 2 * count;
    if trailing_tokens > 0 {
        if options.strict {
            return Err(Error::TrailingTokens {
                count: trailing_tokens,
            });
        }
        warn!(trailing_tokens, "Ignoring tokens after the last case");
    }

    debug!(cases = count, "Parsed batch");
    Ok(QueryBatch {
        grids,
        trailing_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(batch: &QueryBatch) -> Vec<(String, String)> {
        batch
            .iter()
            .map(|g| (g.rows().to_string(), g.cols().to_string()))
            .collect()
    }

    fn small(tokens: &[Integer]) -> Vec<i64> {
        tokens.iter().map(|t| t.to_i64().unwrap()).collect()
    }

    #[test]
    fn test_tokenize_ignores_blank_lines() {
        let tokens = tokenize("  2\n\n\t1  3\r\n\n 4 5 \n").unwrap();
        assert_eq!(small(&tokens), vec![2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_tokenize_signed() {
        assert_eq!(small(&tokenize("+3 -2 007").unwrap()), vec![3, -2, 7]);
    }

    #[test]
    fn test_tokenize_rejects_garbage() {
        let err = tokenize("1 2 x3").unwrap_err();
        assert!(matches!(
            err,
            Error::NonIntegerToken { ref token, position: 2 } if token == "x3"
        ));
    }

    #[test]
    fn test_tokenize_accepts_oversized_integers() {
        let tokens = tokenize("99999999999999999999 -123456789012345678901234").unwrap();
        assert_eq!(tokens[0].to_string(), "99999999999999999999");
        assert!(tokens[1].is_negative());
        assert!(matches!(
            tokenize("1 1e30"),
            Err(Error::NonIntegerToken { position: 1, .. })
        ));
    }

    #[test]
    fn test_parse_oversized_dimensions() {
        let batch = parse_batch("1\n99999999999999999999 3", ParseOptions::default()).unwrap();
        assert_eq!(
            dims(&batch),
            vec![("99999999999999999999".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn test_parse_sample() {
        let batch = parse_batch("4\n\n1 1\n\n2 2\n\n3 1\n\n3 3\n", ParseOptions::default()).unwrap();
        let expected: Vec<_> = [("1", "1"), ("2", "2"), ("3", "1"), ("3", "3")]
            .iter()
            .map(|&(r, c)| (r.to_string(), c.to_string()))
            .collect();
        assert_eq!(dims(&batch), expected);
        assert_eq!(batch.trailing_tokens(), 0);
    }

    #[test]
    fn test_parse_empty_and_zero() {
        assert!(parse_batch("", ParseOptions::default()).unwrap().is_empty());
        assert!(parse_batch(" \n\n\t ", ParseOptions::default()).unwrap().is_empty());
        assert!(parse_batch("0", ParseOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_short_batch() {
        let err = parse_batch("2\n1 1\n", ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedCount { ref declared, available: 2 } if *declared == 2
        ));

        // An odd leftover does not complete a pair.
        let err = parse_batch("2 1 1 5", ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedCount { available: 3, .. }));
    }

    #[test]
    fn test_parse_huge_count() {
        let err = parse_batch(&format!("{} 1 1", i64::MAX), ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedCount { .. }));

        let err = parse_batch("100000000000000000000000 1 1", ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedCount { ref declared, available: 2 }
                if declared.to_string() == "100000000000000000000000"
        ));
    }

    #[test]
    fn test_parse_negative_count() {
        assert!(matches!(
            parse_batch("-1", ParseOptions::default()),
            Err(Error::NegativeCount(ref n)) if *n == -1
        ));
    }

    #[test]
    fn test_parse_invalid_dimensions() {
        assert!(matches!(
            parse_batch("2 1 1 0 4", ParseOptions::default()),
            Err(Error::InvalidDimensions { ref rows, ref cols }) if *rows == 0 && *cols == 4
        ));
    }

    #[test]
    fn test_non_integer_after_last_case_still_fails() {
        assert!(matches!(
            parse_batch("1 2 2 oops", ParseOptions::default()),
            Err(Error::NonIntegerToken { position: 3, .. })
        ));
    }

    #[test]
    fn test_trailing_tokens() {
        let batch = parse_batch("1 2 2 7 8 9", ParseOptions::default()).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.trailing_tokens(), 3);

        assert!(matches!(
            parse_batch("1 2 2 7 8 9", ParseOptions::strict()),
            Err(Error::TrailingTokens { count: 3 })
        ));
        assert!(parse_batch("1 2 2", ParseOptions::strict()).is_ok());
    }
}
