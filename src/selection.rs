//! Parsing of the `<MONITORS>` argument.

use crate::error::Error;

/// Turn a comma-separated list of 1-based monitor numbers into indices into
/// a registry holding `count` monitors.
///
/// An empty string selects every monitor. Order and duplicates are kept as
/// given. A single bad token rejects the whole selection.
pub fn parse_selection(spec: &str, count: usize) -> Result<Vec<usize>, Error> {
    if spec.is_empty() {
        return Ok((0..count).collect());
    }

    spec.split(',')
        .map(|token| parse_index(token, count))
        .collect()
}

fn parse_index(token: &str, count: usize) -> Result<usize, Error> {
    let number: i64 = token
        .trim()
        .parse()
        .map_err(|_| Error::InvalidSelection(token.to_string()))?;

    match usize::try_from(number) {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(Error::IndexOutOfRange {
            index: number,
            count,
        }),
    }
}
